// src/clock/duration.rs
//! Countdown duration and alarm time input parsing

use super::state::ClockError;
use chrono::NaiveTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownDuration {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl CountdownDuration {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Parse the three text fields of the countdown form. Blank fields count as
    /// zero; minutes and seconds above 59 simply add up.
    pub fn parse(hours: &str, minutes: &str, seconds: &str) -> Result<Self, ClockError> {
        Ok(Self {
            hours: parse_field("hours", hours)?,
            minutes: parse_field("minutes", minutes)?,
            seconds: parse_field("seconds", seconds)?,
        })
    }

    pub fn total_seconds(&self) -> u32 {
        self.hours
            .saturating_mul(3600)
            .saturating_add(self.minutes.saturating_mul(60))
            .saturating_add(self.seconds)
    }
}

fn parse_field(field: &'static str, text: &str) -> Result<u32, ClockError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse::<u32>().map_err(|_| ClockError::InvalidField {
        field,
        value: text.to_string(),
    })
}

/// Render a second count as `HH:MM:SS`
pub fn format_hms(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Accepts `HH:MM:SS` or `HH:MM`
pub fn parse_alarm_time(text: &str) -> Result<NaiveTime, ClockError> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .map_err(|_| ClockError::InvalidAlarmTime(text.to_string()))
}
