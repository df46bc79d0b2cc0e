// src/clock/state.rs
//! Countdown / alarm state machine
//!
//! Both the countdown and the alarm threshold can put the widget into the
//! alarming phase. They share one state value and one transition function,
//! [`ClockState::on_tick`], fed with ticks tagged by their source.

use super::duration::{format_hms, CountdownDuration};
use chrono::{Duration, NaiveDateTime, NaiveTime};
use thiserror::Error;
use tracing::{debug, info};

pub const ALARM_TEXT: &str = "ALARM!";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClockError {
    #[error("Countdown duration must be greater than zero.")]
    ZeroDuration,

    #[error("A countdown is already running.")]
    AlreadyRunning,

    #[error("Dismiss the alarm before starting a new countdown.")]
    Alarming,

    #[error("Invalid {field} value: '{value}'.")]
    InvalidField { field: &'static str, value: String },

    #[error("Invalid alarm time '{0}', expected HH:MM or HH:MM:SS.")]
    InvalidAlarmTime(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmSource {
    Countdown,
    AlarmTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running { remaining: u32 },
    Alarming(AlarmSource),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// One second of the countdown elapsed
    Countdown,
    /// Wall-clock refresh carrying the current local time
    WallClock(NaiveDateTime),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,
}

#[derive(Debug, Clone)]
pub struct ClockState {
    phase: Phase,
    alarm_at: Option<NaiveDateTime>,
    now: Option<NaiveDateTime>,
}

impl ClockState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            alarm_at: None,
            now: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    pub fn is_alarming(&self) -> bool {
        matches!(self.phase, Phase::Alarming(_))
    }

    /// The start control is only usable while idle
    pub fn can_start(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn remaining(&self) -> Option<u32> {
        match self.phase {
            Phase::Running { remaining } => Some(remaining),
            _ => None,
        }
    }

    /// Armed alarm target, if any
    pub fn alarm_at(&self) -> Option<NaiveDateTime> {
        self.alarm_at
    }

    /// Last wall-clock time seen
    pub fn now(&self) -> Option<NaiveDateTime> {
        self.now
    }

    pub fn start_countdown(&mut self, duration: CountdownDuration) -> Result<(), ClockError> {
        match self.phase {
            Phase::Running { .. } => return Err(ClockError::AlreadyRunning),
            Phase::Alarming(_) => return Err(ClockError::Alarming),
            Phase::Idle => {}
        }

        let remaining = duration.total_seconds();
        if remaining == 0 {
            return Err(ClockError::ZeroDuration);
        }

        self.phase = Phase::Running { remaining };
        info!(seconds = remaining, "countdown started");
        Ok(())
    }

    /// Abandon a running countdown
    pub fn cancel(&mut self) -> Option<Transition> {
        match self.phase {
            Phase::Running { .. } => {
                info!("countdown cancelled");
                Some(self.enter(Phase::Idle))
            }
            _ => None,
        }
    }

    /// Acknowledge the alarm and go back to idle
    pub fn dismiss(&mut self) -> Option<Transition> {
        match self.phase {
            Phase::Alarming(_) => {
                info!("alarm dismissed");
                Some(self.enter(Phase::Idle))
            }
            _ => None,
        }
    }

    /// Arm the alarm for the next occurrence of `time` strictly after `now`.
    /// Replaces any previously armed alarm.
    pub fn set_alarm(&mut self, time: NaiveTime, now: NaiveDateTime) -> NaiveDateTime {
        let today = now.date().and_time(time);
        let target = if today > now {
            today
        } else {
            today + Duration::days(1)
        };
        self.alarm_at = Some(target);
        info!(%target, "alarm armed");
        target
    }

    pub fn clear_alarm(&mut self) {
        if self.alarm_at.take().is_some() {
            info!("alarm cleared");
        }
    }

    /// Single transition function for both tick sources
    pub fn on_tick(&mut self, tick: Tick) -> Option<Transition> {
        match tick {
            Tick::Countdown => match self.phase {
                Phase::Running { remaining } => {
                    let remaining = remaining.saturating_sub(1);
                    debug!(remaining, "countdown tick");
                    if remaining == 0 {
                        info!("countdown finished");
                        Some(self.enter(Phase::Alarming(AlarmSource::Countdown)))
                    } else {
                        self.phase = Phase::Running { remaining };
                        None
                    }
                }
                _ => None,
            },
            Tick::WallClock(now) => {
                self.now = Some(now);
                match self.alarm_at {
                    Some(target) if now >= target => {
                        // One-shot: disarm so later ticks do not fire again
                        self.alarm_at = None;
                        info!(%target, "alarm time reached");
                        Some(self.enter(Phase::Alarming(AlarmSource::AlarmTime)))
                    }
                    _ => None,
                }
            }
        }
    }

    /// Text for the large status display
    pub fn display_text(&self) -> String {
        match self.phase {
            Phase::Idle => format_hms(0),
            Phase::Running { remaining } => format_hms(remaining),
            Phase::Alarming(_) => ALARM_TEXT.to_string(),
        }
    }

    fn enter(&mut self, to: Phase) -> Transition {
        let from = self.phase;
        self.phase = to;
        Transition { from, to }
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new()
    }
}
