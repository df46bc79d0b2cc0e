// src/clock/ticker.rs
//! Fixed-period tick source polled from the UI loop

use std::time::{Duration, Instant};

pub const ONE_SECOND: Duration = Duration::from_secs(1);

/// Emits whole periods elapsed since it was started or last polled.
///
/// Polling from the frame loop never yields overlapping ticks: each call
/// returns the number of complete periods due, and the schedule stays aligned
/// to the start instant rather than drifting with frame timing.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            last: start,
        }
    }

    pub fn every_second(start: Instant) -> Self {
        Self::new(ONE_SECOND, start)
    }

    /// Number of ticks due at `now`
    pub fn poll(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last);
        let due = (elapsed.as_nanos() / self.period.as_nanos()) as u32;
        if due > 0 {
            self.last += self.period * due;
        }
        due
    }

    /// Time left until the next tick is due
    pub fn until_next(&self, now: Instant) -> Duration {
        (self.last + self.period).saturating_duration_since(now)
    }

    /// Restart the schedule from `now`
    pub fn reset(&mut self, now: Instant) {
        self.last = now;
    }
}
