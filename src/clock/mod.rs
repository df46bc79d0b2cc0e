// src/clock/mod.rs
//! Countdown timer and alarm clock

pub mod duration;
pub mod metrics;
pub mod state;
pub mod ticker;

pub use duration::{format_hms, parse_alarm_time, CountdownDuration};
pub use metrics::{MetricsSampler, SystemMetrics};
pub use state::{AlarmSource, ClockError, ClockState, Phase, Tick, Transition};
pub use ticker::Ticker;
