// src/lib.rs
//! Desktop utilities library
//!
//! Two independent tools sharing one crate: a clock widget with countdown
//! timer and alarm, and a geodesic distance calculator with KML export.

pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod geo;

// Re-export main types for convenience
pub use clock::{ClockState, CountdownDuration, Phase, Tick};
pub use config::FontSettings;
pub use error::{AppError, Result};
pub use export::{export_points, KmlExporter};
pub use geo::{measure, validate_points, Coordinate, DistanceReport, PointInput, ValidationError};

#[cfg(feature = "gui")]
pub use display::gui::{ClockApp, DistanceApp};
