// src/geo/mod.rs
//! Coordinate validation and geodesic distance

pub mod distance;
pub mod point;

pub use distance::{geodesic_distance, measure, total_distance, DistanceReport, DistanceUnit};
pub use point::{validate_points, Coordinate, PointInput, ValidationError, MAX_POINTS};
