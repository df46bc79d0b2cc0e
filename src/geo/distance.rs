// src/geo/distance.rs
//! Cumulative geodesic distance and unit conversion

use super::point::{validate_points, Coordinate, PointInput, ValidationError};
use geographiclib_rs::{Geodesic, InverseGeodesic};

pub const METERS_PER_KILOMETER: f64 = 1000.0;
pub const METERS_PER_MILE: f64 = 1609.344;
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Distance between two points on the WGS-84 ellipsoid, in meters
pub fn geodesic_distance(a: Coordinate, b: Coordinate) -> f64 {
    distance_on(&Geodesic::wgs84(), a, b)
}

fn distance_on(ellipsoid: &Geodesic, a: Coordinate, b: Coordinate) -> f64 {
    let meters: f64 = ellipsoid.inverse(a.latitude, a.longitude, b.latitude, b.longitude);
    meters
}

/// Sum of the legs between consecutive points, in input order
pub fn total_distance(points: &[Coordinate]) -> f64 {
    let ellipsoid = Geodesic::wgs84();
    points
        .windows(2)
        .map(|leg| distance_on(&ellipsoid, leg[0], leg[1]))
        .sum()
}

/// Validate the input rows and measure the path through them.
///
/// Ranges are not validated, and the ellipsoid solution has no answer for
/// latitudes beyond the poles, so a non-finite total is reported as an error.
pub fn measure(inputs: &[PointInput]) -> Result<DistanceReport, ValidationError> {
    let points = validate_points(inputs)?;
    let meters = total_distance(&points);
    if !meters.is_finite() {
        tracing::warn!(points = points.len(), "geodesic total is not finite");
        return Err(ValidationError::UndefinedDistance);
    }
    let report = DistanceReport::from_meters(meters);
    tracing::debug!(points = points.len(), meters = report.meters(), "measured path");
    Ok(report)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Meters,
    Kilometers,
    Miles,
    NauticalMiles,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 4] = [
        DistanceUnit::Meters,
        DistanceUnit::Kilometers,
        DistanceUnit::Miles,
        DistanceUnit::NauticalMiles,
    ];

    pub fn meters_per_unit(&self) -> f64 {
        match self {
            DistanceUnit::Meters => 1.0,
            DistanceUnit::Kilometers => METERS_PER_KILOMETER,
            DistanceUnit::Miles => METERS_PER_MILE,
            DistanceUnit::NauticalMiles => METERS_PER_NAUTICAL_MILE,
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::NauticalMiles => "nmi",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            DistanceUnit::Meters => "Meters",
            DistanceUnit::Kilometers => "Kilometers",
            DistanceUnit::Miles => "Miles",
            DistanceUnit::NauticalMiles => "Nautical miles",
        }
    }
}

/// A total distance, kept in meters and re-expressed on demand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceReport {
    meters: f64,
}

impl DistanceReport {
    pub fn from_meters(meters: f64) -> Self {
        Self { meters }
    }

    pub fn meters(&self) -> f64 {
        self.meters
    }

    pub fn kilometers(&self) -> f64 {
        self.in_unit(DistanceUnit::Kilometers)
    }

    pub fn miles(&self) -> f64 {
        self.in_unit(DistanceUnit::Miles)
    }

    pub fn nautical_miles(&self) -> f64 {
        self.in_unit(DistanceUnit::NauticalMiles)
    }

    pub fn in_unit(&self, unit: DistanceUnit) -> f64 {
        self.meters / unit.meters_per_unit()
    }

    /// Two-decimal rendering, e.g. `"12.34 km"`
    pub fn format(&self, unit: DistanceUnit) -> String {
        format!("{:.2} {}", self.in_unit(unit), unit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_DEGREE_AT_EQUATOR: f64 = 111_319.490_793;

    #[test]
    fn test_equatorial_degree() {
        let d = geodesic_distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
        assert!((d - ONE_DEGREE_AT_EQUATOR).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_same_point_is_zero() {
        let p = Coordinate::new(48.8566, 2.3522);
        assert!(geodesic_distance(p, p).abs() < 1e-9);
    }

    #[test]
    fn test_total_is_sum_of_legs() {
        let a = Coordinate::new(51.5074, -0.1278);
        let b = Coordinate::new(48.8566, 2.3522);
        let c = Coordinate::new(52.5200, 13.4050);

        let expected = geodesic_distance(a, b) + geodesic_distance(b, c);
        let total = total_distance(&[a, b, c]);
        assert!((total - expected).abs() < 1e-6);
    }

    #[test]
    fn test_total_depends_on_order() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 10.0);
        let c = Coordinate::new(0.0, 5.0);

        let abc = total_distance(&[a, b, c]);
        let acb = total_distance(&[a, c, b]);
        assert!(abc > acb);
        assert!((abc - 1.5 * acb).abs() < 1.0);
    }

    #[test]
    fn test_single_point_total() {
        assert_eq!(total_distance(&[Coordinate::new(1.0, 1.0)]), 0.0);
        assert_eq!(total_distance(&[]), 0.0);
    }

    #[test]
    fn test_miles_match_meters() {
        let report = DistanceReport::from_meters(geodesic_distance(
            Coordinate::new(40.7128, -74.0060),
            Coordinate::new(34.0522, -118.2437),
        ));
        let expected = format!("{:.2} mi", report.meters() / 1609.344);
        assert_eq!(report.format(DistanceUnit::Miles), expected);
    }

    #[test]
    fn test_unit_conversions() {
        let report = DistanceReport::from_meters(3704.0);
        assert_eq!(report.kilometers(), 3.704);
        assert_eq!(report.nautical_miles(), 2.0);
        assert_eq!(report.format(DistanceUnit::Meters), "3704.00 m");
        assert_eq!(report.format(DistanceUnit::Kilometers), "3.70 km");
        assert_eq!(report.format(DistanceUnit::NauticalMiles), "2.00 nmi");
        assert_eq!(DistanceReport::from_meters(1609.344).format(DistanceUnit::Miles), "1.00 mi");
    }

    #[test]
    fn test_measure_rejects_bad_input() {
        let inputs = vec![PointInput::new("1", "2")];
        assert_eq!(measure(&inputs).unwrap_err(), ValidationError::TooFewPoints);
    }

    #[test]
    fn test_measure_rejects_non_finite_text() {
        for lat in ["nan", "inf", "1e400"] {
            let inputs = vec![PointInput::new(lat, "0"), PointInput::new("0", "1")];
            assert_eq!(measure(&inputs).unwrap_err(), ValidationError::MandatoryPoint(1));
        }
    }

    #[test]
    fn test_measure_rejects_latitude_past_pole() {
        let inputs = vec![PointInput::new("123", "500"), PointInput::new("0", "1")];
        let err = measure(&inputs).unwrap_err();
        assert_eq!(err, ValidationError::UndefinedDistance);
        assert_eq!(err.to_string(), "Distance is undefined for these coordinates.");
    }

    #[test]
    fn test_measure_two_points() {
        let inputs = vec![PointInput::new("0", "0"), PointInput::new("0", "1")];
        let report = measure(&inputs).unwrap();
        assert_eq!(report.format(DistanceUnit::Kilometers), "111.32 km");
    }
}
