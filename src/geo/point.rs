// src/geo/point.rs
//! Coordinate input parsing and validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of coordinate slots offered to the user
pub const MAX_POINTS: usize = 5;

/// Slots 1..=MANDATORY_POINTS must always be filled in
const MANDATORY_POINTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Raw text of one latitude/longitude row, as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointInput {
    pub latitude: String,
    pub longitude: String,
}

impl PointInput {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.latitude.trim().is_empty() && self.longitude.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.latitude.clear();
        self.longitude.clear();
    }
}

/// Rejection reasons. The display text is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Point {0} is mandatory and must be complete.")]
    MandatoryPoint(usize),

    #[error("Point {0} is incomplete.")]
    IncompletePoint(usize),

    #[error("Point {point} has an invalid coordinate: '{value}'.")]
    InvalidNumber { point: usize, value: String },

    #[error("At least two points are required.")]
    TooFewPoints,

    #[error("Distance is undefined for these coordinates.")]
    UndefinedDistance,
}

/// Validate up to [`MAX_POINTS`] input rows into an ordered coordinate list.
///
/// Rows 1 and 2 must hold two finite numbers. Later rows are either fully
/// blank (skipped) or fully specified. Order is preserved and nothing is
/// deduplicated. Latitude/longitude ranges are not checked.
pub fn validate_points(inputs: &[PointInput]) -> Result<Vec<Coordinate>, ValidationError> {
    let mut points = Vec::with_capacity(MAX_POINTS);

    for (index, input) in inputs.iter().take(MAX_POINTS).enumerate() {
        let number = index + 1;
        let lat = input.latitude.trim();
        let lon = input.longitude.trim();

        if number <= MANDATORY_POINTS {
            match (parse_finite(lat), parse_finite(lon)) {
                (Some(latitude), Some(longitude)) => points.push(Coordinate::new(latitude, longitude)),
                _ => return Err(ValidationError::MandatoryPoint(number)),
            }
            continue;
        }

        match (lat.is_empty(), lon.is_empty()) {
            (true, true) => continue,
            (true, false) | (false, true) => return Err(ValidationError::IncompletePoint(number)),
            (false, false) => {
                let latitude = parse_field(number, lat)?;
                let longitude = parse_field(number, lon)?;
                points.push(Coordinate::new(latitude, longitude));
            }
        }
    }

    if points.len() < MANDATORY_POINTS {
        return Err(ValidationError::TooFewPoints);
    }

    Ok(points)
}

/// `f64::from_str` also takes "nan", "inf" and overflowing literals like "1e400"
fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_field(point: usize, text: &str) -> Result<f64, ValidationError> {
    parse_finite(text).ok_or_else(|| ValidationError::InvalidNumber {
        point,
        value: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(&str, &str)]) -> Vec<PointInput> {
        pairs.iter().map(|(lat, lon)| PointInput::new(*lat, *lon)).collect()
    }

    #[test]
    fn test_two_mandatory_points() {
        let points = validate_points(&rows(&[("1.0", "2.0"), ("3.0", "4.0"), ("", ""), ("", ""), ("", "")]))
            .unwrap();
        assert_eq!(points, vec![Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)]);
    }

    #[test]
    fn test_optional_points_kept_in_order() {
        let points = validate_points(&rows(&[
            ("10", "20"),
            ("11", "21"),
            ("", ""),
            ("13", "23"),
            ("12", "22"),
        ]))
        .unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[2], Coordinate::new(13.0, 23.0));
        assert_eq!(points[3], Coordinate::new(12.0, 22.0));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let points = validate_points(&rows(&[(" 1.5 ", "\t2"), ("3", "4 "), ("  ", " ")])).unwrap();
        assert_eq!(points, vec![Coordinate::new(1.5, 2.0), Coordinate::new(3.0, 4.0)]);
    }

    #[test]
    fn test_missing_mandatory_field() {
        let err = validate_points(&rows(&[("1.0", ""), ("3.0", "4.0")])).unwrap_err();
        assert_eq!(err, ValidationError::MandatoryPoint(1));
        assert_eq!(err.to_string(), "Point 1 is mandatory and must be complete.");

        let err = validate_points(&rows(&[("1.0", "2.0"), ("", "4.0")])).unwrap_err();
        assert_eq!(err.to_string(), "Point 2 is mandatory and must be complete.");
    }

    #[test]
    fn test_unparseable_mandatory_field() {
        let err = validate_points(&rows(&[("north", "2.0"), ("3.0", "4.0")])).unwrap_err();
        assert_eq!(err, ValidationError::MandatoryPoint(1));
    }

    #[test]
    fn test_half_filled_optional_point() {
        let err = validate_points(&rows(&[("1", "2"), ("3", "4"), ("5", "")])).unwrap_err();
        assert_eq!(err, ValidationError::IncompletePoint(3));
        assert_eq!(err.to_string(), "Point 3 is incomplete.");

        let err = validate_points(&rows(&[("1", "2"), ("3", "4"), ("", ""), ("", ""), ("", "9")]))
            .unwrap_err();
        assert_eq!(err, ValidationError::IncompletePoint(5));
    }

    #[test]
    fn test_non_numeric_optional_point() {
        let err = validate_points(&rows(&[("1", "2"), ("3", "4"), ("5", "abc")])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidNumber {
                point: 3,
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_non_finite_mandatory_values() {
        for text in ["nan", "NaN", "inf", "-infinity", "1e400"] {
            let err = validate_points(&rows(&[(text, "0"), ("0", "1")])).unwrap_err();
            assert_eq!(err, ValidationError::MandatoryPoint(1), "input {:?}", text);

            let err = validate_points(&rows(&[("0", "0"), ("0", text)])).unwrap_err();
            assert_eq!(err, ValidationError::MandatoryPoint(2), "input {:?}", text);
        }
    }

    #[test]
    fn test_non_finite_optional_values() {
        for text in ["nan", "inf", "1e400"] {
            let err = validate_points(&rows(&[("0", "0"), ("0", "1"), ("2", text)])).unwrap_err();
            assert_eq!(
                err,
                ValidationError::InvalidNumber {
                    point: 3,
                    value: text.to_string()
                }
            );
        }
    }

    #[test]
    fn test_single_point_supplied() {
        let err = validate_points(&rows(&[("1", "2")])).unwrap_err();
        assert_eq!(err, ValidationError::TooFewPoints);
        assert_eq!(err.to_string(), "At least two points are required.");
    }

    #[test]
    fn test_out_of_range_values_accepted() {
        let points = validate_points(&rows(&[("123.0", "500.0"), ("-95", "0")])).unwrap();
        assert_eq!(points[0].latitude, 123.0);
        assert_eq!(points[0].longitude, 500.0);
    }

    #[test]
    fn test_extra_rows_ignored() {
        let mut inputs = rows(&[("1", "2"), ("3", "4"), ("", ""), ("", ""), ("", "")]);
        inputs.push(PointInput::new("x", ""));
        assert_eq!(validate_points(&inputs).unwrap().len(), 2);
    }
}
