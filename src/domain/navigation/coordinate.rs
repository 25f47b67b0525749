//! Geographic coordinate with the strict map-rendering invariant.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields::{require_number, require_object};
use super::Rejection;

/// Largest accepted absolute latitude.
pub const MAX_LATITUDE: f64 = 90.0;

/// Largest accepted absolute longitude.
pub const MAX_LONGITUDE: f64 = 180.0;

/// A point on the map.
///
/// Always finite, within `|lat| <= 90` and `|lng| <= 180`, and never
/// exactly `(0, 0)`: an origin coordinate is what an unset field defaults
/// to, so it is treated as absent rather than plotted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = Rejection;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.lat, raw.lng)
    }
}

impl Coordinate {
    /// Creates a coordinate, enforcing bounds and the origin rule.
    pub fn new(lat: f64, lng: f64) -> Result<Self, Rejection> {
        if !lat.is_finite() || lat.abs() > MAX_LATITUDE {
            return Err(Rejection::new("lat", "out of range"));
        }
        if !lng.is_finite() || lng.abs() > MAX_LONGITUDE {
            return Err(Rejection::new("lng", "out of range"));
        }
        if lat == 0.0 && lng == 0.0 {
            return Err(Rejection::new("lat", "origin placeholder"));
        }
        Ok(Self { lat, lng })
    }

    /// Parses an untrusted `{lat, lng}` object, coercing numeric text.
    pub fn parse(value: &Value) -> Result<Self, Rejection> {
        let obj = require_object(value, "coordinate")?;
        let lat = require_number(obj, "lat")?;
        let lng = require_number(obj, "lng")?;
        Self::new(lat, lng)
    }
}

/// Sanitizing constructor for a coordinate.
pub fn validate_coordinate(value: &Value) -> Option<Coordinate> {
    Coordinate::parse(value).ok()
}

/// Type guard: `value` is a renderable coordinate.
pub fn is_coordinate(value: &Value) -> bool {
    Coordinate::parse(value).is_ok()
}

/// Keeps the valid points of an untrusted path, in order.
///
/// Refuses the path when it is not an array or nothing valid remains.
pub(crate) fn sanitize_path(value: Option<&Value>) -> Result<Vec<Coordinate>, Rejection> {
    let points = value
        .and_then(Value::as_array)
        .ok_or(Rejection::new("path", "not an array"))?;
    let path: Vec<Coordinate> = points.iter().filter_map(validate_coordinate).collect();
    if path.is_empty() {
        return Err(Rejection::new("path", "no valid points"));
    }
    Ok(path)
}

/// True when `value` is a non-empty array made only of valid coordinates.
pub(crate) fn is_clean_path(value: Option<&Value>) -> bool {
    match value.and_then(Value::as_array) {
        Some(points) => !points.is_empty() && points.iter().all(is_coordinate),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn accepts_campus_coordinate() {
        let coord = validate_coordinate(&json!({"lat": 20.48, "lng": 85.87})).unwrap();
        assert_eq!(coord, Coordinate { lat: 20.48, lng: 85.87 });
    }

    #[test]
    fn coerces_numeric_text() {
        let coord = validate_coordinate(&json!({"lat": "20.48", "lng": "85.87"})).unwrap();
        assert_eq!(coord.lat, 20.48);
        assert_eq!(coord.lng, 85.87);
    }

    #[test]
    fn rejects_origin_placeholder() {
        assert!(!is_coordinate(&json!({"lat": 0, "lng": 0})));
        assert!(!is_coordinate(&json!({"lat": "0", "lng": 0.0})));
    }

    #[test]
    fn accepts_single_zero_axis() {
        assert!(is_coordinate(&json!({"lat": 0, "lng": 85.87})));
        assert!(is_coordinate(&json!({"lat": 20.48, "lng": 0})));
    }

    #[test]
    fn accepts_exact_bounds() {
        assert!(is_coordinate(&json!({"lat": 90, "lng": 180})));
        assert!(is_coordinate(&json!({"lat": -90, "lng": -180})));
    }

    #[test]
    fn rejects_missing_or_malformed_fields() {
        assert!(!is_coordinate(&json!({"lat": 20.48})));
        assert!(!is_coordinate(&json!({"lat": "north", "lng": 85.87})));
        assert!(!is_coordinate(&json!({"lat": null, "lng": 85.87})));
        assert!(!is_coordinate(&json!([20.48, 85.87])));
        assert!(!is_coordinate(&json!("20.48,85.87")));
    }

    #[test]
    fn sanitize_path_drops_bad_points() {
        let path = json!([
            {"lat": 20.48, "lng": 85.87},
            {"lat": 0, "lng": 0},
            {"lat": 20.481, "lng": 85.871}
        ]);
        let clean = sanitize_path(Some(&path)).unwrap();
        assert_eq!(clean.len(), 2);
        assert_eq!(clean[1].lat, 20.481);
    }

    #[test]
    fn sanitize_path_refuses_empty_result() {
        assert!(sanitize_path(Some(&json!([]))).is_err());
        assert!(sanitize_path(Some(&json!([{"lat": 95, "lng": 0}]))).is_err());
        assert!(sanitize_path(Some(&json!("path"))).is_err());
        assert!(sanitize_path(None).is_err());
    }

    #[test]
    fn clean_path_requires_every_point() {
        let mixed = json!([{"lat": 20.48, "lng": 85.87}, {"lat": 0, "lng": 0}]);
        assert!(!is_clean_path(Some(&mixed)));
        let good = json!([{"lat": 20.48, "lng": 85.87}]);
        assert!(is_clean_path(Some(&good)));
    }

    #[test]
    fn typed_deserialization_enforces_invariant() {
        assert!(serde_json::from_value::<Coordinate>(json!({"lat": 0.0, "lng": 0.0})).is_err());
        assert!(serde_json::from_value::<Coordinate>(json!({"lat": 91.0, "lng": 1.0})).is_err());
        assert!(serde_json::from_value::<Coordinate>(json!({"lat": 20.5, "lng": 85.9})).is_ok());
    }

    proptest! {
        #[test]
        fn out_of_range_latitude_fails(lat in 90.000_001f64..1.0e6, lng in -180.0f64..=180.0, neg in any::<bool>()) {
            let lat = if neg { -lat } else { lat };
            let candidate = json!({"lat": lat, "lng": lng});
            prop_assert!(!is_coordinate(&candidate), "lat {} lng {} accepted", lat, lng);
        }

        #[test]
        fn out_of_range_longitude_fails(lat in -90.0f64..=90.0, lng in 180.000_001f64..1.0e6, neg in any::<bool>()) {
            let lng = if neg { -lng } else { lng };
            let candidate = json!({"lat": lat, "lng": lng});
            prop_assert!(!is_coordinate(&candidate), "lat {} lng {} accepted", lat, lng);
        }

        #[test]
        fn in_range_non_origin_succeeds(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            prop_assume!(!(lat == 0.0 && lng == 0.0));
            let coord = validate_coordinate(&json!({"lat": lat, "lng": lng}));
            prop_assert_eq!(coord, Some(Coordinate { lat, lng }));
        }
    }
}
