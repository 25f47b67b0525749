//! Itinerary stops and the connecting lines between them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields::{
    optional_floor, optional_integer, optional_text, require_label, require_number,
    require_object, require_text,
};
use super::{Coordinate, Rejection};

/// A stop on a visit plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryLocation {
    pub name: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Display and traversal order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_landmark: Option<String>,
}

impl ItineraryLocation {
    /// Parses an untrusted stop. `lat`/`lng` go through the same
    /// coordinate rule as every other map point.
    pub fn parse(value: &Value) -> Result<Self, Rejection> {
        let obj = require_object(value, "location")?;
        let name = require_label(obj, "name")?.to_string();
        let description = require_text(obj, "description")?.to_string();
        let position = Coordinate::new(require_number(obj, "lat")?, require_number(obj, "lng")?)?;

        Ok(Self {
            name,
            description,
            lat: position.lat,
            lng: position.lng,
            time: optional_text(obj, "time")?,
            duration: optional_text(obj, "duration")?,
            sequence: optional_integer(obj, "sequence")?,
            floor: optional_floor(obj, "floor")?,
            internal_landmark: optional_text(obj, "internalLandmark")?,
        })
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        Self::parse(value).ok()
    }

    pub fn position(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lng: self.lng,
        }
    }

    /// Sort key; a missing sequence sorts as 0.
    pub fn sort_key(&self) -> i64 {
        self.sequence.unwrap_or(0)
    }
}

/// Type guard for [`ItineraryLocation`].
pub fn is_itinerary_location(value: &Value) -> bool {
    ItineraryLocation::parse(value).is_ok()
}

/// Stable ascending sort by sequence; equal keys keep arrival order.
pub fn sort_by_sequence(locations: &mut [ItineraryLocation]) {
    locations.sort_by_key(ItineraryLocation::sort_key);
}

/// A line drawn between two itinerary points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRoute {
    pub name: String,
    pub start: Coordinate,
    pub end: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<String>,
}

impl ItineraryRoute {
    pub fn parse(value: &Value) -> Result<Self, Rejection> {
        let obj = require_object(value, "line")?;
        let name = require_label(obj, "name")?.to_string();
        let start = obj
            .get("start")
            .ok_or(Rejection::missing("start"))
            .and_then(Coordinate::parse)?;
        let end = obj
            .get("end")
            .ok_or(Rejection::missing("end"))
            .and_then(Coordinate::parse)?;

        Ok(Self {
            name,
            start,
            end,
            transport: optional_text(obj, "transport")?,
            travel_time: optional_text(obj, "travelTime")?,
        })
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        Self::parse(value).ok()
    }
}

/// Type guard for [`ItineraryRoute`].
pub fn is_itinerary_route(value: &Value) -> bool {
    ItineraryRoute::parse(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stop(name: &str, sequence: Option<i64>) -> ItineraryLocation {
        ItineraryLocation {
            name: name.to_string(),
            description: String::new(),
            lat: 20.48,
            lng: 85.87,
            time: None,
            duration: None,
            sequence,
            floor: None,
            internal_landmark: None,
        }
    }

    #[test]
    fn parses_full_location() {
        let location = ItineraryLocation::from_value(&json!({
            "name": "OPD Registration",
            "description": "Collect your token",
            "lat": "20.4801",
            "lng": 85.8702,
            "time": "09:00",
            "duration": "20 min",
            "sequence": 1,
            "floor": 0,
            "internalLandmark": "Counter 3"
        }))
        .unwrap();
        assert_eq!(location.lat, 20.4801);
        assert_eq!(location.sequence, Some(1));
        assert_eq!(location.internal_landmark.as_deref(), Some("Counter 3"));
        assert_eq!(location.position(), Coordinate::new(20.4801, 85.8702).unwrap());
    }

    #[test]
    fn optional_fields_may_be_absent() {
        assert!(is_itinerary_location(&json!({
            "name": "Canteen",
            "description": "Lunch",
            "lat": 20.48,
            "lng": 85.87
        })));
    }

    #[test]
    fn wrongly_typed_optionals_are_refused() {
        let base = |extra: Value| {
            let mut v = json!({"name": "Canteen", "description": "Lunch", "lat": 20.48, "lng": 85.87});
            v.as_object_mut()
                .unwrap()
                .extend(extra.as_object().unwrap().clone());
            v
        };
        assert!(!is_itinerary_location(&base(json!({"time": 9}))));
        assert!(!is_itinerary_location(&base(json!({"duration": ["1h"]}))));
        assert!(!is_itinerary_location(&base(json!({"sequence": "second"}))));
    }

    #[test]
    fn location_coordinates_are_bounds_checked() {
        assert!(!is_itinerary_location(&json!({
            "name": "Nowhere", "description": "", "lat": 0, "lng": 0
        })));
        assert!(!is_itinerary_location(&json!({
            "name": "Space", "description": "", "lat": 120, "lng": 85.87
        })));
    }

    #[test]
    fn sort_orders_by_sequence() {
        let mut stops = vec![stop("c", Some(3)), stop("a", Some(1)), stop("b", Some(2))];
        sort_by_sequence(&mut stops);
        let names: Vec<_> = stops.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn sort_is_stable_for_equal_and_missing_keys() {
        let mut stops = vec![
            stop("first", None),
            stop("later", Some(1)),
            stop("second", Some(0)),
            stop("third", None),
        ];
        sort_by_sequence(&mut stops);
        let names: Vec<_> = stops.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third", "later"]);
    }

    #[test]
    fn parses_route_line() {
        let line = ItineraryRoute::from_value(&json!({
            "name": "Gate to OPD",
            "start": {"lat": 20.48, "lng": 85.87},
            "end": {"lat": 20.4805, "lng": 85.8712},
            "transport": "walk",
            "travelTime": "5 min"
        }))
        .unwrap();
        assert_eq!(line.travel_time.as_deref(), Some("5 min"));
        assert_eq!(line.end.lng, 85.8712);
    }

    #[test]
    fn route_line_needs_both_ends_valid() {
        assert!(!is_itinerary_route(&json!({
            "name": "Broken",
            "start": {"lat": 20.48, "lng": 85.87},
            "end": {"lat": 0, "lng": 0}
        })));
        assert!(!is_itinerary_route(&json!({
            "name": "Half",
            "start": {"lat": 20.48, "lng": 85.87}
        })));
    }

    #[test]
    fn route_line_serializes_travel_time_camel_case() {
        let line = ItineraryRoute {
            name: "Walk".to_string(),
            start: Coordinate::new(20.48, 85.87).unwrap(),
            end: Coordinate::new(20.49, 85.88).unwrap(),
            transport: None,
            travel_time: Some("3 min".to_string()),
        };
        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(value["travelTime"], "3 min");
        assert!(value.get("transport").is_none());
    }
}
