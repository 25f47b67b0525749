//! Payload sanitization: keeps only the entries that are safe to render.
//!
//! Malformed model output is the common case, so nothing here fails.
//! Each candidate is run through its sanitizing constructor and dropped on
//! refusal; one bad landmark never costs the other nine. Drop counts are
//! tallied in a [`DropReport`] for logging.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::extractor::ResponseExtractor;
use crate::domain::navigation::{
    sort_by_sequence, Itinerary, ItineraryLocation, ItineraryRoute, Landmark, Rejection,
    RoutePlan, RouteStep, TrafficSegment,
};

/// Accepted/dropped counts for one payload field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldTally {
    pub accepted: usize,
    pub dropped: usize,
}

/// What the sanitizer kept and discarded for one response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DropReport {
    /// Whether a structured payload object was present at all.
    pub payload_found: bool,
    pub fields: BTreeMap<&'static str, FieldTally>,
}

impl DropReport {
    /// Tally for a field; zero when the field was never seen.
    pub fn tally(&self, field: &str) -> FieldTally {
        self.fields.get(field).copied().unwrap_or_default()
    }

    pub fn total_dropped(&self) -> usize {
        self.fields.values().map(|t| t.dropped).sum()
    }

    pub fn total_accepted(&self) -> usize {
        self.fields.values().map(|t| t.accepted).sum()
    }
}

/// Route layers in payload shape (`steps`, `landmarks`, `traffic`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteLayers {
    pub steps: Vec<RouteStep>,
    pub landmarks: Vec<Landmark>,
    pub traffic: Vec<TrafficSegment>,
}

impl RouteLayers {
    pub fn into_plan(self, text: impl Into<String>) -> RoutePlan {
        RoutePlan {
            text: text.into(),
            steps: self.steps,
            landmarks: self.landmarks,
            traffic_segments: self.traffic,
        }
    }
}

/// Itinerary layers in payload shape (`locations`, `lines`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItineraryLayers {
    pub locations: Vec<ItineraryLocation>,
    pub lines: Vec<ItineraryRoute>,
}

impl ItineraryLayers {
    pub fn into_itinerary(self, summary: impl Into<String>) -> Itinerary {
        Itinerary {
            locations: self.locations,
            lines: self.lines,
            summary_text: summary.into(),
        }
    }
}

/// Filters one array-valued field through `parse`, dropping refusals.
///
/// A missing or non-array field is an empty collection.
fn sanitize_field<T>(
    payload: Option<&Value>,
    field: &'static str,
    parse: fn(&Value) -> Result<T, Rejection>,
    report: &mut DropReport,
) -> Vec<T> {
    let candidates = payload
        .and_then(|p| p.get(field))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut accepted = Vec::with_capacity(candidates.len());
    for (index, candidate) in candidates.iter().enumerate() {
        match parse(candidate) {
            Ok(record) => accepted.push(record),
            Err(rejection) => {
                tracing::trace!(field, index, %rejection, "dropping invalid entry");
            }
        }
    }

    report.fields.insert(
        field,
        FieldTally {
            accepted: accepted.len(),
            dropped: candidates.len() - accepted.len(),
        },
    );
    accepted
}

fn object_payload(payload: Option<&Value>) -> Option<&Value> {
    payload.filter(|p| p.is_object())
}

/// Sanitizes a parsed route payload.
pub fn sanitize_route_payload(payload: Option<&Value>) -> (RouteLayers, DropReport) {
    let payload = object_payload(payload);
    let mut report = DropReport {
        payload_found: payload.is_some(),
        ..Default::default()
    };

    let layers = RouteLayers {
        steps: sanitize_field(payload, "steps", RouteStep::parse, &mut report),
        landmarks: sanitize_field(payload, "landmarks", Landmark::parse, &mut report),
        traffic: sanitize_field(payload, "traffic", TrafficSegment::parse, &mut report),
    };
    (layers, report)
}

/// Sanitizes a parsed itinerary payload and orders stops by sequence.
pub fn sanitize_itinerary_payload(payload: Option<&Value>) -> (ItineraryLayers, DropReport) {
    let payload = object_payload(payload);
    let mut report = DropReport {
        payload_found: payload.is_some(),
        ..Default::default()
    };

    let mut locations = sanitize_field(payload, "locations", ItineraryLocation::parse, &mut report);
    sort_by_sequence(&mut locations);
    let lines = sanitize_field(payload, "lines", ItineraryRoute::parse, &mut report);

    (ItineraryLayers { locations, lines }, report)
}

/// Raw model text to a render-ready [`RoutePlan`].
pub fn route_plan_from_response(raw: &str) -> (RoutePlan, DropReport) {
    let extracted = ResponseExtractor::new().extract(raw);
    let (layers, report) = sanitize_route_payload(extracted.payload.as_ref());
    (layers.into_plan(extracted.prose), report)
}

/// Raw model text to a render-ready [`Itinerary`].
pub fn itinerary_from_response(raw: &str) -> (Itinerary, DropReport) {
    let extracted = ResponseExtractor::new().extract(raw);
    let (layers, report) = sanitize_itinerary_payload(extracted.payload.as_ref());
    (layers.into_itinerary(extracted.prose), report)
}
