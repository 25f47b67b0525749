//! Turning untrusted model answers into render-ready map data.
//!
//! - `extractor` - splits raw text into prose and a fenced JSON payload
//! - `sanitizer` - filters payload arrays down to valid records

mod extractor;
mod sanitizer;

pub use extractor::{extract_response, ExtractedResponse, ResponseExtractor};
pub use sanitizer::{
    itinerary_from_response, route_plan_from_response, sanitize_itinerary_payload,
    sanitize_route_payload, DropReport, FieldTally, ItineraryLayers, RouteLayers,
};
