//! Outbound, render-ready results handed to the map layer.

use serde::{Deserialize, Serialize};

use super::{ItineraryLocation, ItineraryRoute, Landmark, RouteStep, TrafficSegment};

/// Sanitized route answer.
///
/// Every collection holds only accepted entries; empty collections are a
/// normal, displayable state (prose-only answer).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    pub text: String,
    pub steps: Vec<RouteStep>,
    pub landmarks: Vec<Landmark>,
    pub traffic_segments: Vec<TrafficSegment>,
}

impl RoutePlan {
    /// A prose-only plan with no map layers.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// True when there is at least one layer to draw.
    pub fn has_map_layers(&self) -> bool {
        !self.steps.is_empty() || !self.landmarks.is_empty() || !self.traffic_segments.is_empty()
    }
}

/// Sanitized itinerary answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub locations: Vec<ItineraryLocation>,
    pub lines: Vec<ItineraryRoute>,
    pub summary_text: String,
}

impl Itinerary {
    pub fn text_only(summary: impl Into<String>) -> Self {
        Self {
            summary_text: summary.into(),
            ..Default::default()
        }
    }

    pub fn has_map_layers(&self) -> bool {
        !self.locations.is_empty() || !self.lines.is_empty()
    }
}
