//! Route-planning map layers: steps, landmarks and traffic segments.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::coordinate::{is_clean_path, sanitize_path};
use super::fields::{optional_floor, optional_text, require_label, require_object, require_text};
use super::{Coordinate, Rejection};

/// One leg of a walking route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub description: String,
    pub path: Vec<Coordinate>,
}

impl RouteStep {
    /// Parses an untrusted step. Invalid path points are discarded; the
    /// step is refused when no point survives.
    pub fn parse(value: &Value) -> Result<Self, Rejection> {
        let obj = require_object(value, "step")?;
        let description = require_label(obj, "description")?.to_string();
        let path = sanitize_path(obj.get("path"))?;
        Ok(Self { description, path })
    }

    /// Sanitizing constructor.
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::parse(value).ok()
    }
}

/// Type guard: non-blank `description` and a path of only valid coordinates.
pub fn is_route_step(value: &Value) -> bool {
    match value.as_object() {
        Some(obj) => require_label(obj, "description").is_ok() && is_clean_path(obj.get("path")),
        None => false,
    }
}

/// A named point of interest shown on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    pub name: String,
    pub position: Coordinate,
    /// Storey inside a building; 0 is ground level.
    #[serde(default)]
    pub floor: i32,
    /// Indoor wayfinding hint, e.g. "Next to the pharmacy counter".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_landmark: Option<String>,
}

impl Landmark {
    pub fn parse(value: &Value) -> Result<Self, Rejection> {
        let obj = require_object(value, "landmark")?;
        let name = require_label(obj, "name")?.to_string();
        let position = obj
            .get("position")
            .ok_or(Rejection::missing("position"))
            .and_then(Coordinate::parse)?;
        let floor = optional_floor(obj, "floor")?.unwrap_or(0);
        let internal_landmark = optional_text(obj, "internalLandmark")?;
        Ok(Self {
            name,
            position,
            floor,
            internal_landmark,
        })
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        Self::parse(value).ok()
    }

    /// True when the landmark sits above ground inside a building.
    pub fn is_indoor(&self) -> bool {
        self.floor > 0
    }
}

/// Type guard for [`Landmark`].
pub fn is_landmark(value: &Value) -> bool {
    Landmark::parse(value).is_ok()
}

/// Congestion level of a traffic segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    Light,
    Moderate,
    Heavy,
}

impl TrafficLevel {
    /// Exact, case-sensitive match against the wire names.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(TrafficLevel::Light),
            "moderate" => Some(TrafficLevel::Moderate),
            "heavy" => Some(TrafficLevel::Heavy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficLevel::Light => "light",
            TrafficLevel::Moderate => "moderate",
            TrafficLevel::Heavy => "heavy",
        }
    }
}

/// A stretch of road with its congestion level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficSegment {
    pub path: Vec<Coordinate>,
    pub level: TrafficLevel,
    pub description: String,
}

impl TrafficSegment {
    pub fn parse(value: &Value) -> Result<Self, Rejection> {
        let obj = require_object(value, "traffic")?;
        let level = require_text(obj, "level")?;
        let level = TrafficLevel::parse(level).ok_or(Rejection::new("level", "unknown level"))?;
        let description = require_text(obj, "description")?.to_string();
        let path = sanitize_path(obj.get("path"))?;
        Ok(Self {
            path,
            level,
            description,
        })
    }

    pub fn from_value(value: &Value) -> Option<Self> {
        Self::parse(value).ok()
    }
}

/// Type guard: clean path, text description and a known level.
pub fn is_traffic_segment(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    let level_ok = require_text(obj, "level")
        .ok()
        .and_then(TrafficLevel::parse)
        .is_some();
    level_ok && require_text(obj, "description").is_ok() && is_clean_path(obj.get("path"))
}
