//! Request/response DTOs for planning endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::error::ApiError;
use crate::domain::navigation::{Coordinate, Itinerary, RoutePlan};
use crate::domain::planning::Language;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Visitor location as sent by the map client.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OriginRequest {
    pub lat: f64,
    pub lng: f64,
}

/// Body of `POST /api/plan/route` and `POST /api/plan/itinerary`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    pub prompt: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub origin: Option<OriginRequest>,
}

impl PlanRequest {
    /// Language code or name; English when omitted.
    pub fn language(&self) -> Result<Language, ApiError> {
        parse_language(self.language.as_deref())
    }

    /// Visitor location, held to the same rule as model coordinates.
    pub fn origin(&self) -> Result<Option<Coordinate>, ApiError> {
        self.origin
            .map(|o| Coordinate::new(o.lat, o.lng).map_err(ApiError::InvalidOrigin))
            .transpose()
    }
}

/// Body of `POST /api/news`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsRequest {
    #[serde(default)]
    pub language: Option<String>,
}

impl NewsRequest {
    pub fn language(&self) -> Result<Language, ApiError> {
        parse_language(self.language.as_deref())
    }
}

fn parse_language(raw: Option<&str>) -> Result<Language, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(code) => Ok(code.parse()?),
        None => Ok(Language::default()),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlanResponse {
    #[serde(flatten)]
    pub plan: RoutePlan,
    pub fallback: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResponse {
    #[serde(flatten)]
    pub itinerary: Itinerary,
    pub fallback: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsResponse {
    pub text: String,
    pub fallback: bool,
}
