//! HTTP handlers for planning endpoints.
//!
//! Model outages are not HTTP errors here: the planners answer with an
//! apology and `fallback: true`. Only bad visitor input yields a 4xx.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::{LocalNewsQuery, PlanItineraryCommand, PlanRouteCommand};

use super::dto::{ItineraryResponse, NewsRequest, NewsResponse, PlanRequest, RoutePlanResponse};

/// POST /api/plan/route - Plan a walking route across campus
pub async fn plan_route(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = PlanRouteCommand {
        language: request.language()?,
        origin: request.origin()?,
        prompt: request.prompt,
    };

    let result = state.plan_route_handler().handle(cmd).await?;

    Ok(Json(RoutePlanResponse {
        plan: result.plan,
        fallback: result.fallback,
    }))
}

/// POST /api/plan/itinerary - Plan a multi-stop visit
pub async fn plan_itinerary(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = PlanItineraryCommand {
        language: request.language()?,
        origin: request.origin()?,
        prompt: request.prompt,
    };

    let result = state.plan_itinerary_handler().handle(cmd).await?;

    Ok(Json(ItineraryResponse {
        itinerary: result.itinerary,
        fallback: result.fallback,
    }))
}

/// POST /api/news - Short bulletin about the campus
pub async fn local_news(
    State(state): State<AppState>,
    Json(request): Json<NewsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let query = LocalNewsQuery {
        language: request.language()?,
    };

    let result = state.local_news_handler().handle(query).await;

    Ok(Json(NewsResponse {
        text: result.text,
        fallback: result.fallback,
    }))
}
