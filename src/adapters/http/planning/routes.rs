//! Axum router configuration for planning endpoints.

use axum::{routing::post, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{local_news, plan_itinerary, plan_route};

/// Planning routes, mounted under `/api`.
///
/// # Routes
/// - `POST /plan/route` - Route with steps, landmarks and traffic layers
/// - `POST /plan/itinerary` - Ordered stops and connecting lines
/// - `POST /news` - Prose-only campus bulletin
pub fn planning_routes() -> Router<AppState> {
    Router::new()
        .route("/plan/route", post(plan_route))
        .route("/plan/itinerary", post(plan_itinerary))
        .route("/news", post(local_news))
}
