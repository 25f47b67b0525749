//! Top-level router: every endpoint plus the tower-http middleware stack.

use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderValue, Method};
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::planning::planning_routes;
use super::reports::report_routes;
use super::state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    provider: String,
    model: String,
}

/// GET /health - Liveness plus the configured model
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let info = state.ai_provider.provider_info();
    Json(HealthResponse {
        status: "ok",
        provider: info.name,
        model: info.model,
    })
}

/// Routes without middleware. Useful for tests.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api", planning_routes())
        .nest("/api/reports", report_routes())
}

/// Build the full application.
///
/// # Routes
/// - `GET /health`
/// - `POST /api/plan/route`, `POST /api/plan/itinerary`, `POST /api/news`
/// - `GET|POST /api/reports`, `GET /api/reports/live`, `GET /api/reports/:id`,
///   `POST /api/reports/:id/verify`
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    api_routes().with_state(state).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(server))
            .layer(CompressionLayer::new())
            .layer(TimeoutLayer::new(Duration::from_secs(
                server.request_timeout_secs,
            ))),
    )
}

/// Any origin when none are configured, otherwise exactly the listed ones.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}
