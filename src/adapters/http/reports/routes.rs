//! Axum router configuration for the traffic report board.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{get_report, list_reports, submit_report, verify_report};
use super::live::live_reports;

/// Report routes, mounted under `/api/reports`.
///
/// # Routes
/// - `GET /` - Newest reports (`?limit=`, default 20, max 100)
/// - `POST /` - Submit a free-text report
/// - `GET /live` - WebSocket snapshot feed
/// - `GET /:id` - A single report
/// - `POST /:id/verify` - Up or down vote
pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reports).post(submit_report))
        .route("/live", get(live_reports))
        .route("/:id", get(get_report))
        .route("/:id/verify", post(verify_report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::adapters::reports::InMemoryTrafficReportStore;
    use crate::domain::navigation::Coordinate;
    use crate::domain::planning::CampusContext;
    use crate::domain::reports::{NewTrafficReport, ReportSeverity, UNSPECIFIED_LOCATION};
    use crate::ports::TrafficReportStore;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app(provider: MockAIProvider, store: Arc<InMemoryTrafficReportStore>) -> Router {
        let campus =
            CampusContext::new("Test Hospital", Coordinate::new(20.48, 85.87).unwrap()).unwrap();
        let state = AppState::new(Arc::new(provider), store, campus);
        Router::new()
            .nest("/api/reports", report_routes())
            .with_state(state)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn seeded_store() -> (Arc<InMemoryTrafficReportStore>, String) {
        let store = Arc::new(InMemoryTrafficReportStore::new());
        let report = store
            .create(NewTrafficReport::new(ReportSeverity::Heavy, "Gate 2", "Queue of cars").unwrap())
            .await
            .unwrap();
        (store, report.id.to_string())
    }

    #[tokio::test]
    async fn submit_classifies_and_returns_created() {
        let provider = MockAIProvider::new().with_fenced_json(
            "",
            &json!({"severity": "Accident", "location": "Emergency ramp", "description": "Two cars collided"}),
        );
        let store = Arc::new(InMemoryTrafficReportStore::new());
        let app = test_app(provider, store.clone());

        let response = app
            .oneshot(post_json(
                "/api/reports",
                json!({"text": "crash near the emergency ramp", "reporterName": "Ravi"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["severity"], "accident");
        assert_eq!(body["location"], "Emergency ramp");
        assert_eq!(body["reporterName"], "Ravi");
        assert_eq!(body["verificationCount"], 0);
        assert_eq!(body["classificationFallback"], false);
        assert_eq!(store.document_count().await, 1);
    }

    #[tokio::test]
    async fn submit_falls_back_when_model_is_down() {
        let provider = MockAIProvider::new().with_error(MockError::Timeout { timeout_secs: 30 });
        let app = test_app(provider, Arc::new(InMemoryTrafficReportStore::new()));

        let response = app
            .oneshot(post_json("/api/reports", json!({"text": "slow traffic"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["severity"], "moderate");
        assert_eq!(body["location"], UNSPECIFIED_LOCATION);
        assert_eq!(body["description"], "slow traffic");
        assert_eq!(body["classificationFallback"], true);
    }

    #[tokio::test]
    async fn submit_blank_text_is_bad_request() {
        let app = test_app(MockAIProvider::new(), Arc::new(InMemoryTrafficReportStore::new()));

        let response = app
            .oneshot(post_json("/api/reports", json!({"text": "   "})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error_code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn list_returns_items() {
        let (store, id) = seeded_store().await;
        let app = test_app(MockAIProvider::new(), store);

        let response = app.oneshot(get("/api/reports?limit=5")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["items"].as_array().unwrap().len(), 1);
        assert_eq!(body["items"][0]["id"], id.as_str());
    }

    #[tokio::test]
    async fn get_unknown_report_is_not_found() {
        let app = test_app(MockAIProvider::new(), Arc::new(InMemoryTrafficReportStore::new()));

        let response = app.oneshot(get("/api/reports/missing")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error_code"], "REPORT_NOT_FOUND");
    }

    #[tokio::test]
    async fn verify_adjusts_count() {
        let (store, id) = seeded_store().await;
        let app = test_app(MockAIProvider::new(), store);

        let response = app
            .oneshot(post_json(&format!("/api/reports/{id}/verify"), json!({"vote": "down"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["verificationCount"], -1);
    }

    #[tokio::test]
    async fn verify_unknown_report_is_not_found() {
        let app = test_app(MockAIProvider::new(), Arc::new(InMemoryTrafficReportStore::new()));

        let response = app
            .oneshot(post_json("/api/reports/nope/verify", json!({"vote": "up"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
