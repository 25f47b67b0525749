//! Error body and error-to-status mapping shared by every endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::navigation::Rejection;
use crate::domain::planning::PlanningError;
use crate::domain::reports::ReportError;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details.
    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// API error type that converts to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Planning(#[from] PlanningError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid origin: {0}")]
    InvalidOrigin(Rejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Planning(PlanningError::EmptyPrompt) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("EMPTY_PROMPT", self.to_string()),
            ),
            ApiError::Planning(PlanningError::PromptTooLong { max, actual }) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_details(
                    "PROMPT_TOO_LONG",
                    self.to_string(),
                    json!({ "max": max, "actual": actual }),
                ),
            ),
            ApiError::Report(ReportError::Validation(_)) | ApiError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("VALIDATION_FAILED", self.to_string()),
            ),
            ApiError::Report(ReportError::NotFound(id)) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::with_details(
                    "REPORT_NOT_FOUND",
                    self.to_string(),
                    json!({ "id": id.as_str() }),
                ),
            ),
            ApiError::Report(ReportError::Store(reason)) => {
                tracing::error!(reason = %reason, "report store failure");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new("REPORTS_UNAVAILABLE", "Traffic reports are unavailable"),
                )
            }
            ApiError::InvalidOrigin(rejection) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_details(
                    "INVALID_ORIGIN",
                    self.to_string(),
                    json!({ "field": rejection.field }),
                ),
            ),
        };

        (status, Json(body)).into_response()
    }
}
