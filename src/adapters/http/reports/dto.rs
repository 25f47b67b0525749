//! Request/response DTOs for the community traffic board.

use serde::{Deserialize, Serialize};

use crate::domain::reports::{UserTrafficReport, VerificationVote};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Query string of `GET /api/reports`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListReportsParams {
    pub limit: Option<usize>,
}

/// Body of `POST /api/reports`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportRequest {
    pub text: String,
    #[serde(default)]
    pub reporter_name: Option<String>,
}

/// Body of `POST /api/reports/:id/verify`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VerifyReportRequest {
    pub vote: VerificationVote,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ReportListResponse {
    pub items: Vec<UserTrafficReport>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedReportResponse {
    #[serde(flatten)]
    pub report: UserTrafficReport,
    pub classification_fallback: bool,
}

/// Frames pushed over the live report socket.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveReportsMessage {
    Snapshot { items: Vec<UserTrafficReport> },
    Error { message: String },
}
