//! HTTP handlers for community traffic reports.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::{ListReportsQuery, SubmitReportCommand, VerifyReportCommand};
use crate::domain::foundation::ReportId;
use crate::domain::reports::ReportError;

use super::dto::{
    ListReportsParams, ReportListResponse, SubmitReportRequest, SubmittedReportResponse,
    VerifyReportRequest,
};

/// GET /api/reports - Newest reports first
pub async fn list_reports(
    State(state): State<AppState>,
    Query(params): Query<ListReportsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListReportsQuery {
        limit: params.limit,
    };

    let items = state.list_reports_handler().handle(query).await?;

    Ok(Json(ReportListResponse { items }))
}

/// GET /api/reports/:id - A single report
pub async fn get_report(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let report_id = ReportId::new(report_id)?;

    let report = state
        .report_store
        .find(&report_id)
        .await
        .map_err(ReportError::from)?
        .ok_or(ReportError::NotFound(report_id))?;

    Ok(Json(report))
}

/// POST /api/reports - Classify and store a free-text report
pub async fn submit_report(
    State(state): State<AppState>,
    Json(request): Json<SubmitReportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SubmitReportCommand {
        text: request.text,
        reporter_name: request.reporter_name,
    };

    let result = state.submit_report_handler().handle(cmd).await?;

    tracing::info!(
        report_id = %result.report.id,
        severity = result.report.severity.as_str(),
        "Traffic report submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmittedReportResponse {
            report: result.report,
            classification_fallback: result.classification_fallback,
        }),
    ))
}

/// POST /api/reports/:id/verify - Up or down vote a report
pub async fn verify_report(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
    Json(request): Json<VerifyReportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = VerifyReportCommand {
        report_id: ReportId::new(report_id)?,
        vote: request.vote,
    };

    let report = state.verify_report_handler().handle(cmd).await?;

    Ok(Json(report))
}
