//! TrafficReportStore port - persistence for the community report board.

use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

use crate::domain::foundation::ReportId;
use crate::domain::reports::{NewTrafficReport, UserTrafficReport, VerificationVote};

/// Live feed of the newest reports. Each item is a full snapshot.
pub type ReportSnapshotStream = Pin<Box<dyn Stream<Item = Vec<UserTrafficReport>> + Send>>;

/// Store for community traffic reports.
///
/// The store owns identity: it assigns the id and creation timestamp.
/// Records read back must pass `UserTrafficReport` validation; malformed
/// ones are skipped rather than surfaced.
#[async_trait]
pub trait TrafficReportStore: Send + Sync {
    /// Persist a new report and return the stored record.
    async fn create(&self, report: NewTrafficReport) -> Result<UserTrafficReport, ReportStoreError>;

    /// Newest reports first, at most `limit`.
    async fn list_recent(&self, limit: usize) -> Result<Vec<UserTrafficReport>, ReportStoreError>;

    /// Find a single report.
    async fn find(&self, id: &ReportId) -> Result<Option<UserTrafficReport>, ReportStoreError>;

    /// Apply an up or down vote and return the updated record.
    async fn adjust_verification(
        &self,
        id: &ReportId,
        vote: VerificationVote,
    ) -> Result<UserTrafficReport, ReportStoreError>;

    /// Subscribe to snapshots of the newest reports.
    ///
    /// The current snapshot is yielded first, then one per change.
    async fn subscribe(&self) -> Result<ReportSnapshotStream, ReportStoreError>;
}

/// Errors from the report store.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReportStoreError {
    #[error("Report not found: {0}")]
    NotFound(ReportId),

    #[error("Stored report is malformed: {0}")]
    Malformed(String),

    #[error("Failed to serialize report: {0}")]
    SerializationFailed(String),

    #[error("Report store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_the_offending_id() {
        let id = ReportId::new("rep-9").unwrap();
        assert_eq!(
            ReportStoreError::NotFound(id).to_string(),
            "Report not found: rep-9"
        );
    }
}
