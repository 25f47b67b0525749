//! In-memory traffic report store.
//!
//! Records are kept as JSON documents, the way a document database would
//! hand them back, and are validated on every read.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::domain::foundation::{ReportId, Timestamp};
use crate::domain::reports::{NewTrafficReport, UserTrafficReport, VerificationVote};
use crate::ports::{ReportSnapshotStream, ReportStoreError, TrafficReportStore};

/// Number of reports in each subscription snapshot.
pub const DEFAULT_SNAPSHOT_SIZE: usize = 50;

const CHANNEL_CAPACITY: usize = 64;

/// Report store backed by process memory.
#[derive(Debug, Clone)]
pub struct InMemoryTrafficReportStore {
    /// Stored documents in insertion order.
    documents: Arc<RwLock<Vec<Value>>>,
    updates: broadcast::Sender<Vec<UserTrafficReport>>,
    snapshot_size: usize,
}

impl InMemoryTrafficReportStore {
    pub fn new() -> Self {
        Self::with_snapshot_size(DEFAULT_SNAPSHOT_SIZE)
    }

    pub fn with_snapshot_size(snapshot_size: usize) -> Self {
        let (updates, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            documents: Arc::new(RwLock::new(Vec::new())),
            updates,
            snapshot_size: snapshot_size.max(1),
        }
    }

    /// Inserts a raw document, bypassing validation. Useful for seeding
    /// and for tests of the read path.
    pub async fn insert_raw(&self, document: Value) {
        self.documents.write().await.push(document);
        self.publish().await;
    }

    /// Number of stored documents, valid or not.
    pub async fn document_count(&self) -> usize {
        self.documents.read().await.len()
    }

    async fn snapshot(&self, limit: usize) -> Vec<UserTrafficReport> {
        newest_first(&self.documents.read().await, limit)
    }

    async fn publish(&self) {
        let snapshot = self.snapshot(self.snapshot_size).await;
        // No subscribers is fine.
        let _ = self.updates.send(snapshot);
    }
}

impl Default for InMemoryTrafficReportStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates documents and orders them newest first.
fn newest_first(documents: &[Value], limit: usize) -> Vec<UserTrafficReport> {
    let mut reports: Vec<UserTrafficReport> = documents
        .iter()
        .filter_map(|doc| match UserTrafficReport::parse(doc) {
            Ok(report) => Some(report),
            Err(rejection) => {
                tracing::warn!(%rejection, "Skipping malformed traffic report");
                None
            }
        })
        .collect();
    // Reversed first so equal timestamps list the latest insert first.
    reports.reverse();
    reports.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    reports.truncate(limit);
    reports
}

fn document_id(document: &Value) -> Option<&str> {
    document.get("id").and_then(Value::as_str)
}

#[async_trait]
impl TrafficReportStore for InMemoryTrafficReportStore {
    async fn create(&self, report: NewTrafficReport) -> Result<UserTrafficReport, ReportStoreError> {
        let stored = report.into_report(ReportId::generate(), Timestamp::now());
        let document = serde_json::to_value(&stored)
            .map_err(|e| ReportStoreError::SerializationFailed(e.to_string()))?;

        self.documents.write().await.push(document);
        tracing::info!(
            report_id = %stored.id,
            severity = stored.severity.as_str(),
            "Traffic report stored"
        );
        self.publish().await;
        Ok(stored)
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<UserTrafficReport>, ReportStoreError> {
        Ok(self.snapshot(limit).await)
    }

    async fn find(&self, id: &ReportId) -> Result<Option<UserTrafficReport>, ReportStoreError> {
        let documents = self.documents.read().await;
        match documents.iter().find(|doc| document_id(doc) == Some(id.as_str())) {
            None => Ok(None),
            Some(doc) => UserTrafficReport::parse(doc)
                .map(Some)
                .map_err(|rejection| ReportStoreError::Malformed(rejection.to_string())),
        }
    }

    async fn adjust_verification(
        &self,
        id: &ReportId,
        vote: VerificationVote,
    ) -> Result<UserTrafficReport, ReportStoreError> {
        let updated = {
            let mut documents = self.documents.write().await;
            let doc = documents
                .iter_mut()
                .find(|doc| document_id(doc) == Some(id.as_str()))
                .ok_or_else(|| ReportStoreError::NotFound(id.clone()))?;

            let mut report = UserTrafficReport::parse(doc)
                .map_err(|rejection| ReportStoreError::Malformed(rejection.to_string()))?;
            report.apply_vote(vote);
            *doc = serde_json::to_value(&report)
                .map_err(|e| ReportStoreError::SerializationFailed(e.to_string()))?;
            report
        };

        tracing::debug!(
            report_id = %id,
            verification_count = updated.verification_count,
            "Traffic report vote applied"
        );
        self.publish().await;
        Ok(updated)
    }

    async fn subscribe(&self) -> Result<ReportSnapshotStream, ReportStoreError> {
        // Subscribe before taking the snapshot so no change slips between.
        let receiver = self.updates.subscribe();
        let initial = self.snapshot(self.snapshot_size).await;

        let updates = stream::unfold(receiver, |mut receiver| async move {
            loop {
                match receiver.recv().await {
                    Ok(snapshot) => return Some((snapshot, receiver)),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::debug!(skipped, "Report subscriber lagged, skipping to latest");
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        });

        Ok(stream::once(async move { initial }).chain(updates).boxed())
    }
}
