//! ListReportsHandler - Newest community reports.

use std::sync::Arc;

use crate::domain::reports::{ReportError, UserTrafficReport};
use crate::ports::TrafficReportStore;

pub const DEFAULT_REPORT_LIMIT: usize = 20;
pub const MAX_REPORT_LIMIT: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct ListReportsQuery {
    pub limit: Option<usize>,
}

impl ListReportsQuery {
    /// Requested limit clamped to `1..=MAX_REPORT_LIMIT`.
    pub fn effective_limit(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_REPORT_LIMIT)
            .clamp(1, MAX_REPORT_LIMIT)
    }
}

pub struct ListReportsHandler {
    store: Arc<dyn TrafficReportStore>,
}

impl ListReportsHandler {
    pub fn new(store: Arc<dyn TrafficReportStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListReportsQuery) -> Result<Vec<UserTrafficReport>, ReportError> {
        Ok(self.store.list_recent(query.effective_limit()).await?)
    }
}
