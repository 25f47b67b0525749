//! VerifyReportHandler - Up/down votes on community reports.

use std::sync::Arc;

use crate::domain::foundation::ReportId;
use crate::domain::reports::{ReportError, UserTrafficReport, VerificationVote};
use crate::ports::TrafficReportStore;

#[derive(Debug, Clone)]
pub struct VerifyReportCommand {
    pub report_id: ReportId,
    pub vote: VerificationVote,
}

pub struct VerifyReportHandler {
    store: Arc<dyn TrafficReportStore>,
}

impl VerifyReportHandler {
    pub fn new(store: Arc<dyn TrafficReportStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: VerifyReportCommand) -> Result<UserTrafficReport, ReportError> {
        let report = self
            .store
            .adjust_verification(&cmd.report_id, cmd.vote)
            .await?;
        Ok(report)
    }
}
