//! Community traffic report handlers.
//!
//! ## Commands
//! - Submitting a free-text report (classified by the model)
//! - Voting on a report
//!
//! ## Queries
//! - Listing the newest reports

mod list_reports;
mod submit_report;
mod verify_report;

pub use list_reports::{ListReportsHandler, ListReportsQuery, DEFAULT_REPORT_LIMIT, MAX_REPORT_LIMIT};
pub use submit_report::{SubmitReportCommand, SubmitReportHandler, SubmitReportResult};
pub use verify_report::{VerifyReportCommand, VerifyReportHandler};
