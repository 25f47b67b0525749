//! Community traffic-report board records.

mod errors;
mod report;

pub use errors::ReportError;
pub use report::{
    NewTrafficReport, ReportClassification, ReportSeverity, UserTrafficReport,
    VerificationVote, MAX_REPORT_TEXT_LENGTH, UNSPECIFIED_LOCATION,
};
