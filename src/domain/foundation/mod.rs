//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types that form the
//! vocabulary of the campus navigation domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{PlanningSessionId, ReportId};
pub use timestamp::Timestamp;
