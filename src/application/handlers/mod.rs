//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod planning;
pub mod reports;
