//! Report board errors.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Validation | 400 |
//! | NotFound | 404 |
//! | Store | 503 |

use thiserror::Error;

use crate::domain::foundation::{ReportId, ValidationError};
use crate::ports::ReportStoreError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("traffic report not found: {0}")]
    NotFound(ReportId),

    #[error("report store failure: {0}")]
    Store(String),
}

impl From<ReportStoreError> for ReportError {
    fn from(err: ReportStoreError) -> Self {
        match err {
            ReportStoreError::NotFound(id) => ReportError::NotFound(id),
            other => ReportError::Store(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_stays_not_found() {
        let id = ReportId::new("r1").unwrap();
        assert_eq!(
            ReportError::from(ReportStoreError::NotFound(id.clone())),
            ReportError::NotFound(id)
        );
    }

    #[test]
    fn other_store_failures_become_store_errors() {
        let err = ReportError::from(ReportStoreError::Unavailable("down".into()));
        assert_eq!(err, ReportError::Store("Report store unavailable: down".into()));
    }
}
