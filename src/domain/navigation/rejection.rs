//! Reason a candidate record was refused by a sanitizing constructor.

use thiserror::Error;

/// A field-level refusal.
///
/// Rejections never escape the sanitizer as errors; they exist so the
/// sanitizer can log why an entry was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct Rejection {
    pub field: &'static str,
    pub reason: &'static str,
}

impl Rejection {
    pub fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }

    pub fn missing(field: &'static str) -> Self {
        Self::new(field, "missing")
    }

    pub fn wrong_type(field: &'static str) -> Self {
        Self::new(field, "wrong type")
    }
}
