//! The campus a planning session is about.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::navigation::Coordinate;

/// Name and reference point of the campus.
///
/// The centre is where the model is told the campus sits, and the default
/// origin when a visitor does not share a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusContext {
    name: String,
    center: Coordinate,
}

impl CampusContext {
    pub fn new(name: impl Into<String>, center: Coordinate) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("campus_name"));
        }
        Ok(Self { name, center })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    /// The visitor's location if known, otherwise the campus centre.
    pub fn origin_or_center(&self, origin: Option<Coordinate>) -> Coordinate {
        origin.unwrap_or(self.center)
    }
}
