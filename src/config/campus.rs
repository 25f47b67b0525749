//! Campus configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::navigation::Coordinate;
use crate::domain::planning::CampusContext;

/// The campus this deployment serves
#[derive(Debug, Clone, Deserialize)]
pub struct CampusConfig {
    #[serde(default = "default_name")]
    pub name: String,

    /// Latitude of the campus centre
    #[serde(default = "default_lat")]
    pub center_lat: f64,

    /// Longitude of the campus centre
    #[serde(default = "default_lng")]
    pub center_lng: f64,
}

impl CampusConfig {
    /// Builds the domain context, applying the coordinate rules.
    pub fn context(&self) -> Result<CampusContext, ValidationError> {
        let center = Coordinate::new(self.center_lat, self.center_lng)
            .map_err(|rejection| ValidationError::InvalidCampusCenter(rejection.to_string()))?;
        CampusContext::new(self.name.clone(), center).map_err(|_| ValidationError::EmptyCampusName)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.context().map(|_| ())
    }
}

impl Default for CampusConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            center_lat: default_lat(),
            center_lng: default_lng(),
        }
    }
}

fn default_name() -> String {
    "Hospital Campus".to_string()
}

fn default_lat() -> f64 {
    20.48
}

fn default_lng() -> f64 {
    85.87
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let context = CampusConfig::default().context().unwrap();
        assert_eq!(context.name(), "Hospital Campus");
        assert_eq!(context.center().lat, 20.48);
    }

    #[test]
    fn test_zero_centre_is_rejected() {
        let config = CampusConfig {
            center_lat: 0.0,
            center_lng: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCampusCenter(_))
        ));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let config = CampusConfig {
            name: " ".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::EmptyCampusName)));
    }
}
