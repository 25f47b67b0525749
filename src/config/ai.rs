//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Upper bound for `max_retries`; backoff doubles per retry.
pub const MAX_AI_RETRIES: u32 = 8;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Which provider answers planning requests
    #[serde(default)]
    pub provider: AiProvider,

    /// Gemini API key
    pub gemini_api_key: Option<Secret<String>>,

    /// Gemini model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Override for the Gemini endpoint (tests, proxies)
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on failure
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Gemini,
    /// Canned answers, for local development without an API key
    Mock,
}

impl AiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if a Gemini key is configured
    pub fn has_gemini(&self) -> bool {
        self.gemini_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        match self.provider {
            AiProvider::Gemini if !self.has_gemini() => {
                return Err(ValidationError::MissingRequired("GEMINI_API_KEY"));
            }
            AiProvider::Mock if *environment == Environment::Production => {
                return Err(ValidationError::MockProviderInProduction);
            }
            _ => {}
        }

        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidAiTimeout);
        }

        if self.max_retries > MAX_AI_RETRIES {
            return Err(ValidationError::TooManyAiRetries(MAX_AI_RETRIES));
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            gemini_api_key: None,
            model: default_model(),
            base_url: None,
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_retries() -> u32 {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key() -> AiConfig {
        AiConfig {
            gemini_api_key: Some(Secret::new("AIza-test".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.provider, AiProvider::Gemini);
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.max_retries, 2);
    }

    #[test]
    fn test_gemini_requires_key() {
        let config = AiConfig::default();
        assert!(matches!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("GEMINI_API_KEY"))
        ));

        let blank = AiConfig {
            gemini_api_key: Some(Secret::new("  ".to_string())),
            ..Default::default()
        };
        assert!(!blank.has_gemini());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(with_key().validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_mock_only_outside_production() {
        let config = AiConfig {
            provider: AiProvider::Mock,
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert!(matches!(
            config.validate(&Environment::Production),
            Err(ValidationError::MockProviderInProduction)
        ));
    }

    #[test]
    fn test_timeout_bounds() {
        let config = AiConfig {
            timeout_secs: 0,
            ..with_key()
        };
        assert!(matches!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidAiTimeout)
        ));
    }

    #[test]
    fn test_retry_bound() {
        let config = AiConfig {
            max_retries: 64,
            ..with_key()
        };
        assert!(matches!(
            config.validate(&Environment::Development),
            Err(ValidationError::TooManyAiRetries(MAX_AI_RETRIES))
        ));

        let config = AiConfig {
            max_retries: MAX_AI_RETRIES,
            ..with_key()
        };
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_key_is_redacted_in_debug() {
        let rendered = format!("{:?}", with_key());
        assert!(!rendered.contains("AIza-test"));
    }
}
