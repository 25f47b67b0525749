//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid AI timeout")]
    InvalidAiTimeout,

    #[error("AI max retries must be at most {0}")]
    TooManyAiRetries(u32),

    #[error("Mock AI provider is not allowed in production")]
    MockProviderInProduction,

    #[error("Campus name must not be empty")]
    EmptyCampusName,

    #[error("Invalid campus centre: {0}")]
    InvalidCampusCenter(String),
}
