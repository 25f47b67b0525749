//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CAMPUS_NAV` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use campus_navigator::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod campus;
mod error;
mod server;

pub use ai::{AiConfig, AiProvider};
pub use campus::CampusConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults except the Gemini key, which `validate`
/// requires unless the mock provider is selected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (Gemini or mock)
    #[serde(default)]
    pub ai: AiConfig,

    /// Campus name and centre
    #[serde(default)]
    pub campus: CampusConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `CAMPUS_NAV__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CAMPUS_NAV__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    /// - `CAMPUS_NAV__CAMPUS__CENTER_LAT=20.48` -> `campus.center_lat = 20.48`
    ///
    /// A `.env` file is read first when present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CAMPUS_NAV")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate(&self.server.environment)?;
        self.campus.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
