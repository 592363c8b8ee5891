//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `CAREER_SYNC` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use career_sync::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Matching service at {}", config.service.base_url);
//! ```

mod error;
mod service;

pub use error::{ConfigError, ValidationError};
pub use service::MatchServiceConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Matching service configuration (endpoint, timeout)
    #[serde(default)]
    pub service: MatchServiceConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (for development), then reads
    /// environment variables with the `CAREER_SYNC` prefix:
    ///
    /// - `CAREER_SYNC__SERVICE__BASE_URL=http://localhost:8000`
    /// - `CAREER_SYNC__SERVICE__TIMEOUT_SECS=30`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CAREER_SYNC")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.service.validate()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service: MatchServiceConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
