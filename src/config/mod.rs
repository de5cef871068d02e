//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SKILL_SORTER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use skill_sorter::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Links point at {}", config.share.base_url);
//! ```

mod error;
mod logging;
mod share;
mod sorter;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use share::ShareConfig;
pub use sorter::SorterConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Timing and catalog settings
    #[serde(default)]
    pub sorter: SorterConfig,

    /// Shareable link settings
    #[serde(default)]
    pub share: ShareConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SKILL_SORTER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SKILL_SORTER__SORTER__ADVANCE_DELAY_MS=250` -> `sorter.advance_delay_ms = 250`
    /// - `SKILL_SORTER__SHARE__BASE_URL=...` -> `share.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SKILL_SORTER")
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
    /// Returns the first `ValidationError` found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.sorter.validate()?;
        self.share.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
