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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Press duration must be between 1 and 60000 ms")]
    InvalidPressDuration,

    #[error("Advance delay must not exceed 10000 ms")]
    InvalidAdvanceDelay,

    #[error("Sample interval must be positive and shorter than the press duration")]
    InvalidSampleInterval,

    #[error("Catalog file not found: {0}")]
    CatalogFileMissing(String),

    #[error("Share base URL must be an absolute http(s) URL")]
    InvalidShareUrl,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
