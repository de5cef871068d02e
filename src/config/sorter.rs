//! Sorting session configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::catalog::CatalogVariant;

const MAX_PRESS_MS: u64 = 60_000;
const MAX_ADVANCE_DELAY_MS: u64 = 10_000;

/// Timing and catalog settings for a session
#[derive(Debug, Clone, Deserialize)]
pub struct SorterConfig {
    /// Hold time that reaches full intensity
    #[serde(default = "default_press_max_duration")]
    pub press_max_duration_ms: u64,

    /// Delay between a vote and the move to the next item
    #[serde(default = "default_advance_delay")]
    pub advance_delay_ms: u64,

    /// Gauge sampling interval while a press is held
    #[serde(default = "default_sample_interval")]
    pub sample_interval_ms: u64,

    /// Built-in catalog to sort
    #[serde(default)]
    pub catalog: CatalogVariant,

    /// YAML catalog file; takes precedence over `catalog`
    pub catalog_path: Option<PathBuf>,

    /// Fixed shuffle seed for reproducible decks
    pub shuffle_seed: Option<u64>,
}

impl SorterConfig {
    pub fn press_max_duration(&self) -> Duration {
        Duration::from_millis(self.press_max_duration_ms)
    }

    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    /// Validate timing bounds and the catalog file
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.press_max_duration_ms == 0 || self.press_max_duration_ms > MAX_PRESS_MS {
            return Err(ValidationError::InvalidPressDuration);
        }
        if self.advance_delay_ms > MAX_ADVANCE_DELAY_MS {
            return Err(ValidationError::InvalidAdvanceDelay);
        }
        if self.sample_interval_ms == 0 || self.sample_interval_ms >= self.press_max_duration_ms {
            return Err(ValidationError::InvalidSampleInterval);
        }
        if let Some(path) = &self.catalog_path {
            if !path.is_file() {
                return Err(ValidationError::CatalogFileMissing(
                    path.display().to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            press_max_duration_ms: default_press_max_duration(),
            advance_delay_ms: default_advance_delay(),
            sample_interval_ms: default_sample_interval(),
            catalog: CatalogVariant::default(),
            catalog_path: None,
            shuffle_seed: None,
        }
    }
}

fn default_press_max_duration() -> u64 {
    1000
}

fn default_advance_delay() -> u64 {
    400
}

fn default_sample_interval() -> u64 {
    16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorter_config_defaults() {
        let config = SorterConfig::default();
        assert_eq!(config.press_max_duration(), Duration::from_millis(1000));
        assert_eq!(config.advance_delay(), Duration::from_millis(400));
        assert_eq!(config.sample_interval(), Duration::from_millis(16));
        assert_eq!(config.catalog, CatalogVariant::Full);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_press_duration_bounds() {
        let config = SorterConfig {
            press_max_duration_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPressDuration));

        let config = SorterConfig {
            press_max_duration_ms: 90_000,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidPressDuration));
    }

    #[test]
    fn test_validation_zero_advance_delay_is_allowed() {
        let config = SorterConfig {
            advance_delay_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_advance_delay_too_long() {
        let config = SorterConfig {
            advance_delay_ms: 20_000,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidAdvanceDelay));
    }

    #[test]
    fn test_validation_sample_interval() {
        let config = SorterConfig {
            sample_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSampleInterval));

        let config = SorterConfig {
            sample_interval_ms: 1000,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSampleInterval));
    }

    #[test]
    fn test_validation_missing_catalog_file() {
        let config = SorterConfig {
            catalog_path: Some(PathBuf::from("/definitely/not/here.yaml")),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::CatalogFileMissing(_))
        ));
    }

    #[test]
    fn test_validation_existing_catalog_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = SorterConfig {
            catalog_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
