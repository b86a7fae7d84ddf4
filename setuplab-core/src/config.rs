//! Serializable model configuration.
//!
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! short_ma = 5
//! long_ma = 20
//! min_samples = 4
//! min_expected_return = 0.0
//! ```

use crate::features::{DEFAULT_LONG_MA, DEFAULT_SHORT_MA};
use crate::model::DEFAULT_MIN_SAMPLES;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Short moving-average window.
    pub short_ma: usize,
    /// Long moving-average window; also the minimum history length.
    pub long_ma: usize,
    /// Observations below which a bucket is blended with the global mean.
    pub min_samples: usize,
    /// Threshold a prediction must strictly exceed to enter.
    pub min_expected_return: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            short_ma: DEFAULT_SHORT_MA,
            long_ma: DEFAULT_LONG_MA,
            min_samples: DEFAULT_MIN_SAMPLES,
            min_expected_return: 0.0,
        }
    }
}

impl ModelConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.short_ma == 0 || self.long_ma == 0 {
            return Err(ConfigError::Invalid(
                "moving average windows must be positive".into(),
            ));
        }
        if self.short_ma > self.long_ma {
            return Err(ConfigError::Invalid(format!(
                "short_ma ({}) must not exceed long_ma ({})",
                self.short_ma, self.long_ma
            )));
        }
        if self.min_samples == 0 {
            return Err(ConfigError::Invalid("min_samples must be at least 1".into()));
        }
        if !self.min_expected_return.is_finite() {
            return Err(ConfigError::Invalid(
                "min_expected_return must be finite".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ModelConfig::default();
        assert_eq!(c.short_ma, 5);
        assert_eq!(c.long_ma, 20);
        assert_eq!(c.min_samples, 4);
        assert_eq!(c.min_expected_return, 0.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c =
            ModelConfig::from_toml_str("min_samples = 2\nmin_expected_return = 0.005\n").unwrap();
        assert_eq!(c.min_samples, 2);
        assert_eq!(c.min_expected_return, 0.005);
        assert_eq!(c.short_ma, 5);
        assert_eq!(c.long_ma, 20);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ModelConfig::from_toml_str("").unwrap(), ModelConfig::default());
    }

    #[test]
    fn unknown_key_rejected() {
        let err = ModelConfig::from_toml_str("cut_points = [0.1]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_windows_rejected() {
        let err = ModelConfig::from_toml_str("short_ma = 30\nlong_ma = 20").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = ModelConfig::from_toml_str("long_ma = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_min_samples_rejected() {
        let err = ModelConfig::from_toml_str("min_samples = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn toml_roundtrip() {
        let c = ModelConfig {
            short_ma: 3,
            long_ma: 12,
            min_samples: 6,
            min_expected_return: 0.001,
        };
        let text = toml::to_string(&c).unwrap();
        assert_eq!(ModelConfig::from_toml_str(&text).unwrap(), c);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ModelConfig::load("/nonexistent/setuplab.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
