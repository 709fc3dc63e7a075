//! Application configuration
//!
//! Layered in this order, later sources winning:
//! 1. built-in defaults
//! 2. `weatherguard.toml` in the working directory, or an explicit file
//! 3. environment variables prefixed `WEATHERGUARD`, with `__` between
//!    nested keys (e.g. `WEATHERGUARD__OPENWEATHER__API_KEY`)

use std::path::Path;

use domain::{InvalidThresholds, ThresholdSet};
use integration_openweather::OpenWeatherConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::telemetry::LoggingConfig;

/// Default config file name, without extension
const DEFAULT_CONFIG_NAME: &str = "weatherguard";

/// Prefix for environment overrides
const ENV_PREFIX: &str = "WEATHERGUARD";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The threshold section is inconsistent
    #[error(transparent)]
    Thresholds(#[from] InvalidThresholds),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenWeather API access
    #[serde(default)]
    pub openweather: OpenWeatherConfig,

    /// Hazard cutoffs
    #[serde(default)]
    pub thresholds: ThresholdSet,

    /// Logging output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `weatherguard.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Fails if a source is malformed or the thresholds are inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file
    ///
    /// An explicit path must exist; the default file is optional.
    ///
    /// # Errors
    ///
    /// Fails if a source is missing or malformed, or the thresholds are
    /// inconsistent.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("openweather.timeout_secs", 30)?
            .set_default("openweather.lang", "en")?
            .set_default("logging.json", false)?
            .add_source(file)
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;

        debug!(
            base_url = %config.openweather.base_url,
            has_api_key = config.openweather.api_key.is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns the threshold error when the threshold set is inconsistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_config_uses_documented_values() {
        let config = AppConfig::default();
        assert_eq!(config.thresholds, ThresholdSet::default());
        assert_eq!(config.openweather.timeout_secs, 30);
        assert_eq!(config.openweather.lang, "en");
        assert!(config.openweather.api_key.is_none());
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_from_file() {
        let file = write_config(
            r#"
[openweather]
api_key = "from-file"
lang = "ru"

[thresholds]
temp_max = 35.0
visibility_poor = 500

[logging]
json = true
"#,
        );

        let config = AppConfig::load_from(Some(file.path())).unwrap();

        assert!(config.openweather.api_key.is_some());
        assert_eq!(config.openweather.lang, "ru");
        assert_eq!(config.openweather.timeout_secs, 30);
        assert!((config.thresholds.temp_max - 35.0).abs() < f64::EPSILON);
        assert!((config.thresholds.temp_min - -10.0).abs() < f64::EPSILON);
        assert_eq!(config.thresholds.visibility_poor, 500);
        assert!(config.logging.json);
    }

    #[test]
    fn inconsistent_thresholds_are_rejected() {
        let file = write_config(
            r"
[thresholds]
wind_severe = 20.0
wind_extreme = 15.0
",
        );

        let result = AppConfig::load_from(Some(file.path()));

        assert!(matches!(result, Err(ConfigError::Thresholds(_))));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let result = AppConfig::load_from(Some(&missing));

        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn malformed_value_is_an_error() {
        let file = write_config(
            r#"
[openweather]
timeout_secs = "soon"
"#,
        );

        assert!(matches!(
            AppConfig::load_from(Some(file.path())),
            Err(ConfigError::Load(_))
        ));
    }

    #[test]
    fn debug_does_not_leak_api_key() {
        let file = write_config(
            r#"
[openweather]
api_key = "super-secret-value"
"#,
        );

        let config = AppConfig::load_from(Some(file.path())).unwrap();
        let debug = format!("{config:?}");

        assert!(!debug.contains("super-secret-value"));
    }
}
