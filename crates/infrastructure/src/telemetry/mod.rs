//! Logging initialization
//!
//! Installs the global `tracing` subscriber: an `EnvFilter` (honouring
//! `RUST_LOG`) and a `fmt` layer, optionally emitting JSON lines.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,

    /// Filter used when `RUST_LOG` is unset (e.g. "info", "application=debug")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: false,
            log_filter: default_log_filter(),
        }
    }
}

/// Errors from logging initialization
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Subscriber could not be installed (usually: already installed)
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `config.log_filter` when it is set.
///
/// # Errors
///
/// Returns `TelemetryError::Init` if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };
    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(json = config.json, filter = %config.log_filter, "Logging initialized");
    Ok(())
}
