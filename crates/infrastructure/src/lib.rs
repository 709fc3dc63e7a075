//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application's weather port on top of OpenWeather, loads
//! configuration and sets up logging.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ConfigError};
pub use telemetry::{LoggingConfig, TelemetryError, init_logging};
