//! OpenWeather integration
//!
//! Validates raw OpenWeather payloads into domain snapshots and provides an
//! HTTP client for the current-weather, forecast and geocoding endpoints.

pub mod client;
mod geocoding;
mod models;
pub mod parser;

pub use client::{OpenWeatherClient, OpenWeatherConfig, OpenWeatherError, WeatherClient};
pub use geocoding::GeocodedPlace;
pub use parser::{parse_current, parse_forecast, parse_forecast_report};
