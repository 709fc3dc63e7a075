//! Weather service port
//!
//! Defines the interface for fetching validated weather data.

use async_trait::async_trait;
use domain::{Coordinate, ForecastReport, WeatherSnapshot};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// A resolved place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Place name as returned by the geocoder
    pub name: String,
    /// ISO country code
    pub country: String,
    /// Position of the place
    pub coordinate: Coordinate,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.name, self.country)
    }
}

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Current conditions at a coordinate
    async fn current_weather(
        &self,
        coordinate: &Coordinate,
    ) -> Result<WeatherSnapshot, ApplicationError>;

    /// Forecast steps for a coordinate, in provider order
    async fn forecast(&self, coordinate: &Coordinate) -> Result<ForecastReport, ApplicationError>;

    /// Resolve a free-form city name
    async fn locate(&self, query: &str) -> Result<Location, ApplicationError>;

    /// Check if the weather service is available
    async fn is_available(&self) -> bool;
}
