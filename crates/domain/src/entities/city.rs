//! Forecast location metadata

use serde::{Deserialize, Serialize};

use super::WeatherSnapshot;
use crate::value_objects::Coordinate;

/// City record attached to a forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Provider city id
    pub id: i64,
    /// City name
    pub name: String,
    /// City coordinate
    pub coordinate: Coordinate,
    /// ISO country code
    pub country: String,
    /// Population (the provider reports 0 when unknown)
    pub population: u64,
    /// Shift from UTC in seconds
    pub timezone_offset: i32,
    /// Sunrise, Unix epoch seconds
    pub sunrise: i64,
    /// Sunset, Unix epoch seconds
    pub sunset: i64,
}

/// Parsed forecast: optional city plus the ordered forecast steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    /// City the forecast belongs to, when the provider sent one
    pub city: Option<City>,
    /// Forecast steps in provider order
    pub snapshots: Vec<WeatherSnapshot>,
}

impl ForecastReport {
    /// Number of forecast steps
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the forecast has no steps
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
