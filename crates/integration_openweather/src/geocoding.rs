//! Geocoding response model
//!
//! Types for the OpenWeather direct geocoding endpoint (`/geo/1.0/direct`).

use std::collections::HashMap;

use domain::{Coordinate, InvalidCoordinates};
use serde::{Deserialize, Serialize};

/// One match returned by the geocoding endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedPlace {
    /// Place name
    pub name: String,
    /// Localized names keyed by language code
    #[serde(default)]
    pub local_names: Option<HashMap<String, String>>,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
    /// ISO country code
    pub country: String,
    /// State or region, when known
    #[serde(default)]
    pub state: Option<String>,
}

impl GeocodedPlace {
    /// Coordinate of the place
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if the provider sent an out-of-range point.
    pub fn coordinate(&self) -> Result<Coordinate, InvalidCoordinates> {
        Coordinate::new(self.lat, self.lon)
    }

    /// Name in the requested language, falling back to the default name
    #[must_use]
    pub fn localized_name(&self, lang: &str) -> &str {
        self.local_names
            .as_ref()
            .and_then(|names| names.get(lang))
            .map_or(self.name.as_str(), String::as_str)
    }
}
