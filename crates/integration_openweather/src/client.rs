//! OpenWeather HTTP client
//!
//! Fetches current conditions, the 5-day / 3-hour forecast and direct
//! geocoding results, and runs the responses through the payload parser.

use async_trait::async_trait;
use domain::{Coordinate, ForecastReport, ValidationError, WeatherSnapshot};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::geocoding::GeocodedPlace;
use crate::parser::{parse_current, parse_forecast_report};

/// OpenWeather client errors
#[derive(Debug, Error)]
pub enum OpenWeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body was not JSON
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Response was JSON but not a valid weather payload
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Provider returned coordinates outside the valid range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// No API key configured
    #[error("OpenWeather API key is not configured")]
    MissingApiKey,

    /// API key rejected by the provider
    #[error("Unauthorized: the OpenWeather API key was rejected")]
    Unauthorized,

    /// Geocoding found no match
    #[error("No location found for: {0}")]
    CityNotFound(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// OpenWeather client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API key (`appid` query parameter)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Weather API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Geocoding API base URL (default: <https://api.openweathermap.org/geo/1.0>)
    #[serde(default = "default_geo_base_url")]
    pub geo_base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Language for provider condition descriptions (default: en)
    #[serde(default = "default_lang")]
    pub lang: String,
}

impl std::fmt::Debug for OpenWeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherConfig")
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("base_url", &self.base_url)
            .field("geo_base_url", &self.geo_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("lang", &self.lang)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_geo_base_url() -> String {
    "https://api.openweathermap.org/geo/1.0".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_lang() -> String {
    "en".to_string()
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            geo_base_url: default_geo_base_url(),
            timeout_secs: default_timeout(),
            lang: default_lang(),
        }
    }
}

/// Weather client trait for fetching validated weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather at a coordinate
    async fn current(&self, coordinate: &Coordinate) -> Result<WeatherSnapshot, OpenWeatherError>;

    /// Get the 3-hourly forecast at a coordinate
    async fn forecast(&self, coordinate: &Coordinate) -> Result<ForecastReport, OpenWeatherError>;

    /// Resolve a city name to its best geocoding match
    async fn locate(&self, city: &str) -> Result<GeocodedPlace, OpenWeatherError>;

    /// Check if the weather service is reachable and accepts the key
    async fn is_healthy(&self) -> bool;
}

/// OpenWeather HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` when no key is configured, or
    /// `ConnectionFailed` if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, OpenWeatherError> {
        if config
            .api_key
            .as_ref()
            .is_none_or(|key| key.expose_secret().trim().is_empty())
        {
            return Err(OpenWeatherError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpenWeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// The configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &OpenWeatherConfig {
        &self.config
    }

    fn api_key(&self) -> Result<&str, OpenWeatherError> {
        self.config
            .api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .ok_or(OpenWeatherError::MissingApiKey)
    }

    fn coordinate_query(&self, coordinate: &Coordinate) -> Vec<(&'static str, String)> {
        vec![
            ("lat", coordinate.latitude().to_string()),
            ("lon", coordinate.longitude().to_string()),
            ("units", "metric".to_string()),
            ("lang", self.config.lang.clone()),
        ]
    }

    /// Map a non-success HTTP status onto a client error
    fn check_status(status: StatusCode) -> Result<(), OpenWeatherError> {
        if status == StatusCode::UNAUTHORIZED {
            return Err(OpenWeatherError::Unauthorized);
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(OpenWeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(OpenWeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(OpenWeatherError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(())
    }

    async fn get_json(
        &self,
        url: &str,
        mut query: Vec<(&'static str, String)>,
    ) -> Result<Value, OpenWeatherError> {
        debug!(url = %url, "Requesting OpenWeather endpoint");
        query.push(("appid", self.api_key()?.to_string()));

        let response = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(|e| OpenWeatherError::RequestFailed(e.without_url().to_string()))?;

        Self::check_status(response.status())?;

        response
            .json()
            .await
            .map_err(|e| OpenWeatherError::ParseError(e.without_url().to_string()))
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self), fields(lat = coordinate.latitude(), lon = coordinate.longitude()))]
    async fn current(&self, coordinate: &Coordinate) -> Result<WeatherSnapshot, OpenWeatherError> {
        let url = format!("{}/weather", self.config.base_url);
        let raw = self.get_json(&url, self.coordinate_query(coordinate)).await?;
        let snapshot = parse_current(&raw)?;

        debug!(
            temperature = snapshot.temperature,
            wind_speed = snapshot.wind.speed,
            "Retrieved current weather"
        );
        Ok(snapshot)
    }

    #[instrument(skip(self), fields(lat = coordinate.latitude(), lon = coordinate.longitude()))]
    async fn forecast(&self, coordinate: &Coordinate) -> Result<ForecastReport, OpenWeatherError> {
        let url = format!("{}/forecast", self.config.base_url);
        let raw = self.get_json(&url, self.coordinate_query(coordinate)).await?;
        let report = parse_forecast_report(&raw)?;

        debug!(entries = report.len(), "Retrieved weather forecast");
        Ok(report)
    }

    #[instrument(skip(self))]
    async fn locate(&self, city: &str) -> Result<GeocodedPlace, OpenWeatherError> {
        let url = format!("{}/direct", self.config.geo_base_url);
        let query = vec![("q", city.to_string()), ("limit", "1".to_string())];
        let raw = self.get_json(&url, query).await?;

        let places: Vec<GeocodedPlace> =
            serde_json::from_value(raw).map_err(|e| OpenWeatherError::ParseError(e.to_string()))?;
        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| OpenWeatherError::CityNotFound(city.to_string()))?;

        place
            .coordinate()
            .map_err(|_| OpenWeatherError::InvalidCoordinates)?;

        debug!(name = %place.name, country = %place.country, "Resolved location");
        Ok(place)
    }

    async fn is_healthy(&self) -> bool {
        // Berlin; any valid coordinate works
        match Coordinate::new(52.52, 13.405) {
            Ok(berlin) => self.current(&berlin).await.is_ok(),
            Err(_) => false,
        }
    }
}
