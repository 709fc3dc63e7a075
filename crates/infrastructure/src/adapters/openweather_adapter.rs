//! OpenWeather adapter - Implements WeatherPort using integration_openweather

use application::error::ApplicationError;
use application::ports::{Location, WeatherPort};
use async_trait::async_trait;
use domain::{Coordinate, ForecastReport, WeatherSnapshot};
use integration_openweather::{
    OpenWeatherClient, OpenWeatherConfig, OpenWeatherError, WeatherClient,
};
use tracing::{debug, instrument};

/// Adapter for the OpenWeather API
pub struct OpenWeatherAdapter {
    client: Box<dyn WeatherClient>,
    lang: String,
}

impl std::fmt::Debug for OpenWeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherAdapter")
            .field("client", &"<WeatherClient>")
            .field("lang", &self.lang)
            .finish()
    }
}

impl OpenWeatherAdapter {
    /// Create an adapter backed by the HTTP client
    ///
    /// # Errors
    ///
    /// Returns `Configuration` when no API key is set, or `Internal` if the
    /// HTTP client fails to initialize.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, ApplicationError> {
        let lang = config.lang.clone();
        let client = OpenWeatherClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(client, lang))
    }

    /// Wrap any weather client
    #[must_use]
    pub fn with_client(client: impl WeatherClient + 'static, lang: impl Into<String>) -> Self {
        Self {
            client: Box::new(client),
            lang: lang.into(),
        }
    }

    /// Map integration error to application error
    fn map_error(err: OpenWeatherError) -> ApplicationError {
        match err {
            OpenWeatherError::ConnectionFailed(e)
            | OpenWeatherError::RequestFailed(e)
            | OpenWeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            OpenWeatherError::ParseError(e) => ApplicationError::Internal(e),
            OpenWeatherError::Validation(e) => ApplicationError::Validation(e),
            OpenWeatherError::InvalidCoordinates => ApplicationError::ExternalService(
                "Weather service returned invalid coordinates".into(),
            ),
            OpenWeatherError::MissingApiKey | OpenWeatherError::Unauthorized => {
                ApplicationError::Configuration(err.to_string())
            },
            OpenWeatherError::CityNotFound(city) => ApplicationError::NotFound(city),
            OpenWeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }
}

#[async_trait]
impl WeatherPort for OpenWeatherAdapter {
    #[instrument(skip(self), fields(lat = coordinate.latitude(), lon = coordinate.longitude()))]
    async fn current_weather(
        &self,
        coordinate: &Coordinate,
    ) -> Result<WeatherSnapshot, ApplicationError> {
        let result = self.client.current(coordinate).await.map_err(Self::map_error);

        if let Err(e) = &result {
            debug!(error = %e, "Failed to get current weather");
        }
        result
    }

    #[instrument(skip(self), fields(lat = coordinate.latitude(), lon = coordinate.longitude()))]
    async fn forecast(&self, coordinate: &Coordinate) -> Result<ForecastReport, ApplicationError> {
        let result = self.client.forecast(coordinate).await.map_err(Self::map_error);

        if let Err(e) = &result {
            debug!(error = %e, "Failed to get weather forecast");
        }
        result
    }

    #[instrument(skip(self))]
    async fn locate(&self, query: &str) -> Result<Location, ApplicationError> {
        let place = self.client.locate(query).await.map_err(Self::map_error)?;
        let coordinate = place
            .coordinate()
            .map_err(|_| Self::map_error(OpenWeatherError::InvalidCoordinates))?;

        Ok(Location {
            name: place.localized_name(&self.lang).to_string(),
            country: place.country,
            coordinate,
        })
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
