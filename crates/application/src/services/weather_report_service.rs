//! Weather report service
//!
//! Resolves a place, fetches its current conditions and forecast through a
//! [`WeatherPort`], and classifies both.

use std::sync::Arc;

use domain::{Severity, ThresholdSet, Timeline, Warning, WeatherSnapshot};
use serde::Serialize;
use tracing::{debug, instrument};

use super::{forecast_aggregator::build_timeline, severity_classifier::classify};
use crate::{
    error::ApplicationError,
    ports::{Location, WeatherPort},
};

/// Classified weather for one place
#[derive(Debug, Clone, Serialize)]
pub struct LocationReport {
    /// The resolved place
    pub location: Location,
    /// Current conditions
    pub current: WeatherSnapshot,
    /// Classification of the current conditions
    pub warning: Warning,
    /// Classified forecast
    pub timeline: Timeline,
}

impl LocationReport {
    /// Highest severity across the current conditions and the forecast
    #[must_use]
    pub fn worst_severity(&self) -> Severity {
        self.warning.severity().max(self.timeline.worst_severity())
    }
}

/// Reports for both ends of a trip
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    /// Departure
    pub start: LocationReport,
    /// Destination
    pub end: LocationReport,
}

impl RouteReport {
    /// Highest severity seen at either end
    #[must_use]
    pub fn worst_severity(&self) -> Severity {
        self.start.worst_severity().max(self.end.worst_severity())
    }
}

/// Builds classified reports for places and routes
pub struct WeatherReportService {
    weather: Arc<dyn WeatherPort>,
    thresholds: Arc<ThresholdSet>,
}

impl std::fmt::Debug for WeatherReportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherReportService")
            .field("weather", &"<WeatherPort>")
            .field("thresholds", &self.thresholds)
            .finish()
    }
}

impl WeatherReportService {
    /// Create a service using the default thresholds
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self {
            weather,
            thresholds: Arc::new(ThresholdSet::default()),
        }
    }

    /// Use a custom threshold set
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Arc<ThresholdSet>) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Thresholds applied to every report
    #[must_use]
    pub fn thresholds(&self) -> &ThresholdSet {
        &self.thresholds
    }

    /// Report for a single place
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown places, or whatever the port reports
    /// when fetching or validating data fails.
    #[instrument(skip(self))]
    pub async fn location_report(&self, query: &str) -> Result<LocationReport, ApplicationError> {
        let location = self.weather.locate(query).await?;
        debug!(location = %location, coordinate = %location.coordinate, "Resolved location");

        let (current, forecast) = tokio::try_join!(
            self.weather.current_weather(&location.coordinate),
            self.weather.forecast(&location.coordinate),
        )?;

        let warning = classify(&current, &self.thresholds);
        let timeline = build_timeline(&forecast.snapshots, &self.thresholds);

        debug!(
            severity = %warning.severity(),
            forecast_entries = timeline.len(),
            "Location report ready"
        );

        Ok(LocationReport {
            location,
            current,
            warning,
            timeline,
        })
    }

    /// Reports for a departure and a destination
    ///
    /// # Errors
    ///
    /// Fails if either report fails.
    #[instrument(skip(self))]
    pub async fn route_report(
        &self,
        start: &str,
        end: &str,
    ) -> Result<RouteReport, ApplicationError> {
        let (start, end) =
            tokio::try_join!(self.location_report(start), self.location_report(end))?;
        Ok(RouteReport { start, end })
    }

    /// Check if the weather backend is reachable
    pub async fn is_available(&self) -> bool {
        self.weather.is_available().await
    }
}

#[cfg(test)]
mod tests {
    use domain::{ConditionTag, Coordinate, ForecastReport, testing::snapshot};

    use super::*;
    use crate::ports::MockWeatherPort;

    fn location(name: &str) -> Location {
        let coordinate = if name == "Oslo" {
            Coordinate::new(59.9133, 10.7389).unwrap()
        } else {
            Coordinate::new(41.8933, 12.4829).unwrap()
        };
        Location {
            name: name.to_string(),
            country: "XX".to_string(),
            coordinate,
        }
    }

    /// Oslo is freezing, everywhere else is mild; both have a windy forecast step
    fn mock_port() -> MockWeatherPort {
        let mut mock = MockWeatherPort::new();
        mock.expect_locate().returning(|query| {
            if query == "Atlantis" {
                Err(ApplicationError::NotFound(query.to_string()))
            } else {
                Ok(location(query))
            }
        });
        mock.expect_current_weather().returning(|coordinate| {
            let temperature = if coordinate.latitude() > 50.0 { -18.0 } else { 22.0 };
            Ok(snapshot(temperature, 3.0, None, None, Some(10_000)))
        });
        mock.expect_forecast().returning(|_| {
            Ok(ForecastReport {
                city: None,
                snapshots: vec![
                    snapshot(10.0, 2.0, None, None, None),
                    snapshot(11.0, 12.0, None, None, None),
                ],
            })
        });
        mock.expect_is_available().returning(|| true);
        mock
    }

    #[tokio::test]
    async fn location_report_classifies_current_and_forecast() {
        let service = WeatherReportService::new(Arc::new(mock_port()));

        let report = service.location_report("Oslo").await.unwrap();

        assert_eq!(report.location.name, "Oslo");
        assert!(report.warning.has(ConditionTag::ExtremeCold));
        assert_eq!(report.timeline.len(), 2);
        assert!(report.timeline.entries()[1].warning.has(ConditionTag::StrongWind));
        assert_eq!(report.worst_severity(), Severity::Severe);
    }

    #[tokio::test]
    async fn unknown_place_is_not_found() {
        let service = WeatherReportService::new(Arc::new(mock_port()));

        let result = service.location_report("Atlantis").await;

        assert!(matches!(result, Err(ApplicationError::NotFound(ref q)) if q == "Atlantis"));
    }

    #[tokio::test]
    async fn route_report_covers_both_ends() {
        let service = WeatherReportService::new(Arc::new(mock_port()));

        let route = service.route_report("Rome", "Oslo").await.unwrap();

        assert_eq!(route.start.location.name, "Rome");
        assert_eq!(route.end.location.name, "Oslo");
        assert!(!route.start.warning.is_hazardous());
        assert!(route.end.warning.is_hazardous());
        assert_eq!(route.worst_severity(), Severity::Severe);
    }

    #[tokio::test]
    async fn route_report_fails_if_one_end_fails() {
        let service = WeatherReportService::new(Arc::new(mock_port()));

        let result = service.route_report("Rome", "Atlantis").await;

        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[tokio::test]
    async fn custom_thresholds_apply_to_reports() {
        let thresholds = ThresholdSet {
            temp_max: 20.0,
            ..ThresholdSet::default()
        };
        let service =
            WeatherReportService::new(Arc::new(mock_port())).with_thresholds(Arc::new(thresholds));

        let report = service.location_report("Rome").await.unwrap();

        assert!(report.warning.has(ConditionTag::ExtremeHeat));
        assert!((service.thresholds().temp_max - 20.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn port_errors_propagate() {
        let mut mock = MockWeatherPort::new();
        mock.expect_locate().returning(|q| Ok(location(q)));
        mock.expect_current_weather()
            .returning(|_| Err(ApplicationError::RateLimited));
        mock.expect_forecast().returning(|_| {
            Ok(ForecastReport {
                city: None,
                snapshots: Vec::new(),
            })
        });
        let service = WeatherReportService::new(Arc::new(mock));

        let result = service.location_report("Rome").await;

        assert!(matches!(result, Err(ApplicationError::RateLimited)));
    }

    #[tokio::test]
    async fn availability_is_delegated() {
        let service = WeatherReportService::new(Arc::new(mock_port()));
        assert!(service.is_available().await);
    }

    #[test]
    fn debug_hides_port() {
        let service = WeatherReportService::new(Arc::new(MockWeatherPort::new()));
        let debug = format!("{service:?}");
        assert!(debug.contains("<WeatherPort>"));
    }
}
