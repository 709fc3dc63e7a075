//! Application services - Use case implementations

mod forecast_aggregator;
mod severity_classifier;
mod weather_report_service;

pub use forecast_aggregator::{build_timeline, build_timeline_with_defaults};
pub use severity_classifier::{classify, classify_with_defaults};
pub use weather_report_service::{LocationReport, RouteReport, WeatherReportService};
