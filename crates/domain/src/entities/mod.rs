//! Domain entities - Weather observations and their classified forms

mod city;
mod timeline;
mod warning;
mod weather_snapshot;

pub use city::{City, ForecastReport};
pub use timeline::{Timeline, TimelineEntry};
pub use warning::Warning;
pub use weather_snapshot::{ConditionDescriptor, Precipitation, WeatherSnapshot, Wind};
