//! Validated point-in-time weather observation
//!
//! A [`WeatherSnapshot`] is only ever built from a payload that passed
//! validation. Optional fields stay `None` when the provider did not send
//! them; a missing reading is never replaced by zero.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinate;

/// Display format for local observation times
const PRETTY_TIME_FORMAT: &str = "%d.%m %H:%M";

/// Wind readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed in m/s
    pub speed: f64,
    /// Direction the wind blows from, in degrees (0-360)
    pub direction: Option<u16>,
    /// Gust speed in m/s
    pub gust: Option<f64>,
}

/// Precipitation volume for a single kind (rain or snow)
///
/// Each window is independently present or absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Precipitation {
    /// Volume over the last hour in mm (provider key `1h`)
    pub one_hour: Option<f64>,
    /// Volume over the last three hours in mm (provider key `3h`)
    pub three_hour: Option<f64>,
}

/// Provider condition descriptor (e.g. "Rain" / "light rain" / "10d")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionDescriptor {
    /// Provider condition code
    pub id: i64,
    /// Short group name ("Rain", "Clouds", ...)
    pub main: String,
    /// Human-readable description, possibly localized by the provider
    pub description: String,
    /// Provider icon identifier
    pub icon: String,
}

/// A single validated weather observation or forecast step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Provider location id
    pub id: Option<i64>,
    /// Location name
    pub name: Option<String>,
    /// ISO country code
    pub country: Option<String>,
    /// Location coordinate
    pub coordinate: Option<Coordinate>,

    /// Temperature in Celsius
    pub temperature: f64,
    /// Feels-like temperature in Celsius
    pub feels_like: f64,
    /// Atmospheric pressure in hPa
    pub pressure: f64,
    /// Relative humidity in percent, as reported
    pub humidity: u8,
    /// Minimum temperature currently observed in the area, in Celsius
    pub temp_min: Option<f64>,
    /// Maximum temperature currently observed in the area, in Celsius
    pub temp_max: Option<f64>,
    /// Pressure at sea level in hPa
    pub sea_level: Option<f64>,
    /// Pressure at ground level in hPa
    pub ground_level: Option<f64>,

    /// Wind readings
    pub wind: Wind,
    /// Rain volume
    pub rain: Option<Precipitation>,
    /// Snow volume
    pub snow: Option<Precipitation>,

    /// Cloud coverage percentage (0-100)
    pub clouds: Option<u8>,
    /// Visibility in meters
    pub visibility: Option<u32>,
    /// Observation time, Unix epoch seconds (UTC)
    pub timestamp: Option<i64>,
    /// Shift from UTC in seconds
    pub timezone_offset: Option<i32>,
    /// Condition descriptors; the first one is the primary condition
    pub conditions: Vec<ConditionDescriptor>,
}

impl WeatherSnapshot {
    /// One-hour rain volume, if reported
    #[must_use]
    pub fn rain_one_hour(&self) -> Option<f64> {
        self.rain.and_then(|r| r.one_hour)
    }

    /// One-hour snow volume, if reported
    #[must_use]
    pub fn snow_one_hour(&self) -> Option<f64> {
        self.snow.and_then(|s| s.one_hour)
    }

    /// The condition used for display
    #[must_use]
    pub fn primary_condition(&self) -> Option<&ConditionDescriptor> {
        self.conditions.first()
    }

    /// Temperature rounded to the nearest whole degree
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rounded_temperature(&self) -> i64 {
        self.temperature.round() as i64
    }

    /// Observation instant in UTC
    #[must_use]
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    /// Wall-clock time at the location (epoch plus timezone offset)
    ///
    /// A missing offset is treated as UTC. Returns `None` when the snapshot
    /// carries no timestamp or the shifted value is out of range.
    #[must_use]
    pub fn local_time(&self) -> Option<NaiveDateTime> {
        let ts = self.timestamp?;
        let shifted = ts.checked_add(i64::from(self.timezone_offset.unwrap_or(0)))?;
        DateTime::from_timestamp(shifted, 0).map(|dt| dt.naive_utc())
    }

    /// Local time formatted as `dd.mm HH:MM`
    #[must_use]
    pub fn pretty_time(&self) -> Option<String> {
        self.local_time()
            .map(|t| t.format(PRETTY_TIME_FORMAT).to_string())
    }

    /// One-line summary of the main readings
    #[must_use]
    pub fn summary(&self) -> String {
        let condition = self
            .primary_condition()
            .map_or("no description", |c| c.description.as_str());
        format!(
            "{} {:.1}°C (feels like {:.1}°C), humidity {}%, wind {:.1} m/s, pressure {:.0} hPa",
            condition,
            self.temperature,
            self.feels_like,
            self.humidity,
            self.wind.speed,
            self.pressure
        )
    }
}
