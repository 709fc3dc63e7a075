//! Snapshot fixtures shared by the workspace's tests
//!
//! Compiled for this crate's own tests and, through the `test-support`
//! feature, for dev-dependents.

use crate::entities::{Precipitation, WeatherSnapshot, Wind};

/// Snapshot carrying only the readings the classifier looks at
///
/// Rain and snow are one-hour amounts; every other optional field is absent.
#[must_use]
pub fn snapshot(
    temperature: f64,
    wind_speed: f64,
    rain: Option<f64>,
    snow: Option<f64>,
    visibility: Option<u32>,
) -> WeatherSnapshot {
    let precipitation = |amount: Option<f64>| {
        amount.map(|one_hour| Precipitation {
            one_hour: Some(one_hour),
            three_hour: None,
        })
    };

    WeatherSnapshot {
        id: None,
        name: None,
        country: None,
        coordinate: None,
        temperature,
        feels_like: temperature,
        pressure: 1013.0,
        humidity: 50,
        temp_min: None,
        temp_max: None,
        sea_level: None,
        ground_level: None,
        wind: Wind {
            speed: wind_speed,
            direction: None,
            gust: None,
        },
        rain: precipitation(rain),
        snow: precipitation(snow),
        clouds: None,
        visibility,
        timestamp: None,
        timezone_offset: None,
        conditions: Vec::new(),
    }
}

/// A mild 20°C snapshot with a light breeze and nothing else reported
#[must_use]
pub fn calm() -> WeatherSnapshot {
    snapshot(20.0, 5.0, None, None, None)
}
