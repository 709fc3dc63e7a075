//! OpenWeather response models
//!
//! Types for the `/weather` and `/forecast` response bodies, named after the
//! provider's fields. Conversion into domain types lives in
//! [`crate::parser`].

use domain::{Coordinate, InvalidCoordinates};
use serde::Deserialize;
use validator::Validate;

/// Geographic position (`coord`)
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct Coord {
    /// Latitude in degrees
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be within -90..=90"))]
    pub lat: f64,
    /// Longitude in degrees
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be within -180..=180"
    ))]
    pub lon: f64,
}

impl Coord {
    /// Convert into the domain coordinate
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` for a point off the globe.
    pub fn to_coordinate(self) -> Result<Coordinate, InvalidCoordinates> {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Condition descriptor (`weather[]`)
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct Weather {
    /// Condition code
    pub id: i64,
    /// Condition group ("Rain", "Snow", ...)
    pub main: String,
    /// Condition text, in the requested language
    pub description: String,
    /// Icon id
    pub icon: String,
}

/// Main readings (`main`)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Main {
    /// Temperature in Celsius
    pub temp: f64,
    /// Perceived temperature in Celsius
    pub feels_like: f64,
    /// Pressure in hPa
    pub pressure: f64,
    /// Relative humidity in percent
    pub humidity: u8,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub sea_level: Option<f64>,
    pub grnd_level: Option<f64>,
}

/// Wind readings (`wind`)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Wind {
    /// Speed in m/s
    pub speed: f64,
    /// Direction in degrees
    pub deg: Option<u16>,
    /// Gust speed in m/s
    pub gust: Option<f64>,
}

/// Cloud coverage (`clouds`)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Clouds {
    /// Coverage in percent
    pub all: u8,
}

/// Rain or snow volume (`rain` / `snow`)
///
/// The provider keys each accumulation window by its length; these renames
/// are the only place the `1h`/`3h` names appear.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Volume {
    /// Volume over the last hour in mm
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
    /// Volume over the last three hours in mm
    #[serde(rename = "3h")]
    pub three_hour: Option<f64>,
}

/// System block (`sys`)
#[derive(Debug, Clone, Deserialize)]
pub struct Sys {
    pub country: Option<String>,
}

/// Current-weather body, also the shape of one forecast step
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OpenWeatherResponse {
    #[validate(nested)]
    pub coord: Option<Coord>,
    #[validate(length(min = 1, message = "condition list must not be empty when present"))]
    pub weather: Option<Vec<Weather>>,
    pub main: Main,
    pub wind: Wind,
    pub rain: Option<Volume>,
    pub snow: Option<Volume>,
    pub clouds: Option<Clouds>,
    /// Visibility in meters
    pub visibility: Option<u32>,
    /// Observation time, Unix epoch seconds
    pub dt: Option<i64>,
    /// Shift from UTC in seconds
    pub timezone: Option<i32>,
    pub id: Option<i64>,
    pub name: Option<String>,
    pub sys: Option<Sys>,
    /// Country code, when sent outside `sys`
    pub country: Option<String>,
}

/// City block of a forecast (`city`)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CityRecord {
    pub id: i64,
    pub name: String,
    #[validate(nested)]
    pub coord: Coord,
    pub country: String,
    /// Population, 0 when unknown
    pub population: u64,
    /// Shift from UTC in seconds
    pub timezone: i32,
    pub sunrise: i64,
    pub sunset: i64,
}

/// Forecast body
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ForecastResponse {
    /// Forecast steps in provider order
    #[validate(nested)]
    pub list: Vec<OpenWeatherResponse>,
    #[validate(nested)]
    pub city: Option<CityRecord>,
}
