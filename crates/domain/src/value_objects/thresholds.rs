//! Hazard threshold configuration
//!
//! Numeric cutoffs used to decide hazard category membership. Units are
//! °C for temperature, m/s for wind, mm/h for precipitation and meters for
//! visibility.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned by [`ThresholdSet::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid thresholds: {0}")]
pub struct InvalidThresholds(pub String);

/// Immutable set of hazard cutoffs
///
/// Instances are plain values; share them by reference (or `Arc`) across
/// any number of concurrent classifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    /// Temperatures strictly below this are `extreme_cold`
    #[serde(default = "default_temp_min")]
    pub temp_min: f64,

    /// Temperatures strictly above this are `extreme_heat`
    #[serde(default = "default_temp_max")]
    pub temp_max: f64,

    /// Wind speeds at or above this are `strong_wind`
    #[serde(default = "default_wind_severe")]
    pub wind_severe: f64,

    /// Wind speeds at or above this are `extreme_wind`
    #[serde(default = "default_wind_extreme")]
    pub wind_extreme: f64,

    /// One-hour rain at or above this is `heavy_rain`
    #[serde(default = "default_rain_severe")]
    pub rain_severe: f64,

    /// One-hour rain at or above this is `extreme_rain`
    #[serde(default = "default_rain_extreme")]
    pub rain_extreme: f64,

    /// One-hour snow at or above this is `heavy_snow`
    #[serde(default = "default_snow_severe")]
    pub snow_severe: f64,

    /// One-hour snow at or above this is `extreme_snow`
    #[serde(default = "default_snow_extreme")]
    pub snow_extreme: f64,

    /// Visibility at or below this is `poor_visibility`
    #[serde(default = "default_visibility_poor")]
    pub visibility_poor: u32,
}

const fn default_temp_min() -> f64 {
    -10.0
}

const fn default_temp_max() -> f64 {
    30.0
}

const fn default_wind_severe() -> f64 {
    10.0
}

const fn default_wind_extreme() -> f64 {
    15.0
}

const fn default_rain_severe() -> f64 {
    15.0
}

const fn default_rain_extreme() -> f64 {
    30.0
}

const fn default_snow_severe() -> f64 {
    10.0
}

const fn default_snow_extreme() -> f64 {
    20.0
}

const fn default_visibility_poor() -> u32 {
    800
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            temp_min: default_temp_min(),
            temp_max: default_temp_max(),
            wind_severe: default_wind_severe(),
            wind_extreme: default_wind_extreme(),
            rain_severe: default_rain_severe(),
            rain_extreme: default_rain_extreme(),
            snow_severe: default_snow_severe(),
            snow_extreme: default_snow_extreme(),
            visibility_poor: default_visibility_poor(),
        }
    }
}

impl ThresholdSet {
    /// Check that the set is internally consistent
    ///
    /// The classifier accepts any set; this is meant for configuration
    /// loading, where a swapped pair of cutoffs is almost always a typo.
    ///
    /// # Errors
    ///
    /// Returns `InvalidThresholds` when a value is not finite, when
    /// `temp_min >= temp_max`, or when a severe cutoff exceeds its
    /// extreme counterpart.
    pub fn validate(&self) -> Result<(), InvalidThresholds> {
        let named = [
            ("temp_min", self.temp_min),
            ("temp_max", self.temp_max),
            ("wind_severe", self.wind_severe),
            ("wind_extreme", self.wind_extreme),
            ("rain_severe", self.rain_severe),
            ("rain_extreme", self.rain_extreme),
            ("snow_severe", self.snow_severe),
            ("snow_extreme", self.snow_extreme),
        ];
        if let Some((name, _)) = named.iter().find(|(_, v)| !v.is_finite()) {
            return Err(InvalidThresholds(format!("{name} must be a finite number")));
        }

        if self.temp_min >= self.temp_max {
            return Err(InvalidThresholds(format!(
                "temp_min ({}) must be below temp_max ({})",
                self.temp_min, self.temp_max
            )));
        }

        for (kind, severe, extreme) in [
            ("wind", self.wind_severe, self.wind_extreme),
            ("rain", self.rain_severe, self.rain_extreme),
            ("snow", self.snow_severe, self.snow_extreme),
        ] {
            if severe > extreme {
                return Err(InvalidThresholds(format!(
                    "{kind}_severe ({severe}) must not exceed {kind}_extreme ({extreme})"
                )));
            }
        }

        Ok(())
    }
}
