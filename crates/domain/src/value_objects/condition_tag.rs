//! Hazard condition tags

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Severity;

/// Independent hazard categories, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardCategory {
    Temperature,
    Wind,
    Rain,
    Snow,
    Visibility,
}

impl HazardCategory {
    /// All categories in the order the classifier evaluates them
    pub const ALL: [Self; 5] = [
        Self::Temperature,
        Self::Wind,
        Self::Rain,
        Self::Snow,
        Self::Visibility,
    ];
}

/// A triggered hazard condition
///
/// The set is closed; each tag belongs to exactly one [`HazardCategory`]
/// and carries a fixed severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionTag {
    ExtremeCold,
    ExtremeHeat,
    StrongWind,
    ExtremeWind,
    HeavyRain,
    ExtremeRain,
    HeavySnow,
    ExtremeSnow,
    PoorVisibility,
}

impl ConditionTag {
    /// Wire identifier, e.g. `extreme_wind`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExtremeCold => "extreme_cold",
            Self::ExtremeHeat => "extreme_heat",
            Self::StrongWind => "strong_wind",
            Self::ExtremeWind => "extreme_wind",
            Self::HeavyRain => "heavy_rain",
            Self::ExtremeRain => "extreme_rain",
            Self::HeavySnow => "heavy_snow",
            Self::ExtremeSnow => "extreme_snow",
            Self::PoorVisibility => "poor_visibility",
        }
    }

    /// Severity contributed by this tag
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::ExtremeWind | Self::ExtremeRain | Self::ExtremeSnow => Severity::Extreme,
            Self::ExtremeCold
            | Self::ExtremeHeat
            | Self::StrongWind
            | Self::HeavyRain
            | Self::HeavySnow
            | Self::PoorVisibility => Severity::Severe,
        }
    }

    /// Category the tag belongs to
    #[must_use]
    pub const fn category(self) -> HazardCategory {
        match self {
            Self::ExtremeCold | Self::ExtremeHeat => HazardCategory::Temperature,
            Self::StrongWind | Self::ExtremeWind => HazardCategory::Wind,
            Self::HeavyRain | Self::ExtremeRain => HazardCategory::Rain,
            Self::HeavySnow | Self::ExtremeSnow => HazardCategory::Snow,
            Self::PoorVisibility => HazardCategory::Visibility,
        }
    }

    /// Human-readable phrase used in warning descriptions
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::ExtremeCold => "Extremely low temperature",
            Self::ExtremeHeat => "Extremely high temperature",
            Self::StrongWind => "Strong wind",
            Self::ExtremeWind => "Dangerous wind speed",
            Self::HeavyRain => "Heavy rain",
            Self::ExtremeRain => "Extremely heavy rain",
            Self::HeavySnow => "Heavy snow",
            Self::ExtremeSnow => "Extremely heavy snow",
            Self::PoorVisibility => "Poor visibility conditions",
        }
    }
}

impl fmt::Display for ConditionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extreme_tags_are_extreme() {
        for tag in [
            ConditionTag::ExtremeWind,
            ConditionTag::ExtremeRain,
            ConditionTag::ExtremeSnow,
        ] {
            assert_eq!(tag.severity(), Severity::Extreme, "{tag}");
        }
    }

    #[test]
    fn temperature_tags_are_only_severe() {
        assert_eq!(ConditionTag::ExtremeCold.severity(), Severity::Severe);
        assert_eq!(ConditionTag::ExtremeHeat.severity(), Severity::Severe);
    }

    #[test]
    fn serde_name_matches_as_str() {
        let json = serde_json::to_string(&ConditionTag::PoorVisibility).unwrap();
        assert_eq!(json, format!("\"{}\"", ConditionTag::PoorVisibility.as_str()));
    }

    #[test]
    fn categories() {
        assert_eq!(ConditionTag::HeavySnow.category(), HazardCategory::Snow);
        assert_eq!(ConditionTag::StrongWind.category(), HazardCategory::Wind);
        assert_eq!(HazardCategory::ALL[0], HazardCategory::Temperature);
        assert_eq!(HazardCategory::ALL[4], HazardCategory::Visibility);
    }

    #[test]
    fn phrases() {
        assert_eq!(ConditionTag::ExtremeWind.phrase(), "Dangerous wind speed");
        assert_eq!(ConditionTag::PoorVisibility.phrase(), "Poor visibility conditions");
    }
}
