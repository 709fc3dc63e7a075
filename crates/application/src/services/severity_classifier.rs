//! Severity classifier
//!
//! Maps a validated [`WeatherSnapshot`] onto a [`Warning`]. Each hazard
//! category is an independent rule; rules run in a fixed order and the
//! tags they produce are folded into the warning's severity.

use domain::{ConditionTag, ThresholdSet, Warning, WeatherSnapshot};
use tracing::trace;

/// One hazard category check; yields at most one tag
type Rule = fn(&WeatherSnapshot, &ThresholdSet) -> Option<ConditionTag>;

/// Rules in evaluation order: temperature, wind, rain, snow, visibility
const RULES: [Rule; 5] = [temperature, wind, rain, snow, visibility];

/// Classify a snapshot against a threshold set
///
/// Total over every validated snapshot. Categories whose optional reading
/// is absent are skipped.
#[must_use]
pub fn classify(snapshot: &WeatherSnapshot, thresholds: &ThresholdSet) -> Warning {
    let conditions: Vec<ConditionTag> = RULES
        .iter()
        .filter_map(|rule| rule(snapshot, thresholds))
        .collect();

    let warning = Warning::from_conditions(conditions);
    trace!(
        severity = %warning.severity(),
        conditions = ?warning.conditions(),
        "Classified snapshot"
    );
    warning
}

/// Classify a snapshot against the default thresholds
#[must_use]
pub fn classify_with_defaults(snapshot: &WeatherSnapshot) -> Warning {
    classify(snapshot, &ThresholdSet::default())
}

fn temperature(snapshot: &WeatherSnapshot, thresholds: &ThresholdSet) -> Option<ConditionTag> {
    if snapshot.temperature < thresholds.temp_min {
        Some(ConditionTag::ExtremeCold)
    } else if snapshot.temperature > thresholds.temp_max {
        Some(ConditionTag::ExtremeHeat)
    } else {
        None
    }
}

fn wind(snapshot: &WeatherSnapshot, thresholds: &ThresholdSet) -> Option<ConditionTag> {
    graded(
        snapshot.wind.speed,
        thresholds.wind_severe,
        thresholds.wind_extreme,
        ConditionTag::StrongWind,
        ConditionTag::ExtremeWind,
    )
}

fn rain(snapshot: &WeatherSnapshot, thresholds: &ThresholdSet) -> Option<ConditionTag> {
    snapshot.rain_one_hour().and_then(|amount| {
        graded(
            amount,
            thresholds.rain_severe,
            thresholds.rain_extreme,
            ConditionTag::HeavyRain,
            ConditionTag::ExtremeRain,
        )
    })
}

fn snow(snapshot: &WeatherSnapshot, thresholds: &ThresholdSet) -> Option<ConditionTag> {
    snapshot.snow_one_hour().and_then(|amount| {
        graded(
            amount,
            thresholds.snow_severe,
            thresholds.snow_extreme,
            ConditionTag::HeavySnow,
            ConditionTag::ExtremeSnow,
        )
    })
}

fn visibility(snapshot: &WeatherSnapshot, thresholds: &ThresholdSet) -> Option<ConditionTag> {
    snapshot
        .visibility
        .filter(|&meters| meters <= thresholds.visibility_poor)
        .map(|_| ConditionTag::PoorVisibility)
}

/// Two-level check where the extreme cutoff takes priority
fn graded(
    value: f64,
    severe: f64,
    extreme: f64,
    severe_tag: ConditionTag,
    extreme_tag: ConditionTag,
) -> Option<ConditionTag> {
    if value >= extreme {
        Some(extreme_tag)
    } else if value >= severe {
        Some(severe_tag)
    } else {
        None
    }
}
