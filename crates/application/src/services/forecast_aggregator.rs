//! Forecast aggregator
//!
//! Turns an ordered run of forecast snapshots into a classified
//! [`Timeline`], one entry per snapshot.

use domain::{ThresholdSet, Timeline, TimelineEntry, WeatherSnapshot};
use tracing::debug;

use super::severity_classifier::classify;

/// Build a timeline from forecast snapshots
///
/// Entries keep the input order and the output always has the input's
/// length. The displayed precipitation is the one-hour rain amount when
/// present, otherwise the one-hour snow amount.
#[must_use]
pub fn build_timeline(snapshots: &[WeatherSnapshot], thresholds: &ThresholdSet) -> Timeline {
    let timeline: Timeline = snapshots
        .iter()
        .map(|snapshot| entry_for(snapshot, thresholds))
        .collect();

    debug!(
        entries = timeline.len(),
        worst = %timeline.worst_severity(),
        "Built forecast timeline"
    );
    timeline
}

/// Build a timeline using the default thresholds
#[must_use]
pub fn build_timeline_with_defaults(snapshots: &[WeatherSnapshot]) -> Timeline {
    build_timeline(snapshots, &ThresholdSet::default())
}

fn entry_for(snapshot: &WeatherSnapshot, thresholds: &ThresholdSet) -> TimelineEntry {
    TimelineEntry {
        timestamp: snapshot.local_time(),
        temperature: snapshot.temperature,
        feels_like: snapshot.feels_like,
        wind_speed: snapshot.wind.speed,
        wind_direction: snapshot.wind.direction,
        precipitation: snapshot.rain_one_hour().or_else(|| snapshot.snow_one_hour()),
        visibility: snapshot.visibility,
        warning: classify(snapshot, thresholds),
    }
}
