//! Classified forecast timeline

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Warning;
use crate::value_objects::Severity;

/// Label format used for chart series
const SERIES_LABEL_FORMAT: &str = "%d.%m %H:%M";

/// One classified forecast step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Wall-clock time at the location; `None` when the step had no timestamp
    pub timestamp: Option<NaiveDateTime>,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Feels-like temperature in Celsius
    pub feels_like: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Wind direction in degrees
    pub wind_direction: Option<u16>,
    /// One-hour precipitation in mm (rain if reported, otherwise snow)
    pub precipitation: Option<f64>,
    /// Visibility in meters
    pub visibility: Option<u32>,
    /// Hazard assessment for this step
    pub warning: Warning,
}

impl TimelineEntry {
    fn label(&self) -> String {
        self.timestamp
            .map(|t| t.format(SERIES_LABEL_FORMAT).to_string())
            .unwrap_or_default()
    }
}

/// Time-ordered sequence of classified forecast steps
///
/// Order is the order of the forecast the timeline was built from; the
/// timeline never sorts on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Wrap already-ordered entries
    pub fn new(entries: Vec<TimelineEntry>) -> Self {
        Self { entries }
    }

    /// Entries in forecast order
    #[must_use]
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Iterate over entries in forecast order
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEntry> {
        self.entries.iter()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest severity across all entries (`Normal` when empty)
    #[must_use]
    pub fn worst_severity(&self) -> Severity {
        Severity::max_of(self.entries.iter().map(|e| e.warning.severity()))
    }

    /// `(time label, temperature)` pairs for charting
    #[must_use]
    pub fn temperature_series(&self) -> Vec<(String, f64)> {
        self.entries
            .iter()
            .map(|e| (e.label(), e.temperature))
            .collect()
    }

    /// `(time label, wind speed)` pairs for charting
    #[must_use]
    pub fn wind_speed_series(&self) -> Vec<(String, f64)> {
        self.entries
            .iter()
            .map(|e| (e.label(), e.wind_speed))
            .collect()
    }
}

impl FromIterator<TimelineEntry> for Timeline {
    fn from_iter<I: IntoIterator<Item = TimelineEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Timeline {
    type Item = TimelineEntry;
    type IntoIter = std::vec::IntoIter<TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = std::slice::Iter<'a, TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
