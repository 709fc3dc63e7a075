//! Plain-text rendering of reports for the terminal

use application::{LocationReport, RouteReport};
use domain::{ThresholdSet, Timeline, TimelineEntry, Warning, WeatherSnapshot};

/// Placeholder for readings the provider did not send
const MISSING: &str = "-";

/// Current conditions plus their classification
pub fn current(place: &str, snapshot: &WeatherSnapshot, warning: &Warning) -> String {
    let mut out = format!("📍 {place}\n");
    if let Some(time) = snapshot.pretty_time() {
        out.push_str(&format!("🕒 {time}\n"));
    }
    out.push_str(&format!("🌡️ {}\n", snapshot.summary()));
    out.push_str(&format!("{warning}\n"));
    out
}

/// One line per forecast step, at most `limit` lines
pub fn timeline(timeline: &Timeline, limit: Option<usize>) -> String {
    if timeline.is_empty() {
        return "No forecast data.\n".to_string();
    }

    let shown = limit.unwrap_or(usize::MAX);
    let mut out = String::new();
    for entry in timeline.iter().take(shown) {
        out.push_str(&timeline_line(entry));
        out.push('\n');
    }
    if timeline.len() > shown {
        out.push_str(&format!("... {} more\n", timeline.len() - shown));
    }
    out
}

fn timeline_line(entry: &TimelineEntry) -> String {
    let time = entry
        .timestamp
        .map_or_else(|| MISSING.to_string(), |t| t.format("%d.%m %H:%M").to_string());
    let precipitation = entry
        .precipitation
        .map_or_else(|| MISSING.to_string(), |mm| format!("{mm:.1} mm"));
    let tags = entry
        .warning
        .conditions()
        .iter()
        .map(|tag| tag.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let severity = entry.warning.severity();
    let mut line = format!(
        "{time:<11} {:>6.1}°C  wind {:>5.1} m/s  precip {precipitation:<8} {} {severity}",
        entry.temperature,
        entry.wind_speed,
        severity.emoji(),
    );
    if !tags.is_empty() {
        line.push_str(&format!(" [{tags}]"));
    }
    line
}

/// Full report for one place
pub fn location(report: &LocationReport, limit: Option<usize>) -> String {
    let mut out = current(
        &format!("{} ({})", report.location, report.location.coordinate),
        &report.current,
        &report.warning,
    );
    out.push_str("\n📅 Forecast\n");
    out.push_str(&timeline(&report.timeline, limit));
    out
}

/// Both ends of a route followed by the overall verdict
pub fn route(report: &RouteReport, limit: Option<usize>) -> String {
    let worst = report.worst_severity();
    format!(
        "🚩 From\n{}\n🏁 To\n{}\n{} Overall: {}\n",
        location(&report.start, limit),
        location(&report.end, limit),
        worst.emoji(),
        worst.headline()
    )
}

/// Threshold set as TOML, ready to paste into `weatherguard.toml`
pub fn thresholds(thresholds: &ThresholdSet) -> Result<String, toml::ser::Error> {
    #[derive(serde::Serialize)]
    struct Section<'a> {
        thresholds: &'a ThresholdSet,
    }

    toml::to_string_pretty(&Section { thresholds })
}
