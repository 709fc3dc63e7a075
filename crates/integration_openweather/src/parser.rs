//! OpenWeather payload validation
//!
//! Turns loosely-typed provider JSON into validated [`WeatherSnapshot`]s.
//! Payloads are deserialized into the [`crate::models`] types, whose field
//! rules are then checked with `validator`; both kinds of failure come back
//! as one [`ValidationError`] carrying field paths (`main.temp`,
//! `list[3].wind.speed`). Nothing is partially constructed.
//!
//! Presence and type problems stop at the first offending field. Rule
//! failures (coordinates off the globe, an empty condition list) are all
//! reported together.
//!
//! Values are expected in metric units (`units=metric`): Celsius, m/s, mm.

use domain::{
    City, ConditionDescriptor, Coordinate, FieldIssue, ForecastReport, Precipitation,
    ValidationError, WeatherSnapshot, Wind,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::trace;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::models::{CityRecord, Coord, ForecastResponse, OpenWeatherResponse, Volume};

/// Path used for problems with the payload as a whole
const ROOT: &str = "$";

/// Parse a current-weather payload (`/weather` response)
///
/// # Errors
///
/// Returns `ValidationError` when a required field is missing or mistyped,
/// a field rule fails, or the payload carries no fields at all.
pub fn parse_current(raw: &Value) -> Result<WeatherSnapshot, ValidationError> {
    if expect_object(raw)?.is_empty() {
        return Err(ValidationError::single(
            ROOT,
            "payload contains no weather fields",
        ));
    }

    let response: OpenWeatherResponse = decode(raw)?;
    check_rules(&response)?;
    snapshot_from(response, "").map_err(|issue| ValidationError::new(vec![issue]))
}

/// Parse a forecast payload (`/forecast` response) into its steps
///
/// Fails atomically: one invalid entry fails the whole call.
///
/// # Errors
///
/// Returns `ValidationError` when the `list` is absent or any entry (or the
/// city record) is invalid.
pub fn parse_forecast(raw: &Value) -> Result<Vec<WeatherSnapshot>, ValidationError> {
    parse_forecast_report(raw).map(|report| report.snapshots)
}

/// Parse a forecast payload including its `city` record
///
/// Entries without their own `timezone` inherit the city's offset, since the
/// provider reports it once per city.
///
/// # Errors
///
/// Same as [`parse_forecast`].
pub fn parse_forecast_report(raw: &Value) -> Result<ForecastReport, ValidationError> {
    expect_object(raw)?;
    let response: ForecastResponse = decode(raw)?;
    check_rules(&response)?;

    let to_error = |issue| ValidationError::new(vec![issue]);
    let city = response
        .city
        .map(|record| city_from(record, "city"))
        .transpose()
        .map_err(to_error)?;
    let inherited_offset = city.as_ref().map(|city| city.timezone_offset);

    let snapshots = response
        .list
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            snapshot_from(entry, &format!("list[{index}]")).map(|mut snapshot| {
                snapshot.timezone_offset = snapshot.timezone_offset.or(inherited_offset);
                snapshot
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(to_error)?;

    trace!(entries = snapshots.len(), has_city = city.is_some(), "Parsed forecast payload");
    Ok(ForecastReport { city, snapshots })
}

fn join(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        format!("{base}.{key}")
    }
}

/// serde would read a JSON array as a struct in field order
fn expect_object(raw: &Value) -> Result<&serde_json::Map<String, Value>, ValidationError> {
    raw.as_object()
        .ok_or_else(|| ValidationError::single(ROOT, "expected an object"))
}

/// Deserialize a model, reporting the failing field's path
fn decode<'de, T: Deserialize<'de>>(raw: &'de Value) -> Result<T, ValidationError> {
    serde_path_to_error::deserialize(raw).map_err(|err| {
        let path = err.path().to_string();
        ValidationError::new(vec![issue_at(&path, err.inner().to_string())])
    })
}

/// serde reports a missing field against its parent record; the issue is
/// moved onto the field itself.
fn issue_at(path: &str, reason: String) -> FieldIssue {
    let base = if path == "." { "" } else { path };
    let missing = reason
        .strip_prefix("missing field `")
        .and_then(|rest| rest.strip_suffix('`'));

    match missing {
        Some(field) => FieldIssue::missing(join(base, field)),
        None if base.is_empty() => FieldIssue::new(ROOT, reason),
        None => FieldIssue::new(base, reason),
    }
}

fn check_rules(model: &impl Validate) -> Result<(), ValidationError> {
    model.validate().map_err(|errors| {
        let mut issues = Vec::new();
        collect_rule_failures(&errors, "", &mut issues);
        issues.sort_by(|a, b| a.path.cmp(&b.path));
        ValidationError::new(issues)
    })
}

fn collect_rule_failures(errors: &ValidationErrors, base: &str, issues: &mut Vec<FieldIssue>) {
    for (field, kind) in errors.errors() {
        let path = join(base, field);
        match kind {
            ValidationErrorsKind::Field(failures) => {
                issues.extend(failures.iter().map(|failure| {
                    let reason = failure
                        .message
                        .as_ref()
                        .map_or_else(|| failure.code.to_string(), ToString::to_string);
                    FieldIssue::new(path.clone(), reason)
                }));
            },
            ValidationErrorsKind::Struct(inner) => collect_rule_failures(inner, &path, issues),
            ValidationErrorsKind::List(entries) => {
                for (index, inner) in entries {
                    collect_rule_failures(inner, &format!("{path}[{index}]"), issues);
                }
            },
        }
    }
}

fn precipitation_from(volume: Volume) -> Precipitation {
    Precipitation {
        one_hour: volume.one_hour,
        three_hour: volume.three_hour,
    }
}

fn coordinate_at(coord: Coord, path: String) -> Result<Coordinate, FieldIssue> {
    coord
        .to_coordinate()
        .map_err(|e| FieldIssue::new(path, e.to_string()))
}

fn snapshot_from(response: OpenWeatherResponse, base: &str) -> Result<WeatherSnapshot, FieldIssue> {
    let coordinate = response
        .coord
        .map(|coord| coordinate_at(coord, join(base, "coord")))
        .transpose()?;
    let country = response
        .sys
        .and_then(|sys| sys.country)
        .or(response.country);
    let conditions = response
        .weather
        .unwrap_or_default()
        .into_iter()
        .map(|weather| ConditionDescriptor {
            id: weather.id,
            main: weather.main,
            description: weather.description,
            icon: weather.icon,
        })
        .collect();

    let main = response.main;
    Ok(WeatherSnapshot {
        id: response.id,
        name: response.name,
        country,
        coordinate,
        temperature: main.temp,
        feels_like: main.feels_like,
        pressure: main.pressure,
        humidity: main.humidity,
        temp_min: main.temp_min,
        temp_max: main.temp_max,
        sea_level: main.sea_level,
        ground_level: main.grnd_level,
        wind: Wind {
            speed: response.wind.speed,
            direction: response.wind.deg,
            gust: response.wind.gust,
        },
        rain: response.rain.map(precipitation_from),
        snow: response.snow.map(precipitation_from),
        clouds: response.clouds.map(|clouds| clouds.all),
        visibility: response.visibility,
        timestamp: response.dt,
        timezone_offset: response.timezone,
        conditions,
    })
}

fn city_from(record: CityRecord, base: &str) -> Result<City, FieldIssue> {
    Ok(City {
        id: record.id,
        name: record.name,
        coordinate: coordinate_at(record.coord, join(base, "coord"))?,
        country: record.country,
        population: record.population,
        timezone_offset: record.timezone,
        sunrise: record.sunrise,
        sunset: record.sunset,
    })
}
