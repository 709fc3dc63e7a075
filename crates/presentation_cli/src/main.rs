//! WeatherGuard CLI
//!
//! Command-line interface for weather hazard reports.

#![allow(clippy::print_stdout)]

mod render;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use application::{WeatherReportService, build_timeline, classify};
use clap::{Parser, Subcommand};
use domain::ThresholdSet;
use infrastructure::{AppConfig, LoggingConfig, OpenWeatherAdapter, init_logging};
use integration_openweather::{parse_current, parse_forecast_report};
use secrecy::SecretString;
use tracing::debug;

/// WeatherGuard CLI
#[derive(Parser)]
#[command(name = "weatherguard-cli")]
#[command(author, version, about = "Weather hazard warnings from OpenWeather data", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./weatherguard.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// OpenWeather API key, overriding the configuration
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Current conditions and warning for a city
    Current {
        /// City name, e.g. "Moscow" or "Paris,FR"
        city: String,
    },

    /// Classified forecast for a city
    Forecast {
        /// City name
        city: String,

        /// Show at most this many forecast steps
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Compare conditions at the start and end of a trip
    Route {
        /// Departure city
        from: String,

        /// Destination city
        to: String,

        /// Show at most this many forecast steps per city
        #[arg(short, long, default_value = "8")]
        limit: usize,
    },

    /// Classify a saved OpenWeather response without network access
    ///
    /// Example: weatherguard-cli classify ./weather.json
    /// Example: weatherguard-cli classify --forecast ./forecast.json
    Classify {
        /// Path to a `/weather` (or, with --forecast, `/forecast`) JSON body
        file: PathBuf,

        /// Treat the file as a forecast response
        #[arg(long)]
        forecast: bool,
    },

    /// Print the effective hazard thresholds
    Thresholds,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_service(config: &AppConfig) -> anyhow::Result<WeatherReportService> {
    let adapter = OpenWeatherAdapter::new(config.openweather.clone())
        .context("Cannot create the OpenWeather client (is an API key configured?)")?;
    Ok(WeatherReportService::new(Arc::new(adapter))
        .with_thresholds(Arc::new(config.thresholds.clone())))
}

fn classify_file(
    file: &Path,
    forecast: bool,
    thresholds: &ThresholdSet,
    json: bool,
) -> anyhow::Result<String> {
    let body = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let raw: serde_json::Value =
        serde_json::from_str(&body).with_context(|| format!("{} is not JSON", file.display()))?;

    if forecast {
        let report = parse_forecast_report(&raw)?;
        let timeline = build_timeline(&report.snapshots, thresholds);
        debug!(entries = timeline.len(), "Classified forecast file");
        if json {
            return Ok(serde_json::to_string_pretty(&timeline)?);
        }
        return Ok(render::timeline(&timeline, None));
    }

    let snapshot = parse_current(&raw)?;
    let warning = classify(&snapshot, thresholds);
    if json {
        return Ok(serde_json::to_string_pretty(&warning)?);
    }
    let place = snapshot.name.clone().unwrap_or_else(|| file.display().to_string());
    Ok(render::current(&place, &snapshot, &warning))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref())?;
    if let Some(key) = cli.api_key {
        config.openweather.api_key = Some(SecretString::from(key));
    }

    // Explicit verbosity wins over the configured filter
    let log_filter = if cli.verbose > 0 {
        log_filter_from_verbosity(cli.verbose).to_string()
    } else {
        config.logging.log_filter.clone()
    };
    init_logging(&LoggingConfig {
        json: config.logging.json,
        log_filter,
    })?;

    match cli.command {
        Commands::Current { city } => {
            let service = build_service(&config)?;
            let report = service.location_report(&city).await?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "location": report.location,
                        "current": report.current,
                        "warning": report.warning,
                    }))?
                );
            } else {
                println!(
                    "{}",
                    render::current(&report.location.to_string(), &report.current, &report.warning)
                );
            }
        },

        Commands::Forecast { city, limit } => {
            let service = build_service(&config)?;
            let report = service.location_report(&city).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", render::location(&report, limit));
            }
        },

        Commands::Route { from, to, limit } => {
            let service = build_service(&config)?;
            let report = service.route_report(&from, &to).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", render::route(&report, Some(limit)));
            }
        },

        Commands::Classify { file, forecast } => {
            println!(
                "{}",
                classify_file(&file, forecast, &config.thresholds, cli.json)?
            );
        },

        Commands::Thresholds => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&config.thresholds)?);
            } else {
                print!("{}", render::thresholds(&config.thresholds)?);
            }
        },
    }

    Ok(())
}
