//! Integration tests for CLI
//!
//! These tests verify CLI functionality without running actual commands,
//! but instead test the command parsing and structure.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "weatherguard-cli")]
#[command(author, version, about = "Weather hazard warnings from OpenWeather data", long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    api_key: Option<String>,

    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Current {
        city: String,
    },
    Forecast {
        city: String,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    Route {
        from: String,
        to: String,
        #[arg(short, long, default_value = "8")]
        limit: usize,
    },
    Classify {
        file: PathBuf,
        #[arg(long)]
        forecast: bool,
    },
    Thresholds,
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_current_command() {
    let cli = parse_args(&["weatherguard-cli", "current", "Moscow"]).unwrap();
    if let Commands::Current { city } = cli.command {
        assert_eq!(city, "Moscow");
    } else {
        panic!("Expected Current command");
    }
}

#[test]
fn cli_current_requires_city() {
    assert!(parse_args(&["weatherguard-cli", "current"]).is_err());
}

#[test]
fn cli_parses_forecast_with_limit() {
    let cli = parse_args(&["weatherguard-cli", "forecast", "Paris,FR", "-l", "4"]).unwrap();
    if let Commands::Forecast { city, limit } = cli.command {
        assert_eq!(city, "Paris,FR");
        assert_eq!(limit, Some(4));
    } else {
        panic!("Expected Forecast command");
    }
}

#[test]
fn cli_forecast_limit_defaults_to_all() {
    let cli = parse_args(&["weatherguard-cli", "forecast", "Rome"]).unwrap();
    assert!(matches!(cli.command, Commands::Forecast { limit: None, .. }));
}

#[test]
fn cli_parses_route_command() {
    let cli = parse_args(&["weatherguard-cli", "route", "Tangier", "Moscow"]).unwrap();
    if let Commands::Route { from, to, limit } = cli.command {
        assert_eq!(from, "Tangier");
        assert_eq!(to, "Moscow");
        assert_eq!(limit, 8);
    } else {
        panic!("Expected Route command");
    }
}

#[test]
fn cli_route_requires_two_cities() {
    assert!(parse_args(&["weatherguard-cli", "route", "Tangier"]).is_err());
}

#[test]
fn cli_parses_classify_command() {
    let cli = parse_args(&["weatherguard-cli", "classify", "--forecast", "data/forecast.json"])
        .unwrap();
    if let Commands::Classify { file, forecast } = cli.command {
        assert_eq!(file, PathBuf::from("data/forecast.json"));
        assert!(forecast);
    } else {
        panic!("Expected Classify command");
    }
}

#[test]
fn cli_parses_thresholds_command() {
    let cli = parse_args(&["weatherguard-cli", "thresholds"]).unwrap();
    assert!(matches!(cli.command, Commands::Thresholds));
}

#[test]
fn cli_verbosity_flag() {
    let cli = parse_args(&["weatherguard-cli", "thresholds"]).unwrap();
    assert_eq!(cli.verbose, 0);

    let cli = parse_args(&["weatherguard-cli", "-vvv", "thresholds"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn cli_global_options() {
    let cli = parse_args(&[
        "weatherguard-cli",
        "--config",
        "/etc/weatherguard.toml",
        "--api-key",
        "abc123",
        "--json",
        "current",
        "Oslo",
    ])
    .unwrap();

    assert_eq!(cli.config, Some(PathBuf::from("/etc/weatherguard.toml")));
    assert_eq!(cli.api_key.as_deref(), Some("abc123"));
    assert!(cli.json);
}

#[test]
fn cli_rejects_unknown_command() {
    assert!(parse_args(&["weatherguard-cli", "chat", "hello"]).is_err());
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["weatherguard-cli"]).is_err());
}
