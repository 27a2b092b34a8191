use std::env;
use std::str::FromStr;
use std::time::Duration;

use dotenvy::dotenv;
use log::LevelFilter;

use crate::errors::{CustomResult, InvalidSettingSnafu};
use crate::modules::helpers::driver::DriverSortKey;
use crate::modules::helpers::race::RaceFilter;
use crate::modules::telemetry::{DEFAULT_TICK, DEFAULT_WINDOW};
use crate::modules::view::View;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub logging_level: LevelFilter,
    pub log_file: String,
    pub default_view: View,
    pub driver_sort: DriverSortKey,
    pub race_filter: RaceFilter,
    pub telemetry_tick: Duration,
    pub telemetry_window: usize,
    /// ticks the live telemetry binary runs for
    pub telemetry_run_ticks: u64,
    /// ticks between two renders of the live telemetry binary
    pub telemetry_refresh_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            logging_level: LevelFilter::Info,
            log_file: "program.log".to_string(),
            default_view: View::Dashboard,
            driver_sort: DriverSortKey::Points,
            race_filter: RaceFilter::All,
            telemetry_tick: DEFAULT_TICK,
            telemetry_window: DEFAULT_WINDOW,
            telemetry_run_ticks: 300,
            telemetry_refresh_ticks: 10,
        }
    }
}

impl Settings {
    /// # settings from the environment
    /// read the settings from the environment, after loading the `.env` file
    /// when there is one. unset values keep their default.
    ///
    /// ## Returns
    /// * `Settings` - the settings
    pub fn from_env() -> CustomResult<Settings> {
        dotenv().ok();
        Settings::from_lookup(|key| env::var(key).ok())
    }

    /// read the settings through a lookup function
    pub fn from_lookup<F>(lookup: F) -> CustomResult<Settings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let logging_level = match lookup("LOGGING_LEVEL") {
            Some(level) => parse_level(&level),
            None => defaults.logging_level,
        };

        let telemetry_tick_ms: u64 = parse_or(&lookup, "TELEMETRY_TICK_MS", defaults.telemetry_tick.as_millis() as u64)?;
        if telemetry_tick_ms == 0 {
            return InvalidSettingSnafu { key: "TELEMETRY_TICK_MS", value: "0" }.fail();
        }

        Ok(Settings {
            logging_level,
            log_file: lookup("LOG_FILE").unwrap_or(defaults.log_file),
            default_view: parse_or(&lookup, "DEFAULT_VIEW", defaults.default_view)?,
            driver_sort: parse_or(&lookup, "DRIVER_SORT", defaults.driver_sort)?,
            race_filter: parse_or(&lookup, "RACE_FILTER", defaults.race_filter)?,
            telemetry_tick: Duration::from_millis(telemetry_tick_ms),
            telemetry_window: parse_or(&lookup, "TELEMETRY_WINDOW", defaults.telemetry_window)?,
            telemetry_run_ticks: parse_or(&lookup, "TELEMETRY_RUN_TICKS", defaults.telemetry_run_ticks)?,
            telemetry_refresh_ticks: parse_or(&lookup, "TELEMETRY_REFRESH_TICKS", defaults.telemetry_refresh_ticks)?,
        })
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> CustomResult<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(parsed),
            Err(_) => InvalidSettingSnafu { key, value }.fail(),
        },
    }
}

/// unknown levels default to info
fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_uppercase().as_str() {
        "OFF" => LevelFilter::Off,
        "ERROR" => LevelFilter::Error,
        "WARN" => LevelFilter::Warn,
        "DEBUG" => LevelFilter::Debug,
        "TRACE" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}
