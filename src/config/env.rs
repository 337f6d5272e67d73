//! Environment overrides.
//!
//! `.env` is loaded first (if present), then `FOOD_LOG_CONFIG` picks the
//! settings file and `FOOD_LOG_DATE` pins the report date. The clock is read
//! only here, once, and the resulting date is passed explicitly from then on.

use super::settings::DEFAULT_CONFIG_PATH;
use crate::errors::{Error, Result};
use chrono::{Local, NaiveDate};
use std::env::VarError;
use std::path::PathBuf;
use tracing::info;

/// Environment variable naming the settings file
pub const CONFIG_PATH_VAR: &str = "FOOD_LOG_CONFIG";

/// Environment variable pinning the report date (`YYYY-MM-DD`)
pub const REPORT_DATE_VAR: &str = "FOOD_LOG_DATE";

/// Loads `.env` into the process environment. Missing files are fine.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) => info!("No .env loaded: {}", e),
    }
}

/// Value of an environment lookup. Unset is `None`; set but not valid
/// Unicode is an error rather than silently unset.
fn optional_var(lookup: std::result::Result<String, VarError>) -> Result<Option<String>> {
    match lookup {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Settings file path from `FOOD_LOG_CONFIG`, or the default.
///
/// # Errors
/// Returns [`Error::EnvVar`] when `FOOD_LOG_CONFIG` is not valid Unicode.
pub fn config_path() -> Result<PathBuf> {
    let value = optional_var(std::env::var(CONFIG_PATH_VAR))?;
    Ok(value.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from))
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
/// Returns [`Error::InvalidDate`] when the text is not a calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate {
        value: value.to_string(),
    })
}

/// Chooses the report date: an explicit override wins, otherwise `today`.
///
/// # Errors
/// Returns [`Error::InvalidDate`] when the override is not a calendar date.
pub fn resolve_report_date(override_value: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    override_value.map_or(Ok(today), parse_date)
}

/// Report date from `FOOD_LOG_DATE`, falling back to the local date.
///
/// # Errors
/// Returns [`Error::InvalidDate`] when `FOOD_LOG_DATE` is set but malformed,
/// or [`Error::EnvVar`] when it is not valid Unicode.
pub fn report_date() -> Result<NaiveDate> {
    let value = optional_var(std::env::var(REPORT_DATE_VAR))?;
    resolve_report_date(value.as_deref(), Local::now().date_naive())
}
