//! Application settings loading from config.toml
//!
//! Settings only say where the data files live. Every field has a default
//! matching the usual project layout, so the file itself is optional.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default settings file name, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Data file locations
    #[serde(default)]
    pub data: DataPaths,
}

/// Locations of the JSON data files
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DataPaths {
    /// Food database (identifier to entry object)
    pub catalog: PathBuf,
    /// Inventory list
    pub inventory: PathBuf,
    /// Goal configuration
    pub goals: PathBuf,
    /// Directory scanned for `YYYY-MM-DD.json` daily logs
    pub logs_dir: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("data/food_database.json"),
            inventory: PathBuf::from("data/inventory.json"),
            goals: PathBuf::from("data/goals.json"),
            logs_dir: PathBuf::from("logs"),
        }
    }
}

/// Parses settings from TOML text
///
/// # Errors
/// Returns an error if the TOML syntax is invalid or a field has the wrong type
pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from a TOML file
///
/// A missing file yields the default settings.
///
/// # Errors
/// Returns an error if:
/// - The file exists but cannot be read
/// - The TOML syntax is invalid
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    if !path.exists() {
        info!("No settings file at {:?}; using defaults", path);
        return Ok(Settings::default());
    }

    debug!("Attempting to load settings from: {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;
    parse_settings(&contents)
}
