//! Unified error types and result handling.
//!
//! Only the configuration layer and the data store can fail. The report core
//! works on already-loaded values and never returns these errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading settings or data files.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// A required data file does not exist
    #[error("Missing data file: {}", path.display())]
    MissingDataFile {
        /// Path that was looked up
        path: PathBuf,
    },

    /// A data file exists but is not valid JSON for its record type
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A date string was not in `YYYY-MM-DD` form
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input
        value: String,
    },

    /// I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable failure
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
