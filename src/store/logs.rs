//! Loading of daily log files.
//!
//! Logs are `YYYY-MM-DD.json` files anywhere under the logs directory; the
//! date comes from the file name. How they are nested is not interpreted.

use crate::entities::{DailyLog, DailyLogFile};
use crate::errors::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::data::read_json;

/// Date encoded in a log file name, if it is one.
fn log_date(path: &Path) -> Option<NaiveDate> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()
}

/// Collects every dated log file under `dir`, recursing into sub-directories.
fn scan(dir: &Path, found: &mut Vec<(NaiveDate, PathBuf)>) -> Result<()> {
    for ent in fs::read_dir(dir)? {
        let ent = ent?;
        let path = ent.path();
        if ent.file_type()?.is_dir() {
            scan(&path, found)?;
        } else if let Some(date) = log_date(&path) {
            found.push((date, path));
        } else {
            debug!("Skipping non-log file {:?}", path);
        }
    }
    Ok(())
}

/// Loads a single log file for `date`.
///
/// # Errors
/// Fails if the file is missing, unreadable or malformed.
pub fn load_log(path: &Path, date: NaiveDate) -> Result<DailyLog> {
    let file: DailyLogFile = read_json(path)?;
    let log = DailyLog::from_file(date, file);
    if !log.persisted_totals_match() {
        warn!("Stored totals in {:?} disagree with its entries", path);
    }
    Ok(log)
}

/// Loads every daily log under `dir`, oldest first.
///
/// A missing directory means nothing has been logged yet.
///
/// # Errors
/// Fails if the directory cannot be walked or a log file is malformed.
pub fn load_logs(dir: &Path) -> Result<Vec<DailyLog>> {
    if !dir.is_dir() {
        info!("No logs directory at {:?}", dir);
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    scan(dir, &mut found)?;
    found.sort();

    let logs = found
        .iter()
        .map(|(date, path)| load_log(path, *date))
        .collect::<Result<Vec<_>>>()?;
    info!("Loaded {} daily logs", logs.len());
    Ok(logs)
}

/// The log for `date`, or an empty one if nothing was logged that day.
#[must_use]
pub fn log_for_date(logs: &[DailyLog], date: NaiveDate) -> DailyLog {
    logs.iter()
        .find(|log| log.date == date)
        .cloned()
        .unwrap_or_else(|| DailyLog::empty(date))
}
