//! Daily log entity - what was eaten on a given day.
//!
//! Log entries carry the nutrient values captured when they were logged. Those
//! values are what was actually eaten and win over any later catalog edits.
//! A day's totals are always derived from its entries; a persisted totals
//! block is kept only so it can be compared against the recomputed sum.

use super::nutrients::{NutrientSource, Nutrients};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Marker placed in a display name when the logged values were edited by hand.
pub const MODIFIED_MARKER: &str = "(Modified)";

/// A single consumption record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Catalog identifier, if the entry came from the catalog
    #[serde(default)]
    pub id: Option<String>,
    /// Name as logged
    #[serde(default)]
    pub display_name: String,
    /// Nutrients as eaten
    #[serde(flatten)]
    pub nutrients: Nutrients,
}

impl LogEntry {
    /// Whether the logged values were manually overridden.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.display_name.contains(MODIFIED_MARKER)
    }
}

impl NutrientSource for LogEntry {
    fn nutrients(&self) -> Nutrients {
        self.nutrients
    }
}

/// On-disk shape of a daily log file. The date comes from the file name.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DailyLogFile {
    /// Entries in logging order
    #[serde(default)]
    pub entries: Vec<LogEntry>,
    /// Totals as persisted by whoever last wrote the file
    #[serde(default)]
    pub totals: Option<Nutrients>,
}

/// One day's entries.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyLog {
    /// Calendar day
    pub date: NaiveDate,
    /// Entries in logging order
    pub entries: Vec<LogEntry>,
    /// Totals read from storage, if any
    pub persisted_totals: Option<Nutrients>,
}

impl DailyLog {
    /// A day with nothing logged yet.
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
            persisted_totals: None,
        }
    }

    /// Attaches a date to a parsed log file.
    #[must_use]
    pub fn from_file(date: NaiveDate, file: DailyLogFile) -> Self {
        Self {
            date,
            entries: file.entries,
            persisted_totals: file.totals,
        }
    }

    /// Field-wise sum of all entries. This is the authoritative total.
    #[must_use]
    pub fn totals(&self) -> Nutrients {
        crate::core::aggregate::totals(&self.entries)
    }

    /// Whether the persisted totals (if any) equal the recomputed sum.
    #[must_use]
    pub fn persisted_totals_match(&self) -> bool {
        self.persisted_totals
            .is_none_or(|persisted| persisted == self.totals())
    }
}
