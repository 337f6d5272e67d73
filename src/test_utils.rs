//! Shared test utilities.
//!
//! This module provides builders for catalog entries, log entries, inventory
//! items and goals with sensible defaults.

use crate::entities::{
    Catalog, CatalogEntry, DailyLog, GoalConfig, InventoryItem, LogEntry, Nutrients, Phase,
};
use chrono::NaiveDate;

/// Builds a date, panicking on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("bad test date {year}-{month}-{day}"))
}

/// Creates a catalog entry with no brand, flavor or ingredients.
///
/// # Defaults
/// * carbohydrate: 0.0
/// * fat: 0.0
pub fn catalog_entry(id: &str, product_name: &str, calories: f64, protein: f64) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        brand: None,
        product_name: product_name.to_string(),
        flavor: None,
        ingredients: Vec::new(),
        nutrients: Nutrients::new(calories, protein, 0.0, 0.0),
    }
}

/// Collects entries into a catalog, keeping their order.
pub fn catalog_of(entries: Vec<CatalogEntry>) -> Catalog {
    entries.into_iter().collect()
}

/// Creates a log entry with zero carbohydrate and fat.
pub fn log_entry(id: Option<&str>, display_name: &str, calories: f64, protein: f64) -> LogEntry {
    LogEntry {
        id: id.map(str::to_string),
        display_name: display_name.to_string(),
        nutrients: Nutrients::new(calories, protein, 0.0, 0.0),
    }
}

/// Creates a daily log with no persisted totals.
pub fn daily_log(date: NaiveDate, entries: Vec<LogEntry>) -> DailyLog {
    DailyLog {
        date,
        entries,
        persisted_totals: None,
    }
}

/// Creates an inventory item counted in servings.
pub fn inventory_item(id: &str, quantity: f64) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        quantity,
        unit: "servings".to_string(),
    }
}

/// Cut-phase goal with no macro targets.
pub fn cut_goal(target: f64, maintenance: f64) -> GoalConfig {
    GoalConfig {
        phase: Phase::Cut,
        calories_target: target,
        calories_maintenance: maintenance,
        protein_g: 0.0,
        carbohydrate_g: 0.0,
        fat_g: 0.0,
    }
}

/// Bulk-phase goal with no macro targets.
pub fn bulk_goal(target: f64, maintenance: f64) -> GoalConfig {
    GoalConfig {
        phase: Phase::Bulk,
        ..cut_goal(target, maintenance)
    }
}
