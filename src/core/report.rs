//! Report generation business logic.
//!
//! This module builds the dashboard, history and catalog views. All functions
//! are framework-agnostic and return structured data; turning it into any
//! document format is up to the caller. The dashboard and history share one
//! aggregation path so their totals and calorie statuses always agree.

use super::aggregate::{goal_display, metric_percent};
use super::projection::{Status, classify_calories};
use super::ranking::{rank, rank_catalog};
use super::resolver::{resolve_inventory, resolve_log_entry};
use super::title::format_title;
use crate::entities::{
    Catalog, CatalogEntry, DailyLog, GoalConfig, InventoryItem, LogEntry, Metric, Nutrients,
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

/// Brand shown when a record has none.
pub const UNKNOWN_BRAND: &str = "N/A";

/// Product name with its flavor in parentheses, both title-cased.
#[must_use]
pub fn display_name(entry: &CatalogEntry) -> String {
    let product = format_title(&entry.product_name);
    match entry.flavor.as_deref().map(format_title) {
        Some(flavor) if !flavor.is_empty() => format!("{product} ({flavor})"),
        _ => product,
    }
}

/// Brand of a resolved record, or [`UNKNOWN_BRAND`].
#[must_use]
pub fn display_brand(entry: Option<&CatalogEntry>) -> String {
    entry
        .and_then(|e| e.brand.clone())
        .unwrap_or_else(|| UNKNOWN_BRAND.to_string())
}

/// One row of a day's log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRow {
    /// Brand of the matching catalog entry
    pub brand: String,
    /// Display name; falls back to the logged name when unresolved
    pub product: String,
    /// Whether the logged values were edited by hand
    pub modified: bool,
    /// Nutrients as logged
    pub nutrients: Nutrients,
}

impl LogRow {
    /// Builds the row for `entry`.
    #[must_use]
    pub fn new(entry: &LogEntry, catalog: &Catalog) -> Self {
        let resolved = resolve_log_entry(entry, catalog);
        let product =
            resolved.map_or_else(|| format_title(&entry.display_name), display_name);

        Self {
            brand: display_brand(resolved),
            product,
            modified: entry.is_modified(),
            nutrients: entry.nutrients,
        }
    }
}

/// One row of the inventory listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRow {
    /// Catalog key the item resolved to
    pub catalog_id: String,
    /// Brand label
    pub brand: String,
    /// Display name
    pub product: String,
    /// Amount on hand
    pub quantity: f64,
    /// Unit for `quantity`
    pub unit: String,
    /// Catalog nutrients per serving
    pub nutrients: Nutrients,
}

/// Progress toward one goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalCard {
    /// Which metric
    pub metric: Metric,
    /// Day total for the metric
    pub current: f64,
    /// Goal text, empty when unset
    pub goal: String,
    /// Whole percent of the goal reached, `0..=100`
    pub percent: u8,
}

/// Everything the daily dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Report date
    pub date: NaiveDate,
    /// Recomputed day totals
    pub totals: Nutrients,
    /// One card per metric
    pub cards: Vec<GoalCard>,
    /// Calorie status of the day as logged
    pub calories_status: Status,
    /// Log entries in logging order
    pub log_rows: Vec<LogRow>,
    /// Resolvable inventory in listing order
    pub inventory_rows: Vec<InventoryRow>,
}

/// One day in the history view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    /// Day
    pub date: NaiveDate,
    /// Recomputed day totals
    pub totals: Nutrients,
    /// Calorie status against the phase thresholds
    pub calories_status: Status,
    /// Log entries in logging order
    pub rows: Vec<LogRow>,
}

/// One row of the catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRow {
    /// Catalog key
    pub id: String,
    /// Brand label
    pub brand: String,
    /// Title-cased product name
    pub product: String,
    /// Title-cased flavor, empty when none
    pub flavor: String,
    /// Ingredients joined with commas
    pub ingredients: String,
    /// Nutrients per serving
    pub nutrients: Nutrients,
    /// Lowercase text a free-text search matches against
    pub search_text: String,
}

/// The full catalog view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogListing {
    /// Rows in listing order
    pub rows: Vec<CatalogRow>,
    /// Distinct brands, sorted
    pub brands: Vec<String>,
    /// Number of catalog entries
    pub count: usize,
}

/// Recomputes a day's totals, warning when the stored totals disagree.
fn day_totals(log: &DailyLog) -> Nutrients {
    if !log.persisted_totals_match() {
        warn!(
            "Stored totals for {} do not match its entries; using recomputed totals",
            log.date
        );
    }
    log.totals()
}

fn log_rows(log: &DailyLog, catalog: &Catalog) -> Vec<LogRow> {
    log.entries.iter().map(|entry| LogRow::new(entry, catalog)).collect()
}

/// Builds the goal cards for a set of totals.
#[must_use]
pub fn goal_cards(totals: &Nutrients, goal: &GoalConfig) -> Vec<GoalCard> {
    Metric::ALL
        .iter()
        .map(|&metric| GoalCard {
            metric,
            current: totals.get(metric),
            goal: goal_display(goal.goal_for(metric)),
            percent: metric_percent(totals, goal, metric),
        })
        .collect()
}

/// Inventory rows in canonical listing order; unresolvable items are left out.
#[must_use]
pub fn inventory_rows(inventory: &[InventoryItem], catalog: &Catalog) -> Vec<InventoryRow> {
    rank(resolve_inventory(inventory, catalog), |r| r.entry)
        .into_iter()
        .map(|r| InventoryRow {
            catalog_id: r.entry.id.clone(),
            brand: display_brand(Some(r.entry)),
            product: display_name(r.entry),
            quantity: r.item.quantity,
            unit: r.item.unit.clone(),
            nutrients: r.entry.nutrients,
        })
        .collect()
}

/// Builds the dashboard for `date` from an already-loaded log.
#[must_use]
pub fn build_dashboard(
    date: NaiveDate,
    log: &DailyLog,
    catalog: &Catalog,
    inventory: &[InventoryItem],
    goal: &GoalConfig,
) -> Dashboard {
    let totals = day_totals(log);

    Dashboard {
        date,
        totals,
        cards: goal_cards(&totals, goal),
        calories_status: classify_calories(goal, totals.calories_kcal, 0.0),
        log_rows: log_rows(log, catalog),
        inventory_rows: inventory_rows(inventory, catalog),
    }
}

/// Summarizes one logged day.
#[must_use]
pub fn summarize_day(log: &DailyLog, catalog: &Catalog, goal: &GoalConfig) -> DaySummary {
    let totals = day_totals(log);

    DaySummary {
        date: log.date,
        totals,
        calories_status: classify_calories(goal, totals.calories_kcal, 0.0),
        rows: log_rows(log, catalog),
    }
}

/// Summarizes every logged day, newest first.
#[must_use]
pub fn build_history(logs: &[DailyLog], catalog: &Catalog, goal: &GoalConfig) -> Vec<DaySummary> {
    let mut days: Vec<DaySummary> = logs
        .iter()
        .map(|log| summarize_day(log, catalog, goal))
        .collect();
    days.sort_by(|a, b| b.date.cmp(&a.date));
    days
}

/// Builds the catalog listing in canonical order.
#[must_use]
pub fn build_catalog_listing(catalog: &Catalog) -> CatalogListing {
    let rows: Vec<CatalogRow> = rank_catalog(catalog)
        .into_iter()
        .map(|entry| {
            let brand = display_brand(Some(entry));
            let product = format_title(&entry.product_name);
            let flavor = entry.flavor.as_deref().map(format_title).unwrap_or_default();
            let ingredients = entry.ingredients.join(", ");
            let search_text =
                format!("{brand} {product} {flavor} {ingredients}").to_lowercase();

            CatalogRow {
                id: entry.id.clone(),
                brand,
                product,
                flavor,
                ingredients,
                nutrients: entry.nutrients,
                search_text,
            }
        })
        .collect();

    let mut brands: Vec<String> = rows.iter().map(|row| row.brand.clone()).collect();
    brands.sort();
    brands.dedup();

    CatalogListing {
        rows,
        brands,
        count: catalog.len(),
    }
}

/// Generates a progress bar string for visual representation.
///
/// Creates a text-based progress bar like: `[████████░░] 80%`
///
/// # Arguments
/// * `percent` - Whole percent, `0..=100`
/// * `bar_length` - Length of the progress bar in characters (default 10)
#[must_use]
pub fn format_progress_bar(percent: u8, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped = usize::from(percent.min(100));

    let filled = clamped * length / 100;
    let empty = length.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    format!("[{filled_str}{empty_str}] {percent}%")
}

/// Formats an amount with its unit, e.g. `31g` or `1800`.
#[must_use]
pub fn format_amount(value: f64, metric: Metric) -> String {
    format!("{value}{}", metric.unit())
}
