//! Deterministic ordering of catalog and inventory listings.
//!
//! The canonical listing order puts the most protein first, then the most
//! calories, then names alphabetically (ignoring case). User-selectable
//! column sorts are applied by the presentation layer, which gets its
//! comparable values from [`sort_value`].

use super::title::format_title;
use crate::entities::CatalogEntry;
use crate::errors::{Error, Result};
use std::cmp::Ordering;
use std::str::FromStr;

/// Compares two entries by the canonical listing order.
#[must_use]
pub fn compare_entries(a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
    b.nutrients
        .protein_g
        .total_cmp(&a.nutrients.protein_g)
        .then_with(|| b.nutrients.calories_kcal.total_cmp(&a.nutrients.calories_kcal))
        .then_with(|| a.product_name.to_lowercase().cmp(&b.product_name.to_lowercase()))
}

/// Stable sort of `items` by protein (desc), calories (desc), then
/// lowercased product name (asc). `key_fn` picks the catalog facts for an item.
#[must_use]
pub fn rank<T, F>(mut items: Vec<T>, key_fn: F) -> Vec<T>
where
    F: Fn(&T) -> &CatalogEntry,
{
    items.sort_by(|a, b| compare_entries(key_fn(a), key_fn(b)));
    items
}

/// Every catalog entry in canonical listing order.
#[must_use]
pub fn rank_catalog<'a, I>(entries: I) -> Vec<&'a CatalogEntry>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    rank(entries.into_iter().collect(), |entry| *entry)
}

/// Columns a listing can be re-sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Brand label
    Brand,
    /// Product display name
    Product,
    /// Calories
    Calories,
    /// Protein
    Protein,
    /// Carbohydrate
    Carbohydrate,
    /// Fat
    Fat,
}

impl FromStr for SortField {
    type Err = Error;

    /// Accepts the column name or its zero-based column index.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "brand" | "0" => Ok(Self::Brand),
            "product" | "1" => Ok(Self::Product),
            "calories" | "2" => Ok(Self::Calories),
            "protein" | "3" => Ok(Self::Protein),
            "carbohydrate" | "carbs" | "4" => Ok(Self::Carbohydrate),
            "fat" | "5" => Ok(Self::Fat),
            other => Err(Error::Config {
                message: format!("Unknown sort field '{other}'"),
            }),
        }
    }
}

/// A raw comparable value for one column.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Text column
    Text(String),
    /// Numeric column
    Number(f64),
}

/// The value `entry` contributes to a sort by `field`.
#[must_use]
pub fn sort_value(entry: &CatalogEntry, field: SortField) -> SortValue {
    match field {
        SortField::Brand => {
            SortValue::Text(entry.brand.clone().unwrap_or_else(|| "N/A".to_string()))
        }
        SortField::Product => SortValue::Text(format_title(&entry.product_name)),
        SortField::Calories => SortValue::Number(entry.nutrients.calories_kcal),
        SortField::Protein => SortValue::Number(entry.nutrients.protein_g),
        SortField::Carbohydrate => SortValue::Number(entry.nutrients.carbohydrate_g),
        SortField::Fat => SortValue::Number(entry.nutrients.fat_g),
    }
}

/// Numbers sort descending, text ascending. Numbers come before text when
/// the two are mixed.
#[must_use]
pub fn compare_sort_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Number(x), SortValue::Number(y)) => y.total_cmp(x),
        (SortValue::Text(x), SortValue::Text(y)) => x.cmp(y),
        (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
        (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
    }
}
