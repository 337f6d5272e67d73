//! Catalog entity - the food database keyed by identifier.
//!
//! Entries are read-only once loaded. The catalog keeps the key order of the
//! source JSON object so that substring lookups, which return the first
//! matching key, give the same answer on every run.

use super::nutrients::{NutrientSource, Nutrients};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A known food product and its nutrient facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Catalog key; filled from the JSON object key, not the value
    #[serde(skip)]
    pub id: String,
    /// Brand label, if recorded
    #[serde(default)]
    pub brand: Option<String>,
    /// Free-text product name
    #[serde(default)]
    pub product_name: String,
    /// Optional flavor or variant
    #[serde(default)]
    pub flavor: Option<String>,
    /// Ingredient list in label order
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Nutrient facts per serving
    #[serde(flatten)]
    pub nutrients: Nutrients,
}

impl NutrientSource for CatalogEntry {
    fn nutrients(&self) -> Nutrients {
        self.nutrients
    }
}

/// Identifier to entry mapping with stable insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry under `entry.id`.
    ///
    /// Re-inserting an existing identifier replaces the value but keeps its
    /// original position.
    pub fn insert(&mut self, entry: CatalogEntry) {
        if let Some(&position) = self.index.get(&entry.id) {
            self.entries[position] = entry;
        } else {
            self.index.insert(entry.id.clone(), self.entries.len());
            self.entries.push(entry);
        }
    }

    /// Exact identifier lookup.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = Catalog;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a JSON object mapping identifiers to catalog entries")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Catalog, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut catalog = Catalog::new();
        while let Some((id, mut entry)) = map.next_entry::<String, CatalogEntry>()? {
            entry.id = id;
            catalog.insert(entry);
        }
        Ok(catalog)
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CatalogVisitor)
    }
}
