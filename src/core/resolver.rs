//! Catalog resolution for log and inventory records.
//!
//! Records reference the catalog by identifier. Inventory identifiers are
//! sometimes only a fragment of the full catalog key, so lookup falls back to
//! the first key (in catalog order) that contains the identifier. Multiple
//! keys containing the same fragment is a known ambiguity; the catalog keeps
//! its source order so the answer is at least reproducible.

use crate::entities::{Catalog, CatalogEntry, InventoryItem, LogEntry, NutrientSource, Nutrients};
use tracing::{debug, trace};

/// Looks up `identifier` in the catalog.
///
/// Tries an exact key match first, then the first key that contains
/// `identifier` as a case-sensitive substring. An empty identifier never
/// matches. `None` is not an error: callers fall back to the data carried by
/// the referencing record.
#[must_use]
pub fn resolve<'a>(identifier: &str, catalog: &'a Catalog) -> Option<&'a CatalogEntry> {
    if identifier.is_empty() {
        return None;
    }
    if let Some(entry) = catalog.get(identifier) {
        return Some(entry);
    }

    let found = catalog.iter().find(|entry| entry.id.contains(identifier));
    match found {
        Some(entry) => trace!("Resolved '{}' by substring to '{}'", identifier, entry.id),
        None => debug!("No catalog entry for '{}'", identifier),
    }
    found
}

/// Resolves a log entry's identifier, if it has one.
#[must_use]
pub fn resolve_log_entry<'a>(entry: &LogEntry, catalog: &'a Catalog) -> Option<&'a CatalogEntry> {
    entry.id.as_deref().and_then(|id| resolve(id, catalog))
}

/// An inventory item paired with the catalog entry it resolved to.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedItem<'a> {
    /// The stocked item
    pub item: &'a InventoryItem,
    /// Its catalog facts
    pub entry: &'a CatalogEntry,
}

impl NutrientSource for ResolvedItem<'_> {
    fn nutrients(&self) -> Nutrients {
        self.entry.nutrients
    }
}

/// Resolves every inventory item, dropping the ones with no catalog entry.
///
/// The result keeps inventory order.
#[must_use]
pub fn resolve_inventory<'a>(
    inventory: &'a [InventoryItem],
    catalog: &'a Catalog,
) -> Vec<ResolvedItem<'a>> {
    inventory
        .iter()
        .filter_map(|item| resolve(&item.id, catalog).map(|entry| ResolvedItem { item, entry }))
        .collect()
}
