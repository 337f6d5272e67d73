//! Inventory entity - items currently in stock.
//!
//! An inventory item only references the catalog; its nutrient facts come from
//! resolving `id` against the catalog.

use serde::{Deserialize, Serialize};

/// A stocked item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Catalog identifier, possibly only a fragment of the full key
    pub id: String,
    /// Amount on hand
    #[serde(default)]
    pub quantity: f64,
    /// Unit for `quantity` (e.g. "bars", "cans")
    #[serde(default)]
    pub unit: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_inventory_list() {
        let json = r#"[
            {"id": "quest_bar_cookie", "quantity": 4, "unit": "bars"},
            {"id": "greek_yogurt", "quantity": 1.5}
        ]"#;
        let items: Vec<InventoryItem> = serde_json::from_str(json).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, 4.0);
        assert_eq!(items[0].unit, "bars");
        assert_eq!(items[1].unit, "");
    }
}
