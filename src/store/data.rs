//! Loading of the catalog, inventory and goal files.

use crate::entities::{Catalog, GoalConfig, InventoryItem};
use crate::errors::{Error, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};

/// Reads and parses one JSON file.
///
/// # Errors
/// - [`Error::MissingDataFile`] if the file does not exist
/// - [`Error::Io`] if it cannot be read
/// - [`Error::Parse`] if it is not valid JSON for `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::MissingDataFile {
            path: path.to_path_buf(),
        });
    }
    debug!("Reading {:?}", path);
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the food catalog, keeping the file's key order.
///
/// # Errors
/// See [`read_json`].
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let catalog: Catalog = read_json(path)?;
    info!("Loaded {} catalog entries", catalog.len());
    Ok(catalog)
}

/// Loads the inventory list.
///
/// # Errors
/// See [`read_json`].
pub fn load_inventory(path: &Path) -> Result<Vec<InventoryItem>> {
    let inventory: Vec<InventoryItem> = read_json(path)?;
    info!("Loaded {} inventory items", inventory.len());
    Ok(inventory)
}

/// Loads the goal configuration. A missing file yields the default goals.
///
/// # Errors
/// [`Error::Io`] or [`Error::Parse`] as in [`read_json`].
pub fn load_goals(path: &Path) -> Result<GoalConfig> {
    let goals: GoalConfig = match read_json(path) {
        Err(Error::MissingDataFile { .. }) => {
            info!("No goals file at {:?}; using default goals", path);
            return Ok(GoalConfig::default());
        }
        other => other?,
    };
    info!("Loaded goals (phase: {})", goals.phase.as_str());
    Ok(goals)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::entities::Phase;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_catalog_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "food_database.json",
            r#"{
                "oats": {"brand": "Quaker", "product_name": "old fashioned oats", "calories_kcal": 150, "protein_g": 5},
                "eggs": {"brand": "Vital Farms", "product_name": "large eggs", "calories_kcal": 70, "protein_g": 6, "fat_g": 5}
            }"#,
        );

        let catalog = load_catalog(&path).unwrap();
        let ids: Vec<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["oats", "eggs"]);
        assert_eq!(catalog.get("eggs").unwrap().nutrients.fat_g, 5.0);
    }

    #[test]
    fn test_load_inventory_and_goals() {
        let dir = tempfile::tempdir().unwrap();
        let inventory_path = write(
            &dir,
            "inventory.json",
            r#"[{"id": "oats", "quantity": 2, "unit": "bags"}]"#,
        );
        let goals_path = write(
            &dir,
            "goals.json",
            r#"{"phase": "bulk", "calories_target": 3000, "calories_maintenance": 2600, "protein_g": 180, "carbohydrate_g": 0, "fat_g": 90}"#,
        );

        let inventory = load_inventory(&inventory_path).unwrap();
        assert_eq!(inventory[0].unit, "bags");

        let goals = load_goals(&goals_path).unwrap();
        assert_eq!(goals.phase, Phase::Bulk);
        assert_eq!(goals.fat_g, 90.0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_inventory(&dir.path().join("inventory.json")).unwrap_err();
        assert!(matches!(err, Error::MissingDataFile { .. }));
        let err = load_catalog(&dir.path().join("food_database.json")).unwrap_err();
        assert!(matches!(err, Error::MissingDataFile { .. }));
    }

    #[test]
    fn test_missing_goals_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let goals = load_goals(&dir.path().join("goals.json")).unwrap();

        assert_eq!(goals, GoalConfig::default());
        assert_eq!(goals.phase, Phase::Cut);
        assert_eq!(goals.calories_target, 1800.0);
        assert_eq!(goals.calories_maintenance, 2300.0);
    }

    #[test]
    fn test_malformed_goals_still_fail() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "goals.json", r#""bulk""#);

        let err = load_goals(&path).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "inventory.json", r#"{"not": "a list"}"#);

        let err = load_inventory(&path).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains("inventory.json"));
    }
}
