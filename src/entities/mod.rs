//! Entity module - Contains the plain data records the reports are built from.
//! These entities mirror the JSON data files: catalog, inventory, daily logs and goals.
//! They are loaded once by the store and treated as read-only afterwards.

pub mod catalog;
pub mod goal;
pub mod inventory;
pub mod log;
pub mod nutrients;

pub use catalog::{Catalog, CatalogEntry};
pub use goal::{GoalConfig, Phase};
pub use inventory::InventoryItem;
pub use log::{DailyLog, DailyLogFile, LogEntry};
pub use nutrients::{Metric, NutrientSource, Nutrients};
