//! Data store - reads the JSON data files into entities.
//!
//! This is the only part of the crate that touches the file system.

/// Catalog, inventory and goal files
pub mod data;
/// Daily log files
pub mod logs;

pub use data::{load_catalog, load_goals, load_inventory};
pub use logs::{load_logs, log_for_date};
