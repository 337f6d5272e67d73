/// Application settings loading from config.toml
pub mod settings;

/// Environment overrides (`.env`, config path, report date)
pub mod env;

pub use settings::{DataPaths, Settings, load_settings};
