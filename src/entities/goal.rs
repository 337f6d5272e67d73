//! Goal configuration - calorie phase and macro targets.

use super::nutrients::Metric;
use serde::{Deserialize, Serialize};

/// Direction of the calorie goal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Ensure a minimum intake; falling short is penalized
    Bulk,
    /// Limit intake; going over is penalized. Unrecognized phases read as cut.
    #[default]
    #[serde(other)]
    Cut,
}

impl Phase {
    /// Lowercase label as stored.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bulk => "bulk",
            Self::Cut => "cut",
        }
    }
}

const fn default_calories_target() -> f64 {
    1800.0
}

const fn default_calories_maintenance() -> f64 {
    2300.0
}

/// Targets the day is measured against. A zero or negative value means the
/// goal is unset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoalConfig {
    /// Cut or bulk
    #[serde(default)]
    pub phase: Phase,
    /// Daily calorie target
    #[serde(default = "default_calories_target")]
    pub calories_target: f64,
    /// Maintenance calories
    #[serde(default = "default_calories_maintenance")]
    pub calories_maintenance: f64,
    /// Protein target (g)
    #[serde(default)]
    pub protein_g: f64,
    /// Carbohydrate target (g)
    #[serde(default)]
    pub carbohydrate_g: f64,
    /// Fat target (g)
    #[serde(default)]
    pub fat_g: f64,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            phase: Phase::Cut,
            calories_target: default_calories_target(),
            calories_maintenance: default_calories_maintenance(),
            protein_g: 0.0,
            carbohydrate_g: 0.0,
            fat_g: 0.0,
        }
    }
}

impl GoalConfig {
    /// The goal for a metric. Calories use the target, not maintenance.
    #[must_use]
    pub const fn goal_for(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Calories => self.calories_target,
            Metric::Protein => self.protein_g,
            Metric::Carbohydrate => self.carbohydrate_g,
            Metric::Fat => self.fat_g,
        }
    }
}
