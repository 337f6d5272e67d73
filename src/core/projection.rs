//! What-if projection of selected inventory items onto a day's totals.
//!
//! Selecting inventory items adds their nutrients to the current totals
//! without logging anything. Each metric of the projected day is then
//! classified against the goal so the presentation layer can colour it.
//!
//! Calories are judged by phase: on a cut, going over target or maintenance
//! is flagged; on a bulk, falling short of them is. Protein is never flagged
//! for being high. Carbohydrate and fat are flagged once they exceed a set
//! goal. A metric only reads as on-track when the selection actually adds
//! some of it; otherwise an unflagged metric stays neutral.

use super::aggregate::{percent, totals};
use crate::entities::{GoalConfig, Metric, NutrientSource, Nutrients, Phase};
use serde::Serialize;
use std::fmt;

/// Classification of one projected metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Nothing added and nothing to flag
    Neutral,
    /// Something was added and the metric is within its goal
    OnTrack,
    /// Bulk phase, below maintenance calories
    UnderMaintenance,
    /// Bulk phase, at or above maintenance but below target
    UnderTarget,
    /// Cut phase, above maintenance calories
    OverMaintenance,
    /// Cut phase, at or below maintenance but above target
    OverTarget,
    /// A strict macro above its goal
    OverGoal,
}

impl Status {
    /// Stable label, e.g. `over-target`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::OnTrack => "on-track",
            Self::UnderMaintenance => "under-maintenance",
            Self::UnderTarget => "under-target",
            Self::OverMaintenance => "over-maintenance",
            Self::OverTarget => "over-target",
            Self::OverGoal => "over-goal",
        }
    }

    /// Whether the status is a warning or a violation.
    #[must_use]
    pub const fn is_flagged(self) -> bool {
        !matches!(self, Self::Neutral | Self::OnTrack)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-metric statuses for a projected day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Calorie status, phase dependent
    pub calories: Status,
    /// Protein status, never flagged
    pub protein: Status,
    /// Carbohydrate status
    pub carbohydrate: Status,
    /// Fat status
    pub fat: Status,
}

impl Classification {
    /// Status for one metric.
    #[must_use]
    pub const fn get(&self, metric: Metric) -> Status {
        match metric {
            Metric::Calories => self.calories,
            Metric::Protein => self.protein,
            Metric::Carbohydrate => self.carbohydrate,
            Metric::Fat => self.fat,
        }
    }
}

/// Result of projecting a selection onto a day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    /// Current totals plus the selection
    pub projected_totals: Nutrients,
    /// What the selection contributed
    pub added: Nutrients,
    /// Per-metric statuses
    pub classification: Classification,
}

impl Projection {
    /// Progress toward each goal after the projection, truncated to whole
    /// percent and clamped at 100.
    #[must_use]
    pub fn percent(&self, goal: &GoalConfig, metric: Metric) -> u8 {
        percent(self.projected_totals.get(metric), goal.goal_for(metric))
    }
}

/// Adds `selected` to `current` and classifies the outcome against `goal`.
#[must_use]
pub fn project<I>(current: Nutrients, goal: &GoalConfig, selected: I) -> Projection
where
    I: IntoIterator,
    I::Item: NutrientSource,
{
    let added = totals(selected);
    let projected = current + added;

    Projection {
        projected_totals: projected,
        added,
        classification: Classification {
            calories: classify_calories(goal, projected.calories_kcal, added.calories_kcal),
            protein: classify_lenient(added.protein_g),
            carbohydrate: classify_strict(
                goal.carbohydrate_g,
                projected.carbohydrate_g,
                added.carbohydrate_g,
            ),
            fat: classify_strict(goal.fat_g, projected.fat_g, added.fat_g),
        },
    }
}

/// Calorie status for a day total, as used by both the projection and the
/// history view. Unset (non-positive) thresholds are skipped.
#[must_use]
pub fn classify_calories(goal: &GoalConfig, projected: f64, added: f64) -> Status {
    let maintenance = goal.calories_maintenance;
    let target = goal.calories_target;

    let flagged = match goal.phase {
        Phase::Bulk => {
            if maintenance > 0.0 && projected < maintenance {
                Some(Status::UnderMaintenance)
            } else if target > 0.0 && projected < target {
                Some(Status::UnderTarget)
            } else {
                None
            }
        }
        Phase::Cut => {
            if maintenance > 0.0 && projected > maintenance {
                Some(Status::OverMaintenance)
            } else if target > 0.0 && projected > target {
                Some(Status::OverTarget)
            } else {
                None
            }
        }
    };

    flagged.unwrap_or_else(|| added_status(added))
}

fn classify_lenient(added: f64) -> Status {
    added_status(added)
}

fn classify_strict(goal: f64, projected: f64, added: f64) -> Status {
    if goal > 0.0 && projected > goal {
        Status::OverGoal
    } else {
        added_status(added)
    }
}

fn added_status(added: f64) -> Status {
    if added > 0.0 { Status::OnTrack } else { Status::Neutral }
}
