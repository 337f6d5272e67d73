//! Nutrition aggregation - totals and goal progress.
//!
//! Every report sums nutrient fields the same way, whether it is a day's log,
//! a selection of inventory items, or a whole catalog.

use crate::entities::{GoalConfig, Metric, NutrientSource, Nutrients};

/// Sums the four nutrient fields across `entries`, in iteration order.
///
/// An empty sequence yields all-zero totals.
#[must_use]
pub fn totals<I>(entries: I) -> Nutrients
where
    I: IntoIterator,
    I::Item: NutrientSource,
{
    entries.into_iter().map(|entry| entry.nutrients()).sum()
}

/// Goal attainment as a whole percentage in `0..=100`.
///
/// Returns 0 when the goal is unset (zero, negative or NaN). Otherwise the
/// ratio is scaled to percent, truncated toward zero and clamped at 100, so
/// 33.6% reports as 33. The ratio is taken before scaling, which means
/// float artifacts truncate too: 29 of 100 reports as 28.
#[must_use]
// Cast safety: the ratio is clamped to [0, 100] and already integral.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent(current: f64, goal: f64) -> u8 {
    if goal.is_nan() || goal <= 0.0 {
        return 0;
    }
    (current / goal * 100.0).floor().clamp(0.0, 100.0) as u8
}

/// Percentage of the configured goal reached for one metric.
#[must_use]
pub fn metric_percent(totals: &Nutrients, goal: &GoalConfig, metric: Metric) -> u8 {
    percent(totals.get(metric), goal.goal_for(metric))
}

/// Text shown for a goal value: empty when unset, so "no goal" never reads
/// as a goal of zero.
#[must_use]
pub fn goal_display(value: f64) -> String {
    if value > 0.0 { format!("{value}") } else { String::new() }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_totals_empty() {
        let none: Vec<Nutrients> = Vec::new();
        assert_eq!(totals(&none), Nutrients::ZERO);
    }

    #[test]
    fn test_totals_exact_field_sums() {
        let entries = vec![
            log_entry(Some("oats"), "Oats", 150.0, 5.0),
            log_entry(None, "Shake (Modified)", 160.5, 30.25),
            log_entry(Some("apple"), "Apple", 95.0, 0.5),
        ];

        let sum = totals(&entries);
        assert_eq!(sum.calories_kcal, 150.0 + 160.5 + 95.0);
        assert_eq!(sum.protein_g, 5.0 + 30.25 + 0.5);
        assert_eq!(
            sum.carbohydrate_g,
            entries.iter().map(|e| e.nutrients.carbohydrate_g).sum::<f64>()
        );
        assert_eq!(sum.fat_g, entries.iter().map(|e| e.nutrients.fat_g).sum::<f64>());
    }

    #[test]
    fn test_percent_unset_goal() {
        assert_eq!(percent(50.0, 0.0), 0);
        assert_eq!(percent(50.0, -10.0), 0);
        assert_eq!(percent(50.0, f64::NAN), 0);
    }

    #[test]
    fn test_percent_clamped_at_100() {
        assert_eq!(percent(150.0, 100.0), 100);
        assert_eq!(percent(100.0, 100.0), 100);
    }

    #[test]
    fn test_percent_truncates() {
        assert_eq!(percent(33.0, 100.0), 33);
        assert_eq!(percent(336.0, 1000.0), 33);
        assert_eq!(percent(29.0, 100.0), 28);
        assert_eq!(percent(57.0, 100.0), 56);
        assert_eq!(percent(58.0, 100.0), 57);
        assert_eq!(percent(999.0, 1000.0), 99);
        assert_eq!(percent(0.0, 1800.0), 0);
    }

    #[test]
    fn test_metric_percent_uses_calorie_target() {
        let goal = cut_goal(2000.0, 2500.0);
        let day = Nutrients::new(1000.0, 40.0, 0.0, 0.0);

        assert_eq!(metric_percent(&day, &goal, Metric::Calories), 50);
        assert_eq!(metric_percent(&day, &goal, Metric::Carbohydrate), 0);
    }

    #[test]
    fn test_goal_display() {
        assert_eq!(goal_display(0.0), "");
        assert_eq!(goal_display(-5.0), "");
        assert_eq!(goal_display(150.0), "150");
        assert_eq!(goal_display(62.5), "62.5");
    }
}
