//! Nutrients - the four tracked nutrient fields.
//!
//! The same shape is used for a single record's nutrient facts and for summed
//! totals, so a day's totals are just the `Sum` of its entries.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Calories, protein, carbohydrate and fat for one record or a set of records.
///
/// Absent fields deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    /// Energy in kcal
    #[serde(default)]
    pub calories_kcal: f64,
    /// Protein in grams
    #[serde(default)]
    pub protein_g: f64,
    /// Carbohydrate in grams
    #[serde(default)]
    pub carbohydrate_g: f64,
    /// Fat in grams
    #[serde(default)]
    pub fat_g: f64,
}

impl Nutrients {
    /// All-zero nutrients.
    pub const ZERO: Self = Self {
        calories_kcal: 0.0,
        protein_g: 0.0,
        carbohydrate_g: 0.0,
        fat_g: 0.0,
    };

    /// Builds a value from the four fields in calories/protein/carbohydrate/fat order.
    #[must_use]
    pub const fn new(calories_kcal: f64, protein_g: f64, carbohydrate_g: f64, fat_g: f64) -> Self {
        Self {
            calories_kcal,
            protein_g,
            carbohydrate_g,
            fat_g,
        }
    }

    /// Reads the field for one metric.
    #[must_use]
    pub const fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Calories => self.calories_kcal,
            Metric::Protein => self.protein_g,
            Metric::Carbohydrate => self.carbohydrate_g,
            Metric::Fat => self.fat_g,
        }
    }
}

impl Add for Nutrients {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories_kcal: self.calories_kcal + rhs.calories_kcal,
            protein_g: self.protein_g + rhs.protein_g,
            carbohydrate_g: self.carbohydrate_g + rhs.carbohydrate_g,
            fat_g: self.fat_g + rhs.fat_g,
        }
    }
}

impl AddAssign for Nutrients {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Nutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// One of the four tracked metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrate (g)
    Carbohydrate,
    /// Fat (g)
    Fat,
}

impl Metric {
    /// Every metric, in display order.
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Carbohydrate, Self::Fat];

    /// Unit suffix used when printing an amount of this metric.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Calories => "",
            Self::Protein | Self::Carbohydrate | Self::Fat => "g",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::Protein => "Protein",
            Self::Carbohydrate => "Carbohydrate",
            Self::Fat => "Fat",
        }
    }
}

/// Anything that carries nutrient facts.
pub trait NutrientSource {
    /// The record's nutrient facts.
    fn nutrients(&self) -> Nutrients;
}

impl NutrientSource for Nutrients {
    fn nutrients(&self) -> Nutrients {
        *self
    }
}

impl<T: NutrientSource + ?Sized> NutrientSource for &T {
    fn nutrients(&self) -> Nutrients {
        (**self).nutrients()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_missing_fields_default_to_zero() {
        let parsed: Nutrients = serde_json::from_str(r#"{"protein_g": 12.5}"#).unwrap();
        assert_eq!(parsed, Nutrients::new(0.0, 12.5, 0.0, 0.0));
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Nutrients = std::iter::empty::<Nutrients>().sum();
        assert_eq!(total, Nutrients::ZERO);
    }

    #[test]
    fn test_add_is_field_wise() {
        let mut total = Nutrients::new(100.0, 10.0, 5.0, 1.0);
        total += Nutrients::new(50.0, 2.0, 3.0, 4.0);
        assert_eq!(total, Nutrients::new(150.0, 12.0, 8.0, 5.0));
        assert_eq!(total.get(Metric::Fat), 5.0);
    }
}
