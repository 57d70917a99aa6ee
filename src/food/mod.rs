//! Bulk food reference data — import, search, and barcode lookup.
//!
//! The `foods` table holds a local snapshot of a USDA FoodData Central
//! JSON dump. Nutrients are stored per 100 g; meal logging scales them by
//! the eaten quantity. Search runs over an FTS5 index of description and
//! brand.

pub mod import;
pub mod search;

use serde::Serialize;

use crate::tracker::types::Nutrients;

/// A food reference row, matching the `foods` table schema.
/// Nutrient values are per 100 g.
#[derive(Debug, Clone, Serialize)]
pub struct Food {
    pub id: i64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_unit: Option<String>,
}

impl Food {
    /// Nutrients for an eaten quantity in grams, scaled from the per-100 g
    /// base and rounded to stored precision.
    pub fn nutrients_for_quantity(&self, grams: f64) -> Nutrients {
        let factor = grams / 100.0;
        let scale = |v: f64| Some(crate::tracker::types::round1(v * factor));
        Nutrients {
            calories: scale(self.calories),
            protein: scale(self.protein),
            carbs: scale(self.carbs),
            fat: scale(self.fat),
        }
    }
}
