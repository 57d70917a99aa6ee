use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LogMealParams {
    #[schemars(description = "Name of the meal, e.g. 'chicken salad' or 'breakfast'")]
    pub name: String,

    #[schemars(description = "Calories (kcal). Omit if logging from the food database.")]
    pub calories: Option<f64>,

    #[schemars(description = "Protein in grams")]
    pub protein: Option<f64>,

    #[schemars(description = "Carbohydrates in grams")]
    pub carbs: Option<f64>,

    #[schemars(description = "Fat in grams")]
    pub fat: Option<f64>,

    #[schemars(
        description = "Food database id to pull nutrients from (see search_food). Mutually exclusive with explicit nutrient values."
    )]
    pub food_id: Option<i64>,

    #[schemars(description = "Barcode (GTIN/UPC) to pull nutrients from the food database")]
    pub barcode: Option<String>,

    #[schemars(
        description = "Quantity eaten in grams when logging from the food database. Defaults to 100."
    )]
    pub quantity_g: Option<f64>,

    #[schemars(description = "Calendar date YYYY-MM-DD. Defaults to today.")]
    pub date: Option<String>,
}
