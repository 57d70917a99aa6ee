//! CLI `log` command — append a meal to the ledger.

use anyhow::{bail, Result};
use chrono::NaiveDate;

use crate::config::NoshConfig;
use crate::food;
use crate::tracker;
use crate::tracker::types::Nutrients;

/// Arguments resolved by the clap layer.
pub struct LogArgs {
    pub name: String,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub food_id: Option<i64>,
    pub barcode: Option<String>,
    pub quantity_g: Option<f64>,
    pub date: Option<String>,
}

/// Log a meal, either from explicit nutrient flags or from the food
/// database scaled by `--qty`.
pub fn log(config: &NoshConfig, args: &LogArgs) -> Result<()> {
    let day = resolve_day(args.date.as_deref())?;
    let conn = crate::db::open_database(config.resolved_db_path())?;

    let explicit = Nutrients {
        calories: args.calories,
        protein: args.protein,
        carbs: args.carbs,
        fat: args.fat,
    };
    let from_food_db = args.food_id.is_some() || args.barcode.is_some();
    if from_food_db && !explicit.is_empty() {
        bail!("use either nutrient flags or --food/--barcode, not both");
    }

    let nutrients = if from_food_db {
        let found = match (args.food_id, args.barcode.as_deref()) {
            (Some(id), _) => food::search::food_by_id(&conn, id)?,
            (None, Some(code)) => food::search::food_by_barcode(&conn, code)?,
            (None, None) => bail!("food reference missing"),
        };
        let Some(food) = found else {
            bail!("food not found — try `nosh search` first");
        };
        let quantity = args.quantity_g.unwrap_or(100.0);
        if quantity <= 0.0 {
            bail!("--qty must be positive");
        }
        println!("Using {} ({quantity} g)", food.description);
        food.nutrients_for_quantity(quantity)
    } else {
        explicit
    };

    let meal = tracker::log::log_meal(&conn, &args.name, &nutrients, day)?;

    println!("Logged '{}' for {}", meal.name, meal.day);
    print_nutrient("calories", meal.nutrients.calories, "kcal");
    print_nutrient("protein", meal.nutrients.protein, "g");
    print_nutrient("carbs", meal.nutrients.carbs, "g");
    print_nutrient("fat", meal.nutrients.fat, "g");
    println!("  id: {}", meal.id);

    Ok(())
}

fn print_nutrient(label: &str, value: Option<f64>, unit: &str) {
    if let Some(v) = value {
        println!("  {label:<10} {v} {unit}");
    }
}

pub(crate) fn resolve_day(input: Option<&str>) -> Result<NaiveDate> {
    match input {
        Some(s) => tracker::parse_day(s),
        None => Ok(tracker::today()),
    }
}
