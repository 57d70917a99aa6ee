//! CLI `meals` command — list or delete logged meals.

use anyhow::Result;

use crate::config::NoshConfig;
use crate::tracker;

/// List meals logged for a day, with the day's running totals.
pub fn list(config: &NoshConfig, date: Option<&str>) -> Result<()> {
    let day = super::log::resolve_day(date)?;
    let conn = crate::db::open_database(config.resolved_db_path())?;

    let meals = tracker::log::meals_for_day(&conn, day)?;
    if meals.is_empty() {
        println!("No meals logged for {day}.");
        return Ok(());
    }

    println!("Meals for {day}:");
    for meal in &meals {
        println!(
            "  {}  {:<24} {:>7} kcal  {:>5} g protein",
            meal.id,
            meal.name,
            meal.nutrients.calories.unwrap_or(0.0),
            meal.nutrients.protein.unwrap_or(0.0),
        );
    }

    if let Some(total) = tracker::totals::daily_total(&conn, day)? {
        println!();
        println!(
            "Total: {} kcal, {} g protein, {} g carbs, {} g fat ({} meals)",
            total.calories, total.protein, total.carbs, total.fat, total.meal_count
        );
    }

    Ok(())
}

/// Delete a meal by id.
pub fn remove(config: &NoshConfig, id: &str) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    tracker::log::delete_meal(&conn, id)?;
    println!("Deleted meal {id}.");
    Ok(())
}
