use anyhow::Result;

use crate::config::NoshConfig;
use crate::food;

/// Run a keyword search against the food database from the terminal.
pub fn search(config: &NoshConfig, query: &str, limit: Option<usize>) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let limit = limit.unwrap_or(config.food.search_limit);

    let results = food::search::search_foods(&conn, query, limit)?;

    if results.is_empty() {
        println!("No results found.");
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM foods", [], |r| r.get(0))?;
        if count == 0 {
            println!("The food database is empty — run `nosh db download` first.");
        }
        return Ok(());
    }

    println!("Found {} result(s) — nutrients per 100 g\n", results.len());
    for (i, food) in results.iter().enumerate() {
        let brand = food
            .brand
            .as_deref()
            .map(|b| format!(" ({b})"))
            .unwrap_or_default();
        println!("  {}. {}{}  [id {}]", i + 1, food.description, brand, food.id);
        println!(
            "     {} kcal, {} g protein, {} g carbs, {} g fat",
            food.calories, food.protein, food.carbs, food.fat
        );
        if let Some(code) = &food.barcode {
            println!("     barcode: {code}");
        }
        println!();
    }

    Ok(())
}

/// Exact barcode lookup from the terminal.
pub fn barcode(config: &NoshConfig, code: &str) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;

    match food::search::food_by_barcode(&conn, code)? {
        Some(food) => {
            let brand = food
                .brand
                .as_deref()
                .map(|b| format!(" ({b})"))
                .unwrap_or_default();
            println!("{}{}  [id {}]", food.description, brand, food.id);
            println!(
                "  {} kcal, {} g protein, {} g carbs, {} g fat (per 100 g)",
                food.calories, food.protein, food.carbs, food.fat
            );
        }
        None => println!("No food found for barcode {code}."),
    }

    Ok(())
}
