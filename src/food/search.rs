//! Food lookup — FTS5 keyword search, barcode, and id fetch.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::food::Food;

const FOOD_COLUMNS: &str =
    "id, description, brand, barcode, calories, protein, carbs, fat, serving_size, serving_unit";

fn food_from_row(row: &Row<'_>) -> rusqlite::Result<Food> {
    Ok(Food {
        id: row.get(0)?,
        description: row.get(1)?,
        brand: row.get(2)?,
        barcode: row.get(3)?,
        calories: row.get(4)?,
        protein: row.get(5)?,
        carbs: row.get(6)?,
        fat: row.get(7)?,
        serving_size: row.get(8)?,
        serving_unit: row.get(9)?,
    })
}

/// Keyword search over food descriptions and brands, BM25-ranked.
pub fn search_foods(conn: &Connection, query: &str, limit: usize) -> Result<Vec<Food>> {
    let escaped = escape_fts_query(query);
    if escaped.is_empty() {
        return Ok(Vec::new());
    }

    let mut stmt = conn.prepare(
        "SELECT f.id, f.description, f.brand, f.barcode, f.calories, f.protein, f.carbs, f.fat,
                f.serving_size, f.serving_unit
         FROM foods_fts
         JOIN foods f ON f.id = foods_fts.rowid
         WHERE foods_fts MATCH ?1 ORDER BY rank LIMIT ?2",
    )?;
    let foods = stmt
        .query_map(params![escaped, limit as i64], food_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(foods)
}

/// Exact barcode (GTIN/UPC) lookup.
pub fn food_by_barcode(conn: &Connection, barcode: &str) -> Result<Option<Food>> {
    let sql = format!("SELECT {FOOD_COLUMNS} FROM foods WHERE barcode = ?1 LIMIT 1");
    let food = conn
        .query_row(&sql, params![barcode], food_from_row)
        .optional()?;
    Ok(food)
}

/// Fetch one food by its id.
pub fn food_by_id(conn: &Connection, id: i64) -> Result<Option<Food>> {
    let sql = format!("SELECT {FOOD_COLUMNS} FROM foods WHERE id = ?1");
    let food = conn.query_row(&sql, params![id], food_from_row).optional()?;
    Ok(food)
}

/// Escape a user query for FTS5 MATCH syntax.
///
/// Wraps each whitespace-delimited word in double quotes and joins with
/// spaces so FTS5 treats them as individual terms (implicit AND). Strips
/// empty tokens.
fn escape_fts_query(query: &str) -> String {
    query
        .split_whitespace()
        .map(|word| {
            let clean = word.replace('"', "");
            format!("\"{clean}\"")
        })
        .filter(|quoted| quoted.len() > 2)
        .collect::<Vec<_>>()
        .join(" ")
}
