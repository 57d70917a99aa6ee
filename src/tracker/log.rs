//! Meal ledger — append, list, delete.
//!
//! The ledger is the source of truth for all analytics: daily totals are
//! always re-derived from it by grouping on calendar date.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::tracker::types::{Meal, Nutrients};

/// Append a meal to the ledger for the given calendar day.
pub fn log_meal(conn: &Connection, name: &str, nutrients: &Nutrients, day: NaiveDate) -> Result<Meal> {
    if name.trim().is_empty() {
        bail!("meal name must not be empty");
    }

    let id = uuid::Uuid::now_v7().to_string();
    let day = day.format("%Y-%m-%d").to_string();
    let logged_at = chrono::Utc::now().to_rfc3339();

    conn.execute(
        "INSERT INTO meals (id, name, calories, protein, carbs, fat, day, logged_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            id,
            name,
            nutrients.calories,
            nutrients.protein,
            nutrients.carbs,
            nutrients.fat,
            day,
            logged_at,
        ],
    )?;

    Ok(Meal {
        id,
        name: name.to_string(),
        nutrients: *nutrients,
        day,
        logged_at,
    })
}

/// All meals logged for one calendar day, in logging order.
pub fn meals_for_day(conn: &Connection, day: NaiveDate) -> Result<Vec<Meal>> {
    let day = day.format("%Y-%m-%d").to_string();
    let mut stmt = conn.prepare(
        "SELECT id, name, calories, protein, carbs, fat, day, logged_at
         FROM meals WHERE day = ?1 ORDER BY logged_at",
    )?;

    let meals = stmt
        .query_map(params![day], |row| {
            Ok(Meal {
                id: row.get(0)?,
                name: row.get(1)?,
                nutrients: Nutrients {
                    calories: row.get(2)?,
                    protein: row.get(3)?,
                    carbs: row.get(4)?,
                    fat: row.get(5)?,
                },
                day: row.get(6)?,
                logged_at: row.get(7)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(meals)
}

/// Delete a meal by id. Bails when the id is unknown.
pub fn delete_meal(conn: &Connection, id: &str) -> Result<()> {
    let removed = conn.execute("DELETE FROM meals WHERE id = ?1", params![id])?;
    if removed == 0 {
        bail!("meal not found: {id}");
    }
    Ok(())
}
