use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;
use std::path::Path;

/// Response from nutrition_stats.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_meals: u64,
    /// Distinct calendar days with at least one logged meal.
    pub days_tracked: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_day: Option<String>,
    pub goals_configured: u64,
    pub foods_available: u64,
    pub db_size_bytes: u64,
}

/// Compute tracker statistics.
///
/// `db_path` is used for file size calculation; pass None for in-memory
/// databases.
pub fn tracker_stats(conn: &Connection, db_path: Option<&Path>) -> Result<StatsResponse> {
    let total_meals: i64 = conn.query_row("SELECT COUNT(*) FROM meals", [], |row| row.get(0))?;
    let days_tracked: i64 =
        conn.query_row("SELECT COUNT(DISTINCT day) FROM meals", [], |row| row.get(0))?;
    let (first_day, last_day): (Option<String>, Option<String>) = conn.query_row(
        "SELECT MIN(day), MAX(day) FROM meals",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    let goals_configured: i64 =
        conn.query_row("SELECT COUNT(*) FROM goals", [], |row| row.get(0))?;
    let foods_available: i64 =
        conn.query_row("SELECT COUNT(*) FROM foods", [], |row| row.get(0))?;

    let db_size_bytes = db_path
        .and_then(|p| std::fs::metadata(p).ok())
        .map(|m| m.len())
        .unwrap_or(0);

    Ok(StatsResponse {
        total_meals: total_meals as u64,
        days_tracked: days_tracked as u64,
        first_day,
        last_day,
        goals_configured: goals_configured as u64,
        foods_available: foods_available as u64,
        db_size_bytes,
    })
}
