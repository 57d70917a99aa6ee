pub mod migrations;
pub mod schema;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open (or create) the nosh database at the given path, with schema
/// initialized and migrations applied.
pub fn open_database(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let conn = Connection::open(path)
        .with_context(|| format!("failed to open database at {}", path.display()))?;

    // Enable WAL mode for better concurrent read performance
    conn.pragma_update(None, "journal_mode", "WAL")?;
    // Enable foreign keys
    conn.pragma_update(None, "foreign_keys", "ON")?;

    schema::init_schema(&conn).context("failed to initialize schema")?;
    migrations::run_migrations(&conn).context("failed to run migrations")?;

    tracing::info!(path = %path.display(), "database initialized");
    Ok(conn)
}

/// Open an in-memory database for testing.
pub fn open_memory_database() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    schema::init_schema(&conn).context("failed to initialize schema")?;
    migrations::run_migrations(&conn).context("failed to run migrations")?;
    Ok(conn)
}

/// Diagnostics for `nosh doctor`.
#[derive(Debug)]
pub struct HealthReport {
    pub schema_version: u32,
    pub meal_count: u64,
    pub goal_count: u64,
    pub food_count: u64,
    pub food_source: Option<String>,
    pub integrity_ok: bool,
    pub integrity_details: String,
}

/// Run integrity checks and collect row counts for the health report.
pub fn check_database_health(conn: &Connection) -> Result<HealthReport> {
    let schema_version = migrations::get_schema_version(conn)?;

    let meal_count: i64 = conn.query_row("SELECT COUNT(*) FROM meals", [], |r| r.get(0))?;
    let goal_count: i64 = conn.query_row("SELECT COUNT(*) FROM goals", [], |r| r.get(0))?;
    let food_count: i64 = conn.query_row("SELECT COUNT(*) FROM foods", [], |r| r.get(0))?;
    let food_source = migrations::get_food_source(conn)?;

    let integrity_details: String =
        conn.query_row("PRAGMA integrity_check", [], |r| r.get(0))?;
    let integrity_ok = integrity_details == "ok";

    Ok(HealthReport {
        schema_version,
        meal_count: meal_count as u64,
        goal_count: goal_count as u64,
        food_count: food_count as u64,
        food_source,
        integrity_ok,
        integrity_details,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_database_is_healthy() {
        let conn = open_memory_database().unwrap();
        let report = check_database_health(&conn).unwrap();
        assert!(report.integrity_ok);
        assert_eq!(report.schema_version, migrations::CURRENT_SCHEMA_VERSION);
        assert_eq!(report.meal_count, 0);
        assert_eq!(report.goal_count, 0);
        assert_eq!(report.food_count, 0);
        assert!(report.food_source.is_none());
    }
}
