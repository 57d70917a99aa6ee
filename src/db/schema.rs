//! SQL DDL for all nosh tables.
//!
//! Defines the `meals`, `goals`, `foods`, `foods_fts` (FTS5), and
//! `schema_meta` tables. All DDL uses `IF NOT EXISTS` for idempotent
//! initialization.

use rusqlite::Connection;

/// All schema DDL statements for nosh's core tables.
const SCHEMA_SQL: &str = r#"
-- Meal ledger: append-only apart from explicit deletes
CREATE TABLE IF NOT EXISTS meals (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    calories REAL CHECK(calories IS NULL OR calories >= 0),
    protein REAL CHECK(protein IS NULL OR protein >= 0),
    carbs REAL CHECK(carbs IS NULL OR carbs >= 0),
    fat REAL CHECK(fat IS NULL OR fat >= 0),
    day TEXT NOT NULL,
    logged_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_meals_day ON meals(day);

-- Per-macro goals, one row per key
CREATE TABLE IF NOT EXISTS goals (
    key TEXT PRIMARY KEY CHECK(key IN ('calories','protein','carbs','fat')),
    target REAL NOT NULL CHECK(target > 0),
    direction TEXT NOT NULL CHECK(direction IN ('under','over')),
    tolerance REAL NOT NULL DEFAULT 0 CHECK(tolerance >= 0 AND tolerance <= 100),
    updated_at TEXT NOT NULL
);

-- Bulk food reference data, nutrients per 100 g
CREATE TABLE IF NOT EXISTS foods (
    id INTEGER PRIMARY KEY,
    description TEXT NOT NULL,
    brand TEXT,
    barcode TEXT,
    calories REAL NOT NULL DEFAULT 0,
    protein REAL NOT NULL DEFAULT 0,
    carbs REAL NOT NULL DEFAULT 0,
    fat REAL NOT NULL DEFAULT 0,
    serving_size REAL,
    serving_unit TEXT
);

CREATE INDEX IF NOT EXISTS idx_foods_barcode ON foods(barcode);

-- Full-text search (BM25) over food descriptions and brands
CREATE VIRTUAL TABLE IF NOT EXISTS foods_fts USING fts5(
    description,
    brand,
    content='foods',
    content_rowid='id'
);

-- Schema metadata
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    // Set initial schema version if not already present
    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}
