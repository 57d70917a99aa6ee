//! CLI `reset` command — delete all logged data after user confirmation.

use anyhow::{bail, Result};
use std::io::Write;

use crate::config::NoshConfig;

/// Delete all meals and goals after user confirmation. The imported food
/// database is kept — it is reference data, re-importable at any time.
pub fn reset(config: &NoshConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    println!("WARNING: This will permanently delete ALL logged meals and goals.");
    println!("The imported food database is kept.");
    println!("Database: {}", db_path.display());
    print!("\nType YES to confirm: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if input.trim() != "YES" {
        bail!("reset cancelled");
    }

    let conn = crate::db::open_database(&db_path)?;

    conn.execute_batch(
        "DELETE FROM meals;
         DELETE FROM goals;",
    )?;

    println!("All meals and goals deleted. Tracker reset complete.");
    Ok(())
}
