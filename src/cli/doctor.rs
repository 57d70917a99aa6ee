//! CLI `doctor` command — run database diagnostics and print a health report.

use anyhow::{Context, Result};

use crate::config::NoshConfig;
use crate::db;

/// Run database diagnostics and print a health report.
pub fn doctor(config: &NoshConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    if !db_path.exists() {
        println!("Database: not found at {}", db_path.display());
        println!("Run `nosh log` or `nosh serve` to initialize.");
        return Ok(());
    }

    let file_size = std::fs::metadata(&db_path)
        .map(|m| m.len())
        .unwrap_or(0);

    let conn = db::open_database(&db_path)
        .context("failed to open database (may be corrupt)")?;

    let report = db::check_database_health(&conn)
        .context("failed to run health check")?;

    println!("nosh Health Report");
    println!("==================");
    println!();
    println!("Database:          {}", db_path.display());
    println!("File size:         {}", format_bytes(file_size));
    println!("Schema version:    {}", report.schema_version);
    println!();
    println!("Row counts:");
    println!("  Meals:           {}", report.meal_count);
    println!("  Goals:           {}", report.goal_count);
    println!("  Foods:           {}", report.food_count);
    println!();
    println!(
        "Food data source:  {}",
        report.food_source.as_deref().unwrap_or("(not imported)")
    );
    if report.food_count == 0 {
        println!("  Run `nosh db download` and `nosh db import` to load food data.");
    }
    println!();
    if report.integrity_ok {
        println!("Integrity check:   PASSED");
    } else {
        println!("Integrity check:   FAILED ({})", report.integrity_details);
        println!();
        println!("Recovery steps:");
        println!("  1. Restore from a backup: cp backup.db ~/.nosh/nosh.db");
        println!("  2. Or reset and re-import: nosh reset && nosh db import <file>");
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
