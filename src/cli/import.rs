use anyhow::{Context, Result};
use std::path::Path;

use crate::config::NoshConfig;
use crate::food;

/// Import a FoodData Central JSON dump into the food database.
pub fn import(config: &NoshConfig, file: &Path) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read import file: {}", file.display()))?;

    let mut conn = crate::db::open_database(config.resolved_db_path())?;

    let source = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string());

    println!("Importing foods from {}...", file.display());
    let summary = food::import::import_foods(&mut conn, &json, &source)?;

    println!("Import complete:");
    println!("  Foods imported: {}", summary.imported);
    if summary.skipped > 0 {
        println!("  Foods skipped:  {} (no usable nutrient data)", summary.skipped);
    }

    Ok(())
}
