//! Food database import from a FoodData Central JSON dump.
//!
//! Accepts the USDA distribution format (a top-level object with
//! `FoundationFoods`, `SRLegacyFoods`, or `BrandedFoods` arrays) as well
//! as a bare array of food records. Nutrients are keyed by FDC nutrient
//! id and normalized to the per-100 g basis the `foods` table uses.

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use serde::Deserialize;

use crate::db::migrations;

// FDC nutrient ids for the tracked macros.
const NUTRIENT_ENERGY_KCAL: u32 = 1008;
const NUTRIENT_ENERGY_ATWATER_GENERAL: u32 = 2047;
const NUTRIENT_ENERGY_ATWATER_SPECIFIC: u32 = 2048;
const NUTRIENT_PROTEIN: u32 = 1003;
const NUTRIENT_FAT: u32 = 1004;
const NUTRIENT_CARBS: u32 = 1005;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FdcFile {
    Dump(FdcDump),
    List(Vec<FdcFood>),
}

#[derive(Debug, Deserialize)]
struct FdcDump {
    #[serde(rename = "FoundationFoods", default)]
    foundation_foods: Vec<FdcFood>,
    #[serde(rename = "SRLegacyFoods", default)]
    sr_legacy_foods: Vec<FdcFood>,
    #[serde(rename = "BrandedFoods", default)]
    branded_foods: Vec<FdcFood>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FdcFood {
    description: String,
    #[serde(default)]
    brand_owner: Option<String>,
    #[serde(default)]
    gtin_upc: Option<String>,
    #[serde(default)]
    food_nutrients: Vec<FdcFoodNutrient>,
    #[serde(default)]
    serving_size: Option<f64>,
    #[serde(default)]
    serving_size_unit: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FdcFoodNutrient {
    nutrient: FdcNutrient,
    #[serde(default)]
    amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct FdcNutrient {
    id: u32,
}

impl FdcFood {
    fn nutrient(&self, id: u32) -> Option<f64> {
        self.food_nutrients
            .iter()
            .find(|n| n.nutrient.id == id)
            .and_then(|n| n.amount)
    }

    /// Energy in kcal, preferring the directly-measured value over the
    /// Atwater calculations present in newer dumps.
    fn energy_kcal(&self) -> Option<f64> {
        self.nutrient(NUTRIENT_ENERGY_KCAL)
            .or_else(|| self.nutrient(NUTRIENT_ENERGY_ATWATER_SPECIFIC))
            .or_else(|| self.nutrient(NUTRIENT_ENERGY_ATWATER_GENERAL))
    }
}

/// Counts reported after an import.
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub imported: u64,
    pub skipped: u64,
}

/// Parse a FoodData Central JSON string and load it into the `foods` table.
///
/// Runs inside one transaction. Records without a description or without
/// any of the four tracked nutrients are skipped and counted. `source` is
/// recorded in `schema_meta` for `nosh doctor`.
pub fn import_foods(conn: &mut Connection, json: &str, source: &str) -> Result<ImportSummary> {
    let file: FdcFile = serde_json::from_str(json).context("failed to parse food data JSON")?;

    let foods = match file {
        FdcFile::List(foods) => foods,
        FdcFile::Dump(dump) => {
            let mut foods = dump.foundation_foods;
            foods.extend(dump.sr_legacy_foods);
            foods.extend(dump.branded_foods);
            foods
        }
    };

    let mut summary = ImportSummary::default();
    let tx = conn.transaction()?;

    for food in &foods {
        let energy = food.energy_kcal();
        let protein = food.nutrient(NUTRIENT_PROTEIN);
        let carbs = food.nutrient(NUTRIENT_CARBS);
        let fat = food.nutrient(NUTRIENT_FAT);

        if food.description.trim().is_empty()
            || (energy.is_none() && protein.is_none() && carbs.is_none() && fat.is_none())
        {
            summary.skipped += 1;
            continue;
        }

        insert_food_tx(
            &tx,
            &food.description,
            food.brand_owner.as_deref(),
            food.gtin_upc.as_deref(),
            energy.unwrap_or(0.0),
            protein.unwrap_or(0.0),
            carbs.unwrap_or(0.0),
            fat.unwrap_or(0.0),
            food.serving_size,
            food.serving_size_unit.clone(),
        )?;
        summary.imported += 1;
    }

    migrations::set_food_source(&tx, source)?;
    tx.commit()?;

    tracing::info!(
        imported = summary.imported,
        skipped = summary.skipped,
        source,
        "food import complete"
    );
    Ok(summary)
}

/// Insert one food row and sync the FTS5 index. Returns the new row id.
#[allow(clippy::too_many_arguments)]
pub fn insert_food(
    conn: &Connection,
    description: &str,
    brand: Option<&str>,
    barcode: Option<&str>,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    serving_size: Option<f64>,
    serving_unit: Option<String>,
) -> Result<i64> {
    insert_food_tx(
        conn,
        description,
        brand,
        barcode,
        calories,
        protein,
        carbs,
        fat,
        serving_size,
        serving_unit,
    )
}

#[allow(clippy::too_many_arguments)]
fn insert_food_tx(
    conn: &Connection,
    description: &str,
    brand: Option<&str>,
    barcode: Option<&str>,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    serving_size: Option<f64>,
    serving_unit: Option<String>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO foods (description, brand, barcode, calories, protein, carbs, fat, serving_size, serving_unit)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![description, brand, barcode, calories, protein, carbs, fat, serving_size, serving_unit],
    )?;
    let rowid = conn.last_insert_rowid();

    // Sync the FTS5 index with the same rowid
    conn.execute(
        "INSERT INTO foods_fts (rowid, description, brand) VALUES (?1, ?2, ?3)",
        params![rowid, description, brand],
    )?;

    Ok(rowid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::food::search;

    const SAMPLE: &str = r#"{
        "FoundationFoods": [
            {
                "description": "Apple, raw, with skin",
                "foodNutrients": [
                    {"nutrient": {"id": 1008}, "amount": 52.0},
                    {"nutrient": {"id": 1003}, "amount": 0.3},
                    {"nutrient": {"id": 1005}, "amount": 13.8},
                    {"nutrient": {"id": 1004}, "amount": 0.2}
                ]
            },
            {
                "description": "Mystery item",
                "foodNutrients": []
            }
        ],
        "BrandedFoods": [
            {
                "description": "Peanut butter, smooth",
                "brandOwner": "NuttyCo",
                "gtinUpc": "0123456789012",
                "servingSize": 32.0,
                "servingSizeUnit": "g",
                "foodNutrients": [
                    {"nutrient": {"id": 2048}, "amount": 588.0},
                    {"nutrient": {"id": 1003}, "amount": 25.1}
                ]
            }
        ]
    }"#;

    #[test]
    fn imports_dump_format_and_skips_empty_records() {
        let mut conn = db::open_memory_database().unwrap();
        let summary = import_foods(&mut conn, SAMPLE, "fdc-test").unwrap();
        assert_eq!(summary.imported, 2);
        assert_eq!(summary.skipped, 1);

        let apple = &search::search_foods(&conn, "apple", 10).unwrap()[0];
        assert_eq!(apple.calories, 52.0);
        assert_eq!(apple.carbs, 13.8);

        // Atwater energy fallback and branded metadata
        let pb = search::food_by_barcode(&conn, "0123456789012").unwrap().unwrap();
        assert_eq!(pb.calories, 588.0);
        assert_eq!(pb.brand.as_deref(), Some("NuttyCo"));
        assert_eq!(pb.serving_size, Some(32.0));

        assert_eq!(
            migrations::get_food_source(&conn).unwrap().as_deref(),
            Some("fdc-test")
        );
    }

    #[test]
    fn imports_bare_array_format() {
        let mut conn = db::open_memory_database().unwrap();
        let json = r#"[
            {
                "description": "Oats, rolled, dry",
                "foodNutrients": [{"nutrient": {"id": 1008}, "amount": 379.0}]
            }
        ]"#;
        let summary = import_foods(&mut conn, json, "custom").unwrap();
        assert_eq!(summary.imported, 1);
        assert_eq!(summary.skipped, 0);

        let oats = &search::search_foods(&conn, "oats", 10).unwrap()[0];
        assert_eq!(oats.calories, 379.0);
        assert_eq!(oats.protein, 0.0);
    }

    #[test]
    fn malformed_json_fails_with_context() {
        let mut conn = db::open_memory_database().unwrap();
        let err = import_foods(&mut conn, "{not json", "bad").unwrap_err();
        assert!(err.to_string().contains("parse food data"));
    }
}
