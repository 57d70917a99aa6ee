pub mod error;
pub mod goals;
pub mod log;
pub mod report;
pub mod stats;
pub mod streak;
pub mod totals;
pub mod types;
pub mod weekly;
pub mod zone;

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` day string.
pub fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{s}', expected YYYY-MM-DD"))
}

/// Today's local calendar date — the default reference date everywhere.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
