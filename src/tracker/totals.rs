//! Daily aggregation over the meal ledger.
//!
//! Totals are derived on every query by grouping `meals` on calendar date —
//! never persisted, never cached. A date with no logged meals is absent
//! from the series entirely.

use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::collections::BTreeMap;

use crate::tracker::types::{round1, DailyTotal};

/// The full ascending date-ordered series of days with at least one logged
/// meal, with by-date lookup. Built once per report and walked by the
/// streak and weekly-average calculators.
#[derive(Debug, Default)]
pub struct DailyHistory {
    by_date: BTreeMap<NaiveDate, DailyTotal>,
}

impl DailyHistory {
    /// Build a history from pre-computed totals. Used by tests and callers
    /// that already hold the series.
    pub fn from_totals(totals: Vec<DailyTotal>) -> Self {
        Self {
            by_date: totals.into_iter().map(|t| (t.date, t)).collect(),
        }
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyTotal> {
        self.by_date.get(&date)
    }

    /// Ascending date-ordered iteration, restartable.
    pub fn iter(&self) -> impl Iterator<Item = &DailyTotal> {
        self.by_date.values()
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

/// Sum one day's logged meals. Returns `None` when nothing was logged that
/// day — absence is "no data", not a zero total.
pub fn daily_total(conn: &Connection, date: NaiveDate) -> Result<Option<DailyTotal>> {
    let day = date.format("%Y-%m-%d").to_string();
    let (calories, protein, carbs, fat, meal_count): (f64, f64, f64, f64, u32) = conn.query_row(
        "SELECT COALESCE(SUM(COALESCE(calories, 0)), 0),
                COALESCE(SUM(COALESCE(protein, 0)), 0),
                COALESCE(SUM(COALESCE(carbs, 0)), 0),
                COALESCE(SUM(COALESCE(fat, 0)), 0),
                COUNT(*)
         FROM meals WHERE day = ?1",
        params![day],
        |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
            ))
        },
    )?;

    if meal_count == 0 {
        return Ok(None);
    }

    Ok(Some(DailyTotal {
        date,
        calories: round1(calories),
        protein: round1(protein),
        carbs: round1(carbs),
        fat: round1(fat),
        meal_count,
    }))
}

/// Group the entire ledger into per-day totals, ascending by date.
pub fn daily_history(conn: &Connection) -> Result<DailyHistory> {
    let mut stmt = conn.prepare(
        "SELECT day,
                SUM(COALESCE(calories, 0)),
                SUM(COALESCE(protein, 0)),
                SUM(COALESCE(carbs, 0)),
                SUM(COALESCE(fat, 0)),
                COUNT(*)
         FROM meals GROUP BY day ORDER BY day",
    )?;

    let rows: Vec<(String, f64, f64, f64, f64, u32)> = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut totals = Vec::with_capacity(rows.len());
    for (day, calories, protein, carbs, fat, meal_count) in rows {
        let date = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("malformed day '{day}' in meals table: {e}"))?;
        totals.push(DailyTotal {
            date,
            calories: round1(calories),
            protein: round1(protein),
            carbs: round1(carbs),
            fat: round1(fat),
            meal_count,
        });
    }

    Ok(DailyHistory::from_totals(totals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::tracker::log;
    use crate::tracker::types::Nutrients;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn nutrients(calories: f64, protein: f64) -> Nutrients {
        Nutrients {
            calories: Some(calories),
            protein: Some(protein),
            carbs: None,
            fat: None,
        }
    }

    #[test]
    fn absent_day_yields_none() {
        let conn = db::open_memory_database().unwrap();
        assert!(daily_total(&conn, date("2025-06-01")).unwrap().is_none());
        assert!(daily_history(&conn).unwrap().is_empty());
    }

    #[test]
    fn sums_meals_for_a_day() {
        let conn = db::open_memory_database().unwrap();
        log::log_meal(&conn, "oatmeal", &nutrients(320.0, 12.5), date("2025-06-01")).unwrap();
        log::log_meal(&conn, "chicken salad", &nutrients(540.5, 42.0), date("2025-06-01")).unwrap();
        log::log_meal(&conn, "toast", &nutrients(210.0, 6.0), date("2025-06-02")).unwrap();

        let total = daily_total(&conn, date("2025-06-01")).unwrap().unwrap();
        assert_eq!(total.calories, 860.5);
        assert_eq!(total.protein, 54.5);
        assert_eq!(total.meal_count, 2);
        // unset nutrients aggregate as 0
        assert_eq!(total.carbs, 0.0);
        assert_eq!(total.fat, 0.0);
    }

    #[test]
    fn history_is_ascending_and_skips_empty_days() {
        let conn = db::open_memory_database().unwrap();
        log::log_meal(&conn, "later", &nutrients(100.0, 1.0), date("2025-06-05")).unwrap();
        log::log_meal(&conn, "earlier", &nutrients(200.0, 2.0), date("2025-06-01")).unwrap();

        let history = daily_history(&conn).unwrap();
        assert_eq!(history.len(), 2);

        let dates: Vec<NaiveDate> = history.iter().map(|t| t.date).collect();
        assert_eq!(dates, vec![date("2025-06-01"), date("2025-06-05")]);
        // the gap days are absent, not zero-filled
        assert!(history.get(date("2025-06-03")).is_none());
    }

    #[test]
    fn null_nutrients_aggregate_as_zero() {
        let conn = db::open_memory_database().unwrap();
        log::log_meal(
            &conn,
            "black coffee",
            &Nutrients { calories: Some(5.0), ..Nutrients::default() },
            date("2025-06-01"),
        )
        .unwrap();

        let total = daily_total(&conn, date("2025-06-01")).unwrap().unwrap();
        assert_eq!(total.calories, 5.0);
        assert_eq!(total.protein, 0.0);
        assert_eq!(total.meal_count, 1);
    }
}
