#![allow(dead_code)]

use chrono::NaiveDate;
use nosh::db;
use nosh::tracker::types::{Direction, MacroKey, Nutrients};
use nosh::tracker::{goals, log};
use rusqlite::Connection;

/// Open a fresh in-memory database with schema and migrations applied.
pub fn test_db() -> Connection {
    db::open_memory_database().unwrap()
}

/// Parse a `YYYY-MM-DD` literal.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Log a meal with calories and protein on a given day. Returns the meal id.
pub fn log_on(conn: &Connection, day: &str, name: &str, calories: f64, protein: f64) -> String {
    let nutrients = Nutrients {
        calories: Some(calories),
        protein: Some(protein),
        carbs: None,
        fat: None,
    };
    log::log_meal(conn, name, &nutrients, date(day)).unwrap().id
}

/// Configure a goal directly via the tracker.
pub fn set_goal(conn: &Connection, key: MacroKey, target: f64, direction: Direction, tolerance: f64) {
    goals::set_goal(conn, key, target, direction, tolerance).unwrap();
}
