//! Core tracker type definitions.
//!
//! Defines [`MacroKey`] (the four tracked nutrients), [`Direction`] and
//! [`Zone`] (goal semantics), [`Goal`], [`Meal`] (a ledger row), and
//! [`DailyTotal`] (one day's summed intake).

#![allow(dead_code)]

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The four tracked macro keys. Order here is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroKey {
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl MacroKey {
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Carbs, Self::Fat];

    /// SQL-compatible string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
        }
    }

    /// Display unit for this macro.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Protein | Self::Carbs | Self::Fat => "g",
        }
    }
}

impl std::fmt::Display for MacroKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MacroKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calories" => Ok(Self::Calories),
            "protein" => Ok(Self::Protein),
            "carbs" => Ok(Self::Carbs),
            "fat" => Ok(Self::Fat),
            _ => Err(format!("unknown macro key: {s}")),
        }
    }
}

/// Which side of the target counts as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Success means staying at or below target (e.g. calories).
    Under,
    /// Success means staying at or above target (e.g. protein).
    Over,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Under => "under",
            Self::Over => "over",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "under" => Ok(Self::Under),
            "over" => Ok(Self::Over),
            _ => Err(format!("unknown direction: {s}")),
        }
    }
}

/// Zone classification for one macro on one day.
///
/// `Over` only occurs for `Direction::Under` goals, `Under` only for
/// `Direction::Over` goals. With a zero tolerance band `Near` is unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Met,
    Near,
    Over,
    Under,
}

impl Zone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Met => "met",
            Self::Near => "near",
            Self::Over => "over",
            Self::Under => "under",
        }
    }

    /// Whether this zone counts toward a streak (inside the grace band).
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Met | Self::Near)
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured goal, matching the `goals` table schema. One per macro key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub key: MacroKey,
    /// Positive target value (kcal or grams).
    pub target: f64,
    pub direction: Direction,
    /// Percent grace band beyond the target on the wrong side, 0–100.
    pub tolerance: f64,
    /// ISO 8601 timestamp of the last configuration change.
    pub updated_at: String,
}

/// Nutrient values for a single meal. `None` means unset — aggregated as 0.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Nutrients {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

impl Nutrients {
    /// True when no nutrient value is set at all.
    pub fn is_empty(&self) -> bool {
        self.calories.is_none() && self.protein.is_none() && self.carbs.is_none() && self.fat.is_none()
    }
}

/// A meal ledger row, matching the `meals` table schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    /// UUID v7 (time-sortable) primary key.
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub nutrients: Nutrients,
    /// Local calendar date this meal counts toward, `YYYY-MM-DD`.
    pub day: String,
    /// ISO 8601 timestamp of when the entry was logged.
    pub logged_at: String,
}

/// One day's summed nutrient totals. Derived on every query by grouping the
/// meal ledger on calendar date — never persisted.
///
/// A date with no logged meals has no `DailyTotal` at all; absence means
/// "no data", which is distinct from "zero logged".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub meal_count: u32,
}

impl DailyTotal {
    /// The summed value for one macro key.
    pub fn value(&self, key: MacroKey) -> f64 {
        match key {
            MacroKey::Calories => self.calories,
            MacroKey::Protein => self.protein,
            MacroKey::Carbs => self.carbs,
            MacroKey::Fat => self.fat,
        }
    }
}

/// Round to one decimal place, the precision of stored totals.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
