//! Trailing 7-day average over the daily-totals series.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::tracker::totals::DailyHistory;
use crate::tracker::types::round1;

/// Averages over the 7 calendar dates ending at the reference date,
/// computed only over days that actually have data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyAverage {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// How many of the 7 window days had at least one logged meal.
    #[serde(rename = "daysTracked")]
    pub days_tracked: u32,
}

/// Average the trailing window `reference - 6 ..= reference`.
///
/// A user who only logged 3 of the last 7 days gets their 3-day average,
/// not a diluted 7-day one. An empty window yields all zeros.
pub fn weekly_average(history: &DailyHistory, reference: NaiveDate) -> WeeklyAverage {
    let mut calories = 0.0;
    let mut protein = 0.0;
    let mut carbs = 0.0;
    let mut fat = 0.0;
    let mut days_tracked = 0u32;

    for offset in 0..7 {
        let Some(date) = reference.checked_sub_days(Days::new(offset)) else {
            break;
        };
        if let Some(total) = history.get(date) {
            calories += total.calories;
            protein += total.protein;
            carbs += total.carbs;
            fat += total.fat;
            days_tracked += 1;
        }
    }

    if days_tracked == 0 {
        return WeeklyAverage { calories: 0.0, protein: 0.0, carbs: 0.0, fat: 0.0, days_tracked: 0 };
    }

    let n = f64::from(days_tracked);
    WeeklyAverage {
        calories: round1(calories / n),
        protein: round1(protein / n),
        carbs: round1(carbs / n),
        fat: round1(fat / n),
        days_tracked,
    }
}
