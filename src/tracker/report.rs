//! Progress report assembly — today's zones, streaks, and weekly average.
//!
//! The report is a pure function of (ledger contents, goal configuration,
//! reference date): recomputed fully on every call, no cached state. Field
//! names and nesting are a compatibility contract with existing agent
//! integrations and must not change.

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;

use crate::tracker::error::TrackerError;
use crate::tracker::totals::{daily_history, DailyHistory};
use crate::tracker::types::{round1, Direction, Goal, Zone};
use crate::tracker::weekly::{weekly_average, WeeklyAverage};
use crate::tracker::zone::classify;
use crate::tracker::{goals, streak};

/// Saturating percent marker for "target is zero but something was logged".
const PERCENT_OVERFLOW: i64 = 999;

/// The full progress report for one reference date.
#[derive(Debug, Serialize)]
pub struct ProgressReport {
    /// Reference date, `YYYY-MM-DD`.
    pub date: String,
    /// Meals logged on the reference date.
    #[serde(rename = "mealCount")]
    pub meal_count: u32,
    /// Per-macro progress for the reference date, keyed by macro name.
    pub today: BTreeMap<String, MacroProgress>,
    pub streaks: StreakSummary,
    #[serde(rename = "weeklyAvg")]
    pub weekly_avg: WeeklyAverage,
}

/// One macro's progress for the reference date.
#[derive(Debug, Serialize)]
pub struct MacroProgress {
    pub actual: f64,
    pub goal: f64,
    /// `target - actual`, signed — overage shows as negative remaining.
    pub remaining: f64,
    /// Percent of target, rounded; saturates at 999 when target is zero.
    pub percent: i64,
    pub tolerance: f64,
    pub band: f64,
    pub zone: Zone,
}

/// Per-goal streaks plus the combined all-goals streak.
#[derive(Debug, Serialize)]
pub struct StreakSummary {
    #[serde(flatten)]
    pub per_goal: BTreeMap<String, GoalStreak>,
    #[serde(rename = "allGoals")]
    pub all_goals: CombinedStreak,
}

#[derive(Debug, Serialize)]
pub struct GoalStreak {
    pub current: u32,
    pub best: u32,
    pub direction: Direction,
}

/// A day counts here only when every configured goal is met or near.
#[derive(Debug, Serialize)]
pub struct CombinedStreak {
    pub current: u32,
    pub best: u32,
}

fn percent_of(actual: f64, target: f64) -> i64 {
    if target == 0.0 {
        if actual == 0.0 {
            100
        } else {
            PERCENT_OVERFLOW
        }
    } else {
        (actual / target * 100.0).round() as i64
    }
}

/// Build the full report for `reference`. Fails with
/// [`TrackerError::NoGoalsConfigured`] when no goals are set.
pub fn build_report(conn: &Connection, reference: NaiveDate) -> Result<ProgressReport> {
    let goals = goals::goals(conn)?;
    if goals.is_empty() {
        return Err(TrackerError::NoGoalsConfigured.into());
    }

    let history = daily_history(conn)?;
    Ok(assemble(&goals, &history, reference))
}

/// Assemble a report from an already-loaded goal set and history.
///
/// Split from [`build_report`] so the engine is testable without a
/// database; callers must have checked that `goals` is non-empty.
pub fn assemble(goals: &[Goal], history: &DailyHistory, reference: NaiveDate) -> ProgressReport {
    let today_total = history.get(reference);
    let meal_count = today_total.map_or(0, |t| t.meal_count);

    let mut today = BTreeMap::new();
    let mut per_goal = BTreeMap::new();

    for goal in goals {
        // absent day reads as actual 0 for today's display; the streak
        // walkers treat the same absence as non-qualifying instead
        let actual = today_total.map_or(0.0, |t| t.value(goal.key));
        let classification = classify(actual, goal.target, goal.direction, goal.tolerance);

        today.insert(
            goal.key.as_str().to_string(),
            MacroProgress {
                actual,
                goal: goal.target,
                remaining: round1(goal.target - actual),
                percent: percent_of(actual, goal.target),
                tolerance: goal.tolerance,
                band: classification.band,
                zone: classification.zone,
            },
        );

        per_goal.insert(
            goal.key.as_str().to_string(),
            GoalStreak {
                current: streak::current_streak(history, goal, reference),
                best: streak::best_streak(history, goal),
                direction: goal.direction,
            },
        );
    }

    let all_goals = CombinedStreak {
        current: streak::current_all_goals_streak(history, goals, reference),
        best: streak::best_all_goals_streak(history, goals),
    };

    ProgressReport {
        date: reference.format("%Y-%m-%d").to_string(),
        meal_count,
        today,
        streaks: StreakSummary { per_goal, all_goals },
        weekly_avg: weekly_average(history, reference),
    }
}
