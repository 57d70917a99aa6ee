//! Streak computation over the daily-totals series.
//!
//! A day qualifies for a goal when a total exists for it (at least one meal
//! logged) and the classifier places it in the `met` or `near` zone. An
//! absent day never qualifies, even when a zero actual would have counted
//! as met — a gap in logging breaks a streak exactly like a miss.

use chrono::NaiveDate;

use crate::tracker::totals::DailyHistory;
use crate::tracker::types::{DailyTotal, Goal};
use crate::tracker::zone::classify;

/// Safety bound on the backward walk. Far beyond any plausible unbroken
/// run, so the walk always covers the full observed history.
const MAX_LOOKBACK_DAYS: u32 = 1000;

fn day_hits(total: &DailyTotal, goal: &Goal) -> bool {
    classify(total.value(goal.key), goal.target, goal.direction, goal.tolerance)
        .zone
        .is_hit()
}

/// Consecutive qualifying days ending at `reference`, walking backward one
/// calendar day at a time. Stops at the first miss or unlogged day.
pub fn current_streak(history: &DailyHistory, goal: &Goal, reference: NaiveDate) -> u32 {
    walk_back(history, reference, |total| day_hits(total, goal))
}

/// Longest qualifying run anywhere in history. Always >= the current
/// streak, which is the same rule constrained to end at the reference date.
pub fn best_streak(history: &DailyHistory, goal: &Goal) -> u32 {
    scan_best(history, |total| day_hits(total, goal))
}

/// Current streak where every configured goal must qualify on each day.
/// An empty goal slice yields 0 rather than a vacuous pass.
pub fn current_all_goals_streak(history: &DailyHistory, goals: &[Goal], reference: NaiveDate) -> u32 {
    if goals.is_empty() {
        return 0;
    }
    walk_back(history, reference, |total| {
        goals.iter().all(|goal| day_hits(total, goal))
    })
}

/// Best streak where every configured goal must qualify on each day.
pub fn best_all_goals_streak(history: &DailyHistory, goals: &[Goal]) -> u32 {
    if goals.is_empty() {
        return 0;
    }
    scan_best(history, |total| {
        goals.iter().all(|goal| day_hits(total, goal))
    })
}

fn walk_back(history: &DailyHistory, reference: NaiveDate, hit: impl Fn(&DailyTotal) -> bool) -> u32 {
    let mut streak = 0;
    let mut date = reference;

    while streak < MAX_LOOKBACK_DAYS {
        match history.get(date) {
            Some(total) if hit(total) => streak += 1,
            _ => break,
        }
        match date.pred_opt() {
            Some(prev) => date = prev,
            None => break,
        }
    }

    streak
}

/// Single ascending scan: track the running consecutive-qualifying counter,
/// resetting on misses and on implicit calendar gaps between entries.
fn scan_best(history: &DailyHistory, hit: impl Fn(&DailyTotal) -> bool) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut last_hit: Option<NaiveDate> = None;

    for total in history.iter() {
        if hit(total) {
            run = match last_hit {
                Some(prev) if total.date.pred_opt() == Some(prev) => run + 1,
                _ => 1,
            };
            last_hit = Some(total.date);
            best = best.max(run);
        } else {
            run = 0;
            last_hit = None;
        }
    }

    best
}
