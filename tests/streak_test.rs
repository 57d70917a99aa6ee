mod helpers;

use helpers::{date, log_on, set_goal, test_db};
use nosh::tracker::streak;
use nosh::tracker::totals::daily_history;
use nosh::tracker::types::{Direction, Goal, MacroKey};

fn calorie_goal(target: f64, tolerance: f64) -> Goal {
    Goal {
        key: MacroKey::Calories,
        target,
        direction: Direction::Under,
        tolerance,
        updated_at: "2025-06-01T00:00:00+00:00".into(),
    }
}

#[test]
fn streaks_over_a_real_ledger() {
    let conn = test_db();
    // three on-goal days, then a blowout, then two more on-goal days
    log_on(&conn, "2025-06-01", "day 1", 1800.0, 100.0);
    log_on(&conn, "2025-06-02", "day 2", 1750.0, 100.0);
    log_on(&conn, "2025-06-03", "day 3", 1900.0, 100.0);
    log_on(&conn, "2025-06-04", "cheat day", 3200.0, 100.0);
    log_on(&conn, "2025-06-05", "day 5", 1600.0, 100.0);
    log_on(&conn, "2025-06-06", "day 6", 1700.0, 100.0);

    let history = daily_history(&conn).unwrap();
    let goal = calorie_goal(2000.0, 0.0);

    assert_eq!(streak::current_streak(&history, &goal, date("2025-06-06")), 2);
    assert_eq!(streak::best_streak(&history, &goal), 3);
}

#[test]
fn unlogged_day_breaks_a_streak_like_a_miss() {
    let conn = test_db();
    log_on(&conn, "2025-06-01", "day 1", 1800.0, 100.0);
    log_on(&conn, "2025-06-02", "day 2", 1800.0, 100.0);
    // 2025-06-03 not logged at all
    log_on(&conn, "2025-06-04", "day 4", 1800.0, 100.0);
    log_on(&conn, "2025-06-05", "day 5", 1800.0, 100.0);

    let history = daily_history(&conn).unwrap();
    let goal = calorie_goal(2000.0, 0.0);

    // the gap caps both walks at 2 — it must not be bridged
    assert_eq!(streak::current_streak(&history, &goal, date("2025-06-05")), 2);
    assert_eq!(streak::best_streak(&history, &goal), 2);
}

#[test]
fn tolerance_widens_what_counts_as_on_goal() {
    let conn = test_db();
    // 28 consecutive days alternating 1550 / 1833 kcal
    let start = date("2025-05-01");
    for i in 0..28u64 {
        let day = start.checked_add_days(chrono::Days::new(i)).unwrap();
        let calories = if i % 2 == 0 { 1550.0 } else { 1833.0 };
        log_on(&conn, &day.format("%Y-%m-%d").to_string(), "meal", calories, 80.0);
    }
    let history = daily_history(&conn).unwrap();
    let day27 = date("2025-05-28");

    // goal 1600 under, 20% tolerance → band 1920 covers every day
    let tolerant = calorie_goal(1600.0, 20.0);
    assert_eq!(streak::current_streak(&history, &tolerant, day27), 28);

    // tolerance 0 strictly shortens the streak on the same data
    let strict = calorie_goal(1600.0, 0.0);
    let strict_current = streak::current_streak(&history, &strict, day27);
    assert!(strict_current < 28);
}

#[test]
fn all_goals_streak_requires_every_goal_each_day() {
    let conn = test_db();
    set_goal(&conn, MacroKey::Calories, 2000.0, Direction::Under, 0.0);
    set_goal(&conn, MacroKey::Protein, 100.0, Direction::Over, 0.0);

    log_on(&conn, "2025-06-01", "good day", 1800.0, 120.0);
    log_on(&conn, "2025-06-02", "low protein day", 1800.0, 60.0);
    log_on(&conn, "2025-06-03", "good day", 1700.0, 110.0);

    let history = daily_history(&conn).unwrap();
    let goals = nosh::tracker::goals::goals(&conn).unwrap();

    // calories alone ran all three days
    let calories = goals.iter().find(|g| g.key == MacroKey::Calories).unwrap();
    assert_eq!(streak::best_streak(&history, calories), 3);

    // but the combined streak is broken by the protein miss on day 2
    assert_eq!(streak::best_all_goals_streak(&history, &goals), 1);
    assert_eq!(
        streak::current_all_goals_streak(&history, &goals, date("2025-06-03")),
        1
    );
}

#[test]
fn best_never_drops_below_current() {
    let conn = test_db();
    for day in ["2025-06-01", "2025-06-02", "2025-06-03", "2025-06-04"] {
        log_on(&conn, day, "meal", 1500.0, 90.0);
    }
    let history = daily_history(&conn).unwrap();
    let goal = calorie_goal(2000.0, 10.0);

    for day in ["2025-05-30", "2025-06-01", "2025-06-02", "2025-06-04", "2025-06-09"] {
        let current = streak::current_streak(&history, &goal, date(day));
        assert!(streak::best_streak(&history, &goal) >= current);
    }
}
