mod helpers;

use helpers::{date, log_on, test_db};
use nosh::tracker::types::Nutrients;
use nosh::tracker::{log, totals};

#[test]
fn logged_meals_feed_daily_totals() {
    let conn = test_db();
    log_on(&conn, "2025-06-01", "oatmeal", 320.0, 12.0);
    log_on(&conn, "2025-06-01", "chicken salad", 540.0, 42.0);

    let total = totals::daily_total(&conn, date("2025-06-01")).unwrap().unwrap();
    assert_eq!(total.calories, 860.0);
    assert_eq!(total.protein, 54.0);
    assert_eq!(total.meal_count, 2);
}

#[test]
fn deleting_a_meal_updates_totals() {
    let conn = test_db();
    let id = log_on(&conn, "2025-06-01", "snack", 200.0, 5.0);
    log_on(&conn, "2025-06-01", "dinner", 700.0, 35.0);

    log::delete_meal(&conn, &id).unwrap();

    let total = totals::daily_total(&conn, date("2025-06-01")).unwrap().unwrap();
    assert_eq!(total.calories, 700.0);
    assert_eq!(total.meal_count, 1);
}

#[test]
fn deleting_the_only_meal_makes_the_day_absent() {
    let conn = test_db();
    let id = log_on(&conn, "2025-06-01", "snack", 200.0, 5.0);
    log::delete_meal(&conn, &id).unwrap();

    // the day is gone from the series, not left as a zero total
    assert!(totals::daily_total(&conn, date("2025-06-01")).unwrap().is_none());
    assert!(totals::daily_history(&conn).unwrap().is_empty());
}

#[test]
fn meal_ids_are_time_sortable_and_unique() {
    let conn = test_db();
    let a = log_on(&conn, "2025-06-01", "first", 100.0, 1.0);
    let b = log_on(&conn, "2025-06-01", "second", 100.0, 1.0);
    assert_ne!(a, b);

    let meals = log::meals_for_day(&conn, date("2025-06-01")).unwrap();
    assert_eq!(meals.len(), 2);
    assert_eq!(meals[0].name, "first");
    assert_eq!(meals[1].name, "second");
}

#[test]
fn partial_nutrients_are_preserved_per_meal() {
    let conn = test_db();
    log::log_meal(
        &conn,
        "black coffee",
        &Nutrients { calories: Some(5.0), ..Nutrients::default() },
        date("2025-06-01"),
    )
    .unwrap();

    let meals = log::meals_for_day(&conn, date("2025-06-01")).unwrap();
    assert_eq!(meals[0].nutrients.calories, Some(5.0));
    assert_eq!(meals[0].nutrients.protein, None);
}
