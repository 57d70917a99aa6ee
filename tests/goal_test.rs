mod helpers;

use helpers::test_db;
use nosh::tracker::error::TrackerError;
use nosh::tracker::goals;
use nosh::tracker::types::{Direction, MacroKey};

#[test]
fn goal_lifecycle_set_list_reset() {
    let conn = test_db();

    goals::set_goal(&conn, MacroKey::Calories, 2000.0, Direction::Under, 10.0).unwrap();
    goals::set_goal(&conn, MacroKey::Protein, 120.0, Direction::Over, 15.0).unwrap();
    goals::set_goal(&conn, MacroKey::Fat, 70.0, Direction::Under, 0.0).unwrap();

    let all = goals::goals(&conn).unwrap();
    assert_eq!(all.len(), 3);
    // canonical macro order, not alphabetical
    assert_eq!(all[0].key, MacroKey::Calories);
    assert_eq!(all[1].key, MacroKey::Protein);
    assert_eq!(all[2].key, MacroKey::Fat);

    let protein = goals::goal(&conn, MacroKey::Protein).unwrap().unwrap();
    assert_eq!(protein.target, 120.0);
    assert_eq!(protein.direction, Direction::Over);

    assert_eq!(goals::reset_goals(&conn).unwrap(), 3);
    assert!(goals::goals(&conn).unwrap().is_empty());
    assert!(goals::goal(&conn, MacroKey::Protein).unwrap().is_none());
}

#[test]
fn upsert_keeps_one_goal_per_key() {
    let conn = test_db();
    goals::set_goal(&conn, MacroKey::Calories, 2200.0, Direction::Under, 0.0).unwrap();
    goals::set_goal(&conn, MacroKey::Calories, 1900.0, Direction::Under, 10.0).unwrap();

    let all = goals::goals(&conn).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].target, 1900.0);
    assert_eq!(all[0].tolerance, 10.0);
}

#[test]
fn validation_happens_at_configuration_time() {
    let conn = test_db();

    let err = goals::set_goal(&conn, MacroKey::Carbs, 250.0, Direction::Under, 101.0).unwrap_err();
    assert_eq!(
        err.downcast_ref::<TrackerError>(),
        Some(&TrackerError::InvalidTolerance(101.0))
    );

    let err = goals::set_goal(&conn, MacroKey::Carbs, -10.0, Direction::Under, 0.0).unwrap_err();
    assert_eq!(
        err.downcast_ref::<TrackerError>(),
        Some(&TrackerError::InvalidTarget(-10.0))
    );

    // nothing was persisted
    assert!(goals::goals(&conn).unwrap().is_empty());
}

#[test]
fn boundary_tolerances_are_accepted() {
    let conn = test_db();
    goals::set_goal(&conn, MacroKey::Calories, 2000.0, Direction::Under, 0.0).unwrap();
    goals::set_goal(&conn, MacroKey::Protein, 120.0, Direction::Over, 100.0).unwrap();

    let all = goals::goals(&conn).unwrap();
    assert_eq!(all[0].tolerance, 0.0);
    assert_eq!(all[1].tolerance, 100.0);
}
