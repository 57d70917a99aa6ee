//! CLI `goal` command — set, list, and reset macro goals.

use anyhow::Result;

use crate::config::NoshConfig;
use crate::tracker;
use crate::tracker::types::{Direction, MacroKey};

/// Set or replace the goal for one macro key.
pub fn set(
    config: &NoshConfig,
    key: &str,
    target: f64,
    direction: Option<&str>,
    tolerance: f64,
) -> Result<()> {
    let key: MacroKey = key.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let direction = match direction {
        Some(s) => s.parse::<Direction>().map_err(|e: String| anyhow::anyhow!(e))?,
        None => match key {
            MacroKey::Protein => Direction::Over,
            _ => Direction::Under,
        },
    };

    let conn = crate::db::open_database(config.resolved_db_path())?;
    let goal = tracker::goals::set_goal(&conn, key, target, direction, tolerance)?;

    println!(
        "Goal set: {} {} {} {} (tolerance {}%)",
        goal.key,
        goal.direction,
        goal.target,
        goal.key.unit(),
        goal.tolerance
    );
    Ok(())
}

/// List all configured goals.
pub fn list(config: &NoshConfig) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let goals = tracker::goals::goals(&conn)?;

    if goals.is_empty() {
        println!("No goals configured. Set one with `nosh goal set`.");
        return Ok(());
    }

    println!("Configured goals:");
    for goal in &goals {
        println!(
            "  {:<10} {:<6} {:>8} {}  tolerance {}%",
            goal.key.as_str(),
            goal.direction.as_str(),
            goal.target,
            goal.key.unit(),
            goal.tolerance
        );
    }
    Ok(())
}

/// Remove all goals.
pub fn reset(config: &NoshConfig) -> Result<()> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    let removed = tracker::goals::reset_goals(&conn)?;
    println!("Removed {removed} goal(s).");
    Ok(())
}
