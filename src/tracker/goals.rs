//! Goal configuration — upsert, read, reset.
//!
//! Validation happens here, at configuration time: by the time the report
//! assembler reads a goal, target and tolerance are known to be valid.

use anyhow::Result;
use rusqlite::{params, Connection};

use crate::tracker::error::TrackerError;
use crate::tracker::types::{Direction, Goal, MacroKey};

/// Create or replace the goal for a macro key.
pub fn set_goal(
    conn: &Connection,
    key: MacroKey,
    target: f64,
    direction: Direction,
    tolerance: f64,
) -> Result<Goal> {
    if !target.is_finite() || target <= 0.0 {
        return Err(TrackerError::InvalidTarget(target).into());
    }
    if !tolerance.is_finite() || !(0.0..=100.0).contains(&tolerance) {
        return Err(TrackerError::InvalidTolerance(tolerance).into());
    }

    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO goals (key, target, direction, tolerance, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(key) DO UPDATE SET
             target = excluded.target,
             direction = excluded.direction,
             tolerance = excluded.tolerance,
             updated_at = excluded.updated_at",
        params![key.as_str(), target, direction.as_str(), tolerance, now],
    )?;

    Ok(Goal { key, target, direction, tolerance, updated_at: now })
}

/// All configured goals in canonical macro order (calories, protein, carbs,
/// fat). Read-only from the analytics engine's perspective.
pub fn goals(conn: &Connection) -> Result<Vec<Goal>> {
    let mut stmt =
        conn.prepare("SELECT key, target, direction, tolerance, updated_at FROM goals")?;
    let rows: Vec<(String, f64, String, f64, String)> = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut goals = Vec::with_capacity(rows.len());
    for (key, target, direction, tolerance, updated_at) in rows {
        let key: MacroKey = key
            .parse()
            .map_err(|_| TrackerError::UnknownMacro(key.clone()))?;
        let direction: Direction = direction
            .parse()
            .map_err(|e: String| anyhow::anyhow!("bad goal row for {key}: {e}"))?;
        goals.push(Goal { key, target, direction, tolerance, updated_at });
    }
    goals.sort_by_key(|g| g.key);

    Ok(goals)
}

/// Fetch a single goal by key.
pub fn goal(conn: &Connection, key: MacroKey) -> Result<Option<Goal>> {
    Ok(goals(conn)?.into_iter().find(|g| g.key == key))
}

/// Delete all goals. Returns the number removed.
pub fn reset_goals(conn: &Connection) -> Result<usize> {
    let removed = conn.execute("DELETE FROM goals", [])?;
    Ok(removed)
}
