//! CLI `progress` command — render the daily progress report.

use anyhow::Result;

use crate::config::NoshConfig;
use crate::tracker;
use crate::tracker::types::Zone;

/// Print the progress report for a date, human-readable or as JSON.
pub fn progress(config: &NoshConfig, date: Option<&str>, json: bool) -> Result<()> {
    let reference = super::log::resolve_day(date)?;
    let conn = crate::db::open_database(config.resolved_db_path())?;

    let report = tracker::report::build_report(&conn, reference)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Progress for {} ({} meals logged)", report.date, report.meal_count);
    println!("{}", "=".repeat(56));

    for (key, p) in &report.today {
        println!(
            "  {} {:<10} {:>8} / {:<8} {:>5}%  [{}]",
            zone_marker(p.zone),
            key,
            p.actual,
            p.goal,
            p.percent,
            p.zone
        );
        if p.zone == Zone::Near {
            println!("      within tolerance band (up to {})", p.band);
        }
    }
    println!();

    println!("Streaks (current / best):");
    for (key, s) in &report.streaks.per_goal {
        println!("  {:<10} {:>3} / {:<3} ({})", key, s.current, s.best, s.direction);
    }
    println!(
        "  {:<10} {:>3} / {:<3}",
        "all goals", report.streaks.all_goals.current, report.streaks.all_goals.best
    );
    println!();

    let avg = &report.weekly_avg;
    if avg.days_tracked == 0 {
        println!("Weekly average: no data in the last 7 days.");
    } else {
        println!(
            "Weekly average over {} day(s): {} kcal, {} g protein, {} g carbs, {} g fat",
            avg.days_tracked, avg.calories, avg.protein, avg.carbs, avg.fat
        );
    }

    Ok(())
}

fn zone_marker(zone: Zone) -> &'static str {
    match zone {
        Zone::Met => "+",
        Zone::Near => "~",
        Zone::Over | Zone::Under => "-",
    }
}
