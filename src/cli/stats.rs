use anyhow::Result;

use crate::config::NoshConfig;

/// Display tracker statistics in the terminal.
pub fn stats(config: &NoshConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    let conn = crate::db::open_database(&db_path)?;

    let response = crate::tracker::stats::tracker_stats(&conn, Some(&db_path))?;

    println!("Tracker Statistics");
    println!("{}", "=".repeat(40));
    println!("  Meals logged:        {}", response.total_meals);
    println!("  Days tracked:        {}", response.days_tracked);
    if let Some(ref first) = response.first_day {
        println!("  First day:           {first}");
    }
    if let Some(ref last) = response.last_day {
        println!("  Last day:            {last}");
    }
    println!();
    println!("  Goals configured:    {}", response.goals_configured);
    println!("  Foods available:     {}", response.foods_available);
    println!("  Database size:       {} bytes", response.db_size_bytes);

    Ok(())
}
