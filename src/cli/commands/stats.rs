//! Stats command handler - the detailed breakdown.

use crate::config::Config;

use super::open_manager;

pub async fn cmd_stats(config: &Config) -> anyhow::Result<()> {
    let manager = open_manager(config)?;
    let breakdown = manager.breakdown()?;

    if breakdown.total == 0 {
        println!("No collection found.");
        println!();
        println!("Add titles with: hondana add \"title\"");
        return Ok(());
    }

    println!("Collection Statistics");
    println!("{:-<60}", "");
    println!("Total Titles: {}", breakdown.total);

    println!();
    println!("By Kind:");
    for (kind, count) in &breakdown.by_kind {
        println!("  • {kind}: {count}");
    }

    println!();
    println!("By Status:");
    for (status, count) in &breakdown.by_status {
        println!("  • {status}: {count}");
    }

    println!();
    match breakdown.average_score {
        Some(avg) => println!("Average Score: {avg:.2}"),
        None => println!("Average Score: no scored titles yet"),
    }

    Ok(())
}
