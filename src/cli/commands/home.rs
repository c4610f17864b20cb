//! Home command handler - the stats-and-spotlight overview.

use crate::config::Config;

use super::open_manager;

pub async fn cmd_home(config: &Config) -> anyhow::Result<()> {
    let manager = open_manager(config)?;
    let stats = manager.stats()?;

    println!("Collection Overview");
    println!("{:-<60}", "");
    println!("Total Titles: {}", stats.total);
    println!("Watching:     {}", stats.watching);
    println!("Completed:    {}", stats.completed);
    println!(
        "Last Added:   {}",
        stats
            .last_added
            .as_ref()
            .map_or("None", |e| e.title.as_str())
    );

    let Some(top) = manager.top_rated()? else {
        println!();
        println!("No titles added yet. Add one to get started!");
        return Ok(());
    };

    println!();
    println!("Spotlight - Top Rated");
    println!("{:-<60}", "");
    println!("{}", top.title);
    println!("  Kind: {} | Status: {}", top.media_kind, top.watch_status);
    println!(
        "  Your Score: {}",
        top.user_score
            .map_or_else(|| "Not rated".to_string(), |s| format!("{s}/10"))
    );
    println!("  Studio/Author: {}", top.studio_or_author);
    if let Some(synopsis) = &top.synopsis
        && !synopsis.is_empty()
    {
        let display_synopsis = if synopsis.chars().count() > 300 {
            format!("{}...", synopsis.chars().take(300).collect::<String>())
        } else {
            synopsis.clone()
        };
        println!("  {display_synopsis}");
    }

    Ok(())
}
