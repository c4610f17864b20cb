//! List command handler

use crate::cli::ListArgs;
use crate::config::Config;

use super::open_manager;

pub async fn cmd_list(config: &Config, args: ListArgs) -> anyhow::Result<()> {
    let manager = open_manager(config)?;
    let entries = manager.list()?;

    if entries.is_empty() {
        println!("No titles in your collection yet.");
        println!();
        println!("Add one with: hondana add \"title\"");
        return Ok(());
    }

    let filtered: Vec<_> = entries
        .iter()
        .filter(|e| {
            args.status
                .as_ref()
                .is_none_or(|s| e.watch_status.eq_ignore_ascii_case(s))
        })
        .filter(|e| {
            args.kind
                .as_ref()
                .is_none_or(|k| e.media_kind.eq_ignore_ascii_case(k))
        })
        .collect();

    if filtered.is_empty() {
        println!("No entries match the given filters.");
        return Ok(());
    }

    println!("Collection ({} of {} total)", filtered.len(), entries.len());
    println!("{:-<70}", "");

    for entry in filtered {
        let status_indicator = match entry.watch_status.as_str() {
            "Watching" => "🟢",
            "Completed" => "✓",
            "On Hold" => "⏸",
            "Plan to Watch" => "📅",
            _ => "•",
        };
        let rating = entry
            .user_score
            .map_or_else(|| "N/A".to_string(), |s| format!("{s}/10"));

        println!("{} {} [{}]", status_indicator, entry.title, rating);
        println!(
            "  ID: {} | Kind: {} | Status: {}",
            entry.id, entry.media_kind, entry.watch_status
        );
    }

    println!();
    println!("Legend: 🟢 Watching | ✓ Completed | ⏸ On Hold | 📅 Plan to Watch");

    Ok(())
}
