//! Update command handler

use crate::cli::UpdateArgs;
use crate::config::Config;
use crate::models::entry::EntryPatch;

use super::{open_manager, validate_score};

pub async fn cmd_update(config: &Config, args: UpdateArgs) -> anyhow::Result<()> {
    validate_score(args.score)?;

    let patch = EntryPatch {
        title: args.title,
        media_kind: args.kind,
        watch_status: args.status,
        episode_count: args.episodes,
        chapter_count: args.chapters,
        user_score: args.score,
        synopsis: args.synopsis,
        image_url: args.image_url,
        studio_or_author: args.studio,
    };

    if patch.is_empty() {
        println!("Nothing to update. Pass at least one field flag, e.g. --status Completed");
        return Ok(());
    }

    let manager = open_manager(config)?;

    match manager.update(&args.id, &patch)? {
        Some(entry) => {
            println!("✓ Updated: {} (ID: {})", entry.title, entry.id);
            println!(
                "  Kind: {} | Status: {}",
                entry.media_kind, entry.watch_status
            );
            if let Some(score) = entry.user_score {
                println!("  Your Score: {score}/10");
            }
        }
        None => {
            println!("No entry with ID {} found.", args.id);
            println!("Use 'hondana list' to see entry IDs.");
        }
    }

    Ok(())
}
