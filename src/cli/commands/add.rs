//! Add command handler

use crate::cli::AddArgs;
use crate::clients::jikan::{CatalogLookup, JikanClient, MediaKind};
use crate::config::Config;
use crate::models::entry::NewEntry;

use super::{open_manager, validate_score};

pub async fn cmd_add(config: &Config, args: AddArgs) -> anyhow::Result<()> {
    validate_score(args.score)?;

    let title = args.title.join(" ");
    let mut candidate = NewEntry {
        title,
        media_kind: args.kind,
        watch_status: args.status,
        episode_count: args.episodes,
        chapter_count: args.chapters,
        user_score: args.score,
        synopsis: args.synopsis,
        image_url: args.image_url,
        studio_or_author: args.studio,
    };

    if args.lookup {
        println!("Looking up '{}' on the catalog...", candidate.title);
        prefill_from_catalog(config, &mut candidate).await;
    }

    let manager = open_manager(config)?;
    let entry = manager.add(candidate)?;

    println!();
    println!("✓ Added: {} (ID: {})", entry.title, entry.id);
    println!("  Kind: {} | Status: {}", entry.media_kind, entry.watch_status);
    if let Some(eps) = entry.episode_count {
        println!("  Episodes: {eps}");
    }
    if let Some(chapters) = entry.chapter_count {
        println!("  Chapters: {chapters}");
    }
    if let Some(score) = entry.user_score {
        println!("  Your Score: {score}/10");
    }
    println!("  Studio/Author: {}", entry.studio_or_author);

    Ok(())
}

/// Best-effort prefill of fields the user left empty. A failed lookup is
/// not an error; the entry is saved as typed.
async fn prefill_from_catalog(config: &Config, candidate: &mut NewEntry) {
    let kind = MediaKind::from_kind_str(&candidate.media_kind);
    let client = JikanClient::with_base_url(&config.lookup.base_url);

    let Some(snippet) = client.lookup(&candidate.title, kind).await else {
        println!("  No catalog match found, saving entry as typed.");
        return;
    };

    if candidate.image_url.is_none() {
        candidate.image_url = snippet.image_url;
    }
    if candidate.synopsis.is_none() {
        candidate.synopsis = snippet.synopsis;
    }
    if candidate.episode_count.is_none() {
        candidate.episode_count = snippet.episode_count;
    }
    if candidate.chapter_count.is_none() {
        candidate.chapter_count = snippet.chapter_count;
    }
    if candidate.studio_or_author.is_none() {
        candidate.studio_or_author = snippet.studio_or_author;
    }
}
