//! Enrich command handler - bulk fill of missing fields from the catalog.

use std::sync::Arc;
use std::time::Duration;

use crate::clients::jikan::JikanClient;
use crate::config::Config;
use crate::models::entry::EntryPatch;
use crate::services::EnrichmentService;

use super::open_manager;

pub async fn cmd_enrich(config: &Config) -> anyhow::Result<()> {
    let manager = open_manager(config)?;
    let before = manager.list()?;

    if before.is_empty() {
        println!("No titles in your collection yet, nothing to enrich.");
        return Ok(());
    }

    println!(
        "Enriching {} entries ({}ms between catalog calls)...",
        before.len(),
        config.lookup.request_delay_ms
    );

    let service = EnrichmentService::new(
        Arc::new(JikanClient::with_base_url(&config.lookup.base_url)),
        Duration::from_millis(config.lookup.request_delay_ms),
    );

    let mut enriched = before.clone();
    service.enrich_all(&mut enriched).await;

    let mut updated = 0;
    for (old, new) in before.iter().zip(&enriched) {
        if old == new {
            continue;
        }
        let patch = EntryPatch {
            episode_count: new.episode_count,
            chapter_count: new.chapter_count,
            synopsis: new.synopsis.clone(),
            image_url: new.image_url.clone(),
            studio_or_author: Some(new.studio_or_author.clone()),
            ..EntryPatch::default()
        };
        if manager.update(&new.id, &patch)?.is_some() {
            updated += 1;
            println!("  ✓ {}", new.title);
        }
    }

    println!();
    if updated == 0 {
        println!("Nothing to fill in - every entry was already complete or unmatched.");
    } else {
        println!("✓ Enriched {updated} of {} entries.", before.len());
    }

    Ok(())
}
