//! Search command handler
//!
//! Searches the external catalog and offers to add a result, prefilled the
//! way the pick would prefill an add form.

use crate::cli::SearchArgs;
use crate::clients::jikan::{JikanClient, JikanMedia, MediaKind};
use crate::config::Config;
use crate::models::entry::NewEntry;

use super::open_manager;

pub async fn cmd_search(config: &Config, args: SearchArgs) -> anyhow::Result<()> {
    let query = args.query.join(" ");
    if query.trim().chars().count() < config.lookup.min_query_len {
        println!(
            "Query too short - type at least {} characters.",
            config.lookup.min_query_len
        );
        return Ok(());
    }

    let kind = if args.manga {
        MediaKind::Manga
    } else {
        MediaKind::Anime
    };
    let limit = args.limit.unwrap_or(config.lookup.search_limit);

    println!("Searching {kind} catalog for: {query}");

    let client = JikanClient::with_base_url(&config.lookup.base_url);
    let results = client.search(kind, &query, limit).await?;

    if results.is_empty() {
        println!("No results found for '{query}'");
        return Ok(());
    }

    println!();
    println!("Search Results:");
    println!("{:-<60}", "");

    for (i, media) in results.iter().enumerate() {
        let count = match kind {
            MediaKind::Anime => media
                .episodes
                .map_or_else(|| "? eps".to_string(), |e| format!("{e} eps")),
            MediaKind::Manga => media
                .chapters
                .map_or_else(|| "? chapters".to_string(), |c| format!("{c} chapters")),
        };
        let score = media
            .score
            .map_or_else(|| "unrated".to_string(), |s| format!("{s}/10"));

        println!("[{}] {} ({})", i + 1, media.display_title(), count);
        println!(
            "    Type: {} | Score: {}",
            media.media_type.as_deref().unwrap_or("?"),
            score
        );
        println!();
    }

    println!(
        "Enter number to add (1-{}), or 'q' to cancel:",
        results.len()
    );

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let input = input.trim();

    if input.eq_ignore_ascii_case("q") || input.is_empty() {
        println!("Cancelled.");
        return Ok(());
    }

    let index: usize = match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= results.len() => n - 1,
        _ => {
            println!("Invalid selection.");
            return Ok(());
        }
    };

    let media = &results[index];

    println!("Watch status [Plan to Watch]:");
    let mut status = String::new();
    std::io::stdin().read_line(&mut status)?;
    let status = status.trim();
    let status = if status.is_empty() {
        "Plan to Watch"
    } else {
        status
    };

    let manager = open_manager(config)?;
    let entry = manager.add(prefilled_candidate(media, kind, status))?;

    println!();
    println!("✓ Added: {} (ID: {})", entry.title, entry.id);
    println!(
        "  Kind: {} | Status: {}",
        entry.media_kind, entry.watch_status
    );

    Ok(())
}

fn prefilled_candidate(media: &JikanMedia, kind: MediaKind, status: &str) -> NewEntry {
    let studio_or_author = match kind {
        MediaKind::Anime => &media.studios,
        MediaKind::Manga => &media.authors,
    }
    .as_ref()
    .and_then(|credited| credited.first())
    .map(|c| c.name.clone());

    NewEntry {
        title: media.display_title().to_string(),
        media_kind: media.media_type.clone().unwrap_or_else(|| {
            // Same casing as the catalog's own type labels ("TV", "Movie",
            // "Manga"), not the lowercase URL path segment.
            match kind {
                MediaKind::Anime => "Anime".to_string(),
                MediaKind::Manga => "Manga".to_string(),
            }
        }),
        watch_status: status.to_string(),
        episode_count: media.episodes.and_then(|n| u32::try_from(n).ok()),
        chapter_count: media.chapters.and_then(|n| u32::try_from(n).ok()),
        user_score: None,
        synopsis: media.synopsis.clone(),
        image_url: media.image_url().map(ToString::to_string),
        studio_or_author,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefill_keeps_the_catalog_type_when_present() {
        let media = JikanMedia {
            title: Some("Shingeki no Kyojin".to_string()),
            media_type: Some("TV".to_string()),
            ..JikanMedia::default()
        };
        let candidate = prefilled_candidate(&media, MediaKind::Anime, "Watching");
        assert_eq!(candidate.media_kind, "TV");
        assert_eq!(candidate.watch_status, "Watching");
    }

    #[test]
    fn prefill_falls_back_to_title_cased_kind() {
        let media = JikanMedia {
            title: Some("Berserk".to_string()),
            ..JikanMedia::default()
        };

        let anime = prefilled_candidate(&media, MediaKind::Anime, "Plan to Watch");
        assert_eq!(anime.media_kind, "Anime");

        let manga = prefilled_candidate(&media, MediaKind::Manga, "Plan to Watch");
        assert_eq!(manga.media_kind, "Manga");
    }
}
