//! Opportunistic enrichment of incomplete entries from the external catalog.
//!
//! Enrichment only fills fields the user left empty; it never overwrites a
//! value the user supplied. Bulk enrichment sleeps a fixed delay between
//! successive lookups to stay within the catalog's informal rate
//! expectations; there is no concurrent fan-out.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::clients::jikan::{CatalogLookup, CatalogSnippet, MediaKind};
use crate::models::entry::CatalogEntry;

pub struct EnrichmentService {
    lookup: Arc<dyn CatalogLookup>,
    request_delay: Duration,
}

impl EnrichmentService {
    pub fn new(lookup: Arc<dyn CatalogLookup>, request_delay: Duration) -> Self {
        Self {
            lookup,
            request_delay,
        }
    }

    /// Fills the missing optional fields of `entry` from `snippet`.
    /// Returns true when anything changed.
    pub fn apply(entry: &mut CatalogEntry, snippet: &CatalogSnippet) -> bool {
        let mut changed = false;

        if entry.image_url.is_none() && snippet.image_url.is_some() {
            entry.image_url = snippet.image_url.clone();
            changed = true;
        }
        if entry.synopsis.as_deref().is_none_or(str::is_empty) && snippet.synopsis.is_some() {
            entry.synopsis = snippet.synopsis.clone();
            changed = true;
        }
        if entry.episode_count.is_none() && snippet.episode_count.is_some() {
            entry.episode_count = snippet.episode_count;
            changed = true;
        }
        if entry.chapter_count.is_none() && snippet.chapter_count.is_some() {
            entry.chapter_count = snippet.chapter_count;
            changed = true;
        }
        if entry.studio_or_author == "Unknown"
            && let Some(credited) = &snippet.studio_or_author
        {
            entry.studio_or_author = credited.clone();
            changed = true;
        }

        changed
    }

    /// Looks up one entry and fills its gaps. Returns true when the entry
    /// changed; a failed lookup leaves it untouched.
    pub async fn enrich_entry(&self, entry: &mut CatalogEntry) -> bool {
        let kind = MediaKind::from_kind_str(&entry.media_kind);
        match self.lookup.lookup(&entry.title, kind).await {
            Some(snippet) => Self::apply(entry, &snippet),
            None => {
                debug!(title = %entry.title, "no catalog match, entry left as-is");
                false
            }
        }
    }

    /// Enriches a list in place, pacing one lookup at a time with the
    /// configured delay between calls. Returns how many entries changed.
    pub async fn enrich_all(&self, entries: &mut [CatalogEntry]) -> usize {
        let mut changed = 0;

        for (i, entry) in entries.iter_mut().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.request_delay).await;
            }
            if self.enrich_entry(entry).await {
                changed += 1;
            }
        }

        info!(changed, "bulk enrichment finished");
        changed
    }
}
