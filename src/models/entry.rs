use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One tracked anime/manga title with user-specific metadata.
///
/// `id` and `date_added` are assigned at add-time and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    /// Open vocabulary in practice: "TV", "Movie", "Manga", "OVA", ...
    pub media_kind: String,
    /// "Watching", "Completed", "On Hold", "Plan to Watch", "Dropped", ...
    pub watch_status: String,
    pub episode_count: Option<u32>,
    pub chapter_count: Option<u32>,
    pub user_score: Option<f32>,
    pub synopsis: Option<String>,
    pub image_url: Option<String>,
    #[serde(default = "default_unknown")]
    pub studio_or_author: String,
    /// RFC 3339 timestamp, set exactly once at creation.
    pub date_added: String,
}

fn default_unknown() -> String {
    "Unknown".to_string()
}

/// Candidate entry as supplied by a caller, before id/timestamp assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEntry {
    pub title: String,
    pub media_kind: String,
    pub watch_status: String,
    pub episode_count: Option<u32>,
    pub chapter_count: Option<u32>,
    pub user_score: Option<f32>,
    pub synopsis: Option<String>,
    pub image_url: Option<String>,
    pub studio_or_author: Option<String>,
}

/// Partial update: provided fields replace the stored value, absent fields
/// are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub media_kind: Option<String>,
    pub watch_status: Option<String>,
    pub episode_count: Option<u32>,
    pub chapter_count: Option<u32>,
    pub user_score: Option<f32>,
    pub synopsis: Option<String>,
    pub image_url: Option<String>,
    pub studio_or_author: Option<String>,
}

impl EntryPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.media_kind.is_none()
            && self.watch_status.is_none()
            && self.episode_count.is_none()
            && self.chapter_count.is_none()
            && self.user_score.is_none()
            && self.synopsis.is_none()
            && self.image_url.is_none()
            && self.studio_or_author.is_none()
    }
}

/// Home-page counters, recomputed from the stored collection on every call.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionStats {
    pub total: usize,
    pub watching: usize,
    pub completed: usize,
    pub last_added: Option<CatalogEntry>,
}

/// Per-kind/per-status counts plus the mean score over scored entries.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionBreakdown {
    pub total: usize,
    pub by_kind: BTreeMap<String, usize>,
    pub by_status: BTreeMap<String, usize>,
    pub average_score: Option<f32>,
}
