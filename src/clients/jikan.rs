//! Jikan (MyAnimeList) v4 search client.
//!
//! Two surfaces: `search` propagates failures for interactive use, while the
//! [`CatalogLookup`] trait collapses every failure to `None` so enrichment
//! is never a hard dependency. Single attempt per call, no retry; callers
//! bulk-enriching a list pace themselves (see `services::enrichment`).

use std::fmt;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

const JIKAN_API: &str = "https://api.jikan.moe/v4";

/// The two catalogs Jikan can search. Distinct from the open `media_kind`
/// vocabulary stored on entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Anime,
    Manga,
}

impl MediaKind {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Anime => "anime",
            Self::Manga => "manga",
        }
    }

    /// Maps an entry's free-form kind string onto a searchable catalog.
    #[must_use]
    pub fn from_kind_str(kind: &str) -> Self {
        if kind.to_lowercase().contains("manga") {
            Self::Manga
        } else {
            Self::Anime
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Deserialize)]
struct JikanResponse<T> {
    data: T,
}

#[derive(Debug, Default, Deserialize)]
pub struct JikanMedia {
    pub mal_id: i64,
    pub title: Option<String>,
    pub title_english: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub episodes: Option<i32>,
    pub chapters: Option<i32>,
    pub score: Option<f32>,
    pub synopsis: Option<String>,
    pub images: Option<JikanImages>,
    pub studios: Option<Vec<JikanNamed>>,
    pub authors: Option<Vec<JikanNamed>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JikanImages {
    pub jpg: Option<JikanImageSet>,
}

#[derive(Debug, Default, Deserialize)]
pub struct JikanImageSet {
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JikanNamed {
    pub name: String,
}

impl JikanMedia {
    /// Display title; Jikan occasionally carries only the English one.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.title_english.as_deref())
            .unwrap_or("Unknown")
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|i| i.jpg.as_ref())
            .and_then(|j| j.image_url.as_deref())
    }

    fn into_snippet(self, kind: MediaKind) -> CatalogSnippet {
        let studio_or_author = match kind {
            MediaKind::Anime => &self.studios,
            MediaKind::Manga => &self.authors,
        }
        .as_ref()
        .and_then(|credited| credited.first())
        .map(|c| c.name.clone());

        CatalogSnippet {
            image_url: self.image_url().map(ToString::to_string),
            synopsis: self.synopsis,
            episode_count: match kind {
                MediaKind::Anime => self.episodes.and_then(|n| u32::try_from(n).ok()),
                MediaKind::Manga => None,
            },
            chapter_count: match kind {
                MediaKind::Manga => self.chapters.and_then(|n| u32::try_from(n).ok()),
                MediaKind::Anime => None,
            },
            resolved_media_kind: self.media_type,
            studio_or_author,
            score: self.score,
        }
    }
}

/// Normalized subset of a catalog result, used to enrich a [`CatalogEntry`].
///
/// [`CatalogEntry`]: crate::models::entry::CatalogEntry
#[derive(Debug, Clone, Default)]
pub struct CatalogSnippet {
    pub image_url: Option<String>,
    pub synopsis: Option<String>,
    pub episode_count: Option<u32>,
    pub chapter_count: Option<u32>,
    pub resolved_media_kind: Option<String>,
    pub studio_or_author: Option<String>,
    pub score: Option<f32>,
}

/// Best-effort catalog lookup, substitutable with a fixture-backed fake in
/// tests.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn lookup(&self, title: &str, kind: MediaKind) -> Option<CatalogSnippet>;
}

#[derive(Clone)]
pub struct JikanClient {
    client: Client,
    base_url: String,
}

impl Default for JikanClient {
    fn default() -> Self {
        Self::new()
    }
}

impl JikanClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(JIKAN_API)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Free-text search against one of the two catalogs. Errors propagate;
    /// the interactive search command reports them to the user.
    pub async fn search(
        &self,
        kind: MediaKind,
        query: &str,
        limit: u32,
    ) -> Result<Vec<JikanMedia>> {
        let url = format!(
            "{}/{}?q={}&limit={}",
            self.base_url,
            kind.path(),
            urlencoding::encode(query),
            limit
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Jikan API error: {} - {}", status, body));
        }

        let response: JikanResponse<Vec<JikanMedia>> = response.json().await?;

        Ok(response.data)
    }
}

#[async_trait]
impl CatalogLookup for JikanClient {
    async fn lookup(&self, title: &str, kind: MediaKind) -> Option<CatalogSnippet> {
        match self.search(kind, title, 1).await {
            Ok(results) => {
                if results.is_empty() {
                    debug!(title, %kind, "lookup found no results");
                }
                results.into_iter().next().map(|m| m.into_snippet(kind))
            }
            Err(e) => {
                debug!(title, %kind, error = %e, "lookup failed, treating as no result");
                None
            }
        }
    }
}
