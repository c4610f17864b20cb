//! The collection manager: owns the single persisted collection record and
//! the denormalized last-added pointer.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::TrackerError;
use crate::models::entry::{
    CatalogEntry, CollectionBreakdown, CollectionStats, EntryPatch, NewEntry,
};
use crate::store::{StoreAdapter, keys};

/// Policy for the last-added pointer.
///
/// The original design only writes the pointer on `add`, so a later update
/// or removal of that entry leaves it stale. That staleness is documented
/// behavior, kept as the default; `EveryWrite` keeps the pointer in sync
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastAddedMode {
    #[default]
    AddOnly,
    EveryWrite,
}

pub struct CollectionManager<S> {
    store: S,
    last_added_mode: LastAddedMode,
}

impl<S: StoreAdapter> CollectionManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            last_added_mode: LastAddedMode::default(),
        }
    }

    pub const fn with_last_added_mode(store: S, mode: LastAddedMode) -> Self {
        Self {
            store,
            last_added_mode: mode,
        }
    }

    /// All entries in insertion order. Empty when nothing was ever stored.
    pub fn list(&self) -> Result<Vec<CatalogEntry>, TrackerError> {
        match self.store.read(keys::COLLECTION)? {
            Some(text) => {
                serde_json::from_str(&text).map_err(|e| TrackerError::corrupt(keys::COLLECTION, &e))
            }
            None => Ok(Vec::new()),
        }
    }

    /// Validates the candidate, assigns a fresh id and timestamp, appends it
    /// to the collection and refreshes the last-added pointer.
    ///
    /// Returns an owned copy of the stored entry.
    pub fn add(&self, candidate: NewEntry) -> Result<CatalogEntry, TrackerError> {
        if candidate.title.trim().is_empty() {
            return Err(TrackerError::Validation("title"));
        }
        if candidate.media_kind.trim().is_empty() {
            return Err(TrackerError::Validation("media_kind"));
        }
        if candidate.watch_status.trim().is_empty() {
            return Err(TrackerError::Validation("watch_status"));
        }

        let entry = CatalogEntry {
            id: uuid::Uuid::new_v4().to_string(),
            title: candidate.title.trim().to_string(),
            media_kind: candidate.media_kind.trim().to_string(),
            watch_status: candidate.watch_status.trim().to_string(),
            episode_count: candidate.episode_count,
            chapter_count: candidate.chapter_count,
            user_score: candidate.user_score,
            synopsis: candidate.synopsis,
            image_url: candidate.image_url,
            studio_or_author: candidate
                .studio_or_author
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            date_added: chrono::Utc::now().to_rfc3339(),
        };

        let mut entries = self.list()?;
        entries.push(entry.clone());
        self.write_record(keys::COLLECTION, &entries)?;
        self.write_record(keys::LAST_ADDED, &entry)?;

        info!(id = %entry.id, title = %entry.title, "added entry to collection");
        Ok(entry)
    }

    /// Shallow-merges the patch onto the entry with this id. Returns
    /// `Ok(None)` when no such entry exists; "not found" is never an error.
    pub fn update(
        &self,
        id: &str,
        patch: &EntryPatch,
    ) -> Result<Option<CatalogEntry>, TrackerError> {
        let mut entries = self.list()?;
        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            debug!(id, "update target not found");
            return Ok(None);
        };

        if let Some(title) = &patch.title {
            entry.title = title.clone();
        }
        if let Some(kind) = &patch.media_kind {
            entry.media_kind = kind.clone();
        }
        if let Some(status) = &patch.watch_status {
            entry.watch_status = status.clone();
        }
        if let Some(count) = patch.episode_count {
            entry.episode_count = Some(count);
        }
        if let Some(count) = patch.chapter_count {
            entry.chapter_count = Some(count);
        }
        if let Some(score) = patch.user_score {
            entry.user_score = Some(score);
        }
        if let Some(synopsis) = &patch.synopsis {
            entry.synopsis = Some(synopsis.clone());
        }
        if let Some(url) = &patch.image_url {
            entry.image_url = Some(url.clone());
        }
        if let Some(studio) = &patch.studio_or_author {
            entry.studio_or_author = studio.clone();
        }

        let updated = entry.clone();
        self.write_record(keys::COLLECTION, &entries)?;

        // AddOnly leaves the pointer stale on purpose.
        if self.last_added_mode == LastAddedMode::EveryWrite
            && self.last_added()?.is_some_and(|last| last.id == id)
        {
            self.write_record(keys::LAST_ADDED, &updated)?;
        }

        Ok(Some(updated))
    }

    /// Removes the entry with this id; a no-op when absent.
    pub fn remove(&self, id: &str) -> Result<(), TrackerError> {
        let mut entries = self.list()?;
        let before = entries.len();
        entries.retain(|e| e.id != id);

        if entries.len() == before {
            debug!(id, "remove target not found, nothing to do");
            return Ok(());
        }

        self.write_record(keys::COLLECTION, &entries)?;

        if self.last_added_mode == LastAddedMode::EveryWrite
            && self.last_added()?.is_some_and(|last| last.id == id)
        {
            self.store.delete(keys::LAST_ADDED)?;
        }

        info!(id, "removed entry from collection");
        Ok(())
    }

    /// The denormalized copy of the most recently added entry.
    pub fn last_added(&self) -> Result<Option<CatalogEntry>, TrackerError> {
        match self.store.read(keys::LAST_ADDED)? {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| TrackerError::corrupt(keys::LAST_ADDED, &e)),
            None => Ok(None),
        }
    }

    /// Home-page counters, recomputed from the stored collection each call.
    pub fn stats(&self) -> Result<CollectionStats, TrackerError> {
        let entries = self.list()?;
        Ok(CollectionStats {
            total: entries.len(),
            watching: entries
                .iter()
                .filter(|e| e.watch_status == "Watching")
                .count(),
            completed: entries
                .iter()
                .filter(|e| e.watch_status == "Completed")
                .count(),
            last_added: self.last_added()?,
        })
    }

    /// The entry with the maximum user score, missing scores counting as 0.
    /// Ties keep the earlier entry (the leader is only replaced when
    /// strictly exceeded).
    pub fn top_rated(&self) -> Result<Option<CatalogEntry>, TrackerError> {
        let entries = self.list()?;
        Ok(entries.into_iter().reduce(|top, current| {
            if current.user_score.unwrap_or(0.0) > top.user_score.unwrap_or(0.0) {
                current
            } else {
                top
            }
        }))
    }

    /// Counts by kind and status plus the average over scored entries.
    pub fn breakdown(&self) -> Result<CollectionBreakdown, TrackerError> {
        let entries = self.list()?;
        let mut breakdown = CollectionBreakdown {
            total: entries.len(),
            by_kind: std::collections::BTreeMap::new(),
            by_status: std::collections::BTreeMap::new(),
            average_score: None,
        };

        let mut total_score = 0.0f32;
        let mut scored = 0u32;

        for entry in &entries {
            *breakdown.by_kind.entry(entry.media_kind.clone()).or_insert(0) += 1;
            *breakdown
                .by_status
                .entry(entry.watch_status.clone())
                .or_insert(0) += 1;
            if let Some(score) = entry.user_score {
                total_score += score;
                scored += 1;
            }
        }

        if scored > 0 {
            breakdown.average_score = Some(total_score / scored as f32);
        }

        Ok(breakdown)
    }

    /// Deletes every record owned by the tracker, the reserved scores key
    /// included.
    pub fn clear(&self) -> Result<(), TrackerError> {
        self.store.delete(keys::COLLECTION)?;
        self.store.delete(keys::LAST_ADDED)?;
        self.store.delete(keys::USER_SCORES)?;
        info!("cleared collection");
        Ok(())
    }

    fn write_record<T: Serialize>(&self, key: &str, value: &T) -> Result<(), TrackerError> {
        let text = serde_json::to_string(value).map_err(|e| TrackerError::StoreWrite {
            key: key.to_string(),
            source: std::io::Error::other(e),
        })?;
        self.store.write(key, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn manager() -> CollectionManager<MemoryStore> {
        CollectionManager::new(MemoryStore::new())
    }

    fn candidate(title: &str, score: Option<f32>) -> NewEntry {
        NewEntry {
            title: title.to_string(),
            media_kind: "TV".to_string(),
            watch_status: "Watching".to_string(),
            user_score: score,
            ..NewEntry::default()
        }
    }

    #[test]
    fn add_assigns_id_and_timestamp_and_appends() {
        let manager = manager();
        manager.add(candidate("Death Note", Some(8.5))).unwrap();
        let added = manager.add(candidate("Steins;Gate", Some(9.0))).unwrap();

        assert!(!added.id.is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(&added.date_added).is_ok());

        let entries = manager.list().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.last().unwrap(), &added);
    }

    #[test]
    fn add_rejects_missing_required_fields() {
        let manager = manager();

        let missing_title = NewEntry {
            media_kind: "TV".to_string(),
            watch_status: "Watching".to_string(),
            ..NewEntry::default()
        };
        assert!(matches!(
            manager.add(missing_title),
            Err(TrackerError::Validation("title"))
        ));

        let blank_status = NewEntry {
            title: "Monster".to_string(),
            media_kind: "TV".to_string(),
            watch_status: "   ".to_string(),
            ..NewEntry::default()
        };
        assert!(matches!(
            manager.add(blank_status),
            Err(TrackerError::Validation("watch_status"))
        ));
        assert!(manager.list().unwrap().is_empty());
    }

    #[test]
    fn add_defaults_studio_to_unknown() {
        let manager = manager();
        let added = manager.add(candidate("Hyouka", None)).unwrap();
        assert_eq!(added.studio_or_author, "Unknown");
    }

    #[test]
    fn returned_entry_is_a_copy_not_a_live_handle() {
        let manager = manager();
        let mut added = manager.add(candidate("Mushishi", Some(8.0))).unwrap();
        added.title = "Tampered".to_string();

        let stored = manager.list().unwrap();
        assert_eq!(stored[0].title, "Mushishi");
    }

    #[test]
    fn list_length_tracks_adds_minus_removes() {
        let manager = manager();
        let a = manager.add(candidate("A", None)).unwrap();
        let b = manager.add(candidate("B", None)).unwrap();
        manager.add(candidate("C", None)).unwrap();

        manager.remove(&a.id).unwrap();
        manager.remove(&b.id).unwrap();
        manager.remove("no-such-id").unwrap();

        assert_eq!(manager.list().unwrap().len(), 1);
    }

    #[test]
    fn list_surfaces_corrupt_store() {
        let store = MemoryStore::new();
        store.write(keys::COLLECTION, "{not json").unwrap();
        let manager = CollectionManager::new(store);

        assert!(matches!(
            manager.list(),
            Err(TrackerError::StoreCorrupt { .. })
        ));
    }

    #[test]
    fn update_merges_provided_fields_only() {
        let manager = manager();
        let added = manager.add(candidate("Berserk", Some(9.0))).unwrap();

        let patch = EntryPatch {
            watch_status: Some("Completed".to_string()),
            episode_count: Some(25),
            ..EntryPatch::default()
        };
        let updated = manager.update(&added.id, &patch).unwrap().unwrap();

        assert_eq!(updated.watch_status, "Completed");
        assert_eq!(updated.episode_count, Some(25));
        assert_eq!(updated.title, "Berserk");
        assert_eq!(updated.user_score, Some(9.0));
        assert_eq!(updated.date_added, added.date_added);
    }

    #[test]
    fn update_unknown_id_returns_none_and_leaves_list_unchanged() {
        let manager = manager();
        manager.add(candidate("Planetes", None)).unwrap();
        let before = manager.list().unwrap();

        let patch = EntryPatch {
            title: Some("Other".to_string()),
            ..EntryPatch::default()
        };
        assert!(manager.update("missing", &patch).unwrap().is_none());
        assert_eq!(manager.list().unwrap(), before);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let manager = manager();
        manager.add(candidate("Baccano!", None)).unwrap();
        let before = manager.list().unwrap();

        manager.remove("missing").unwrap();
        assert_eq!(manager.list().unwrap(), before);
    }

    #[test]
    fn stats_counts_watching_and_completed() {
        let manager = manager();
        manager.add(candidate("A", Some(8.5))).unwrap();
        manager.add(candidate("B", None)).unwrap();
        let mut done = candidate("C", Some(9.0));
        done.watch_status = "Completed".to_string();
        manager.add(done).unwrap();

        let stats = manager.stats().unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.watching, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.last_added.unwrap().title, "C");

        assert_eq!(manager.top_rated().unwrap().unwrap().user_score, Some(9.0));
    }

    #[test]
    fn top_rated_empty_collection_is_none() {
        assert!(manager().top_rated().unwrap().is_none());
    }

    #[test]
    fn top_rated_tie_break_keeps_first() {
        let manager = manager();
        manager.add(candidate("Seven", Some(7.0))).unwrap();
        let first_nine = manager.add(candidate("Nine A", Some(9.0))).unwrap();
        manager.add(candidate("Nine B", Some(9.0))).unwrap();
        manager.add(candidate("Unscored", None)).unwrap();

        assert_eq!(manager.top_rated().unwrap().unwrap().id, first_nine.id);
    }

    #[test]
    fn last_added_stays_stale_in_add_only_mode() {
        let manager = manager();
        let added = manager.add(candidate("Gintama", Some(8.0))).unwrap();

        let patch = EntryPatch {
            user_score: Some(9.5),
            ..EntryPatch::default()
        };
        manager.update(&added.id, &patch).unwrap();
        assert_eq!(
            manager.last_added().unwrap().unwrap().user_score,
            Some(8.0)
        );

        manager.remove(&added.id).unwrap();
        assert_eq!(manager.last_added().unwrap().unwrap().id, added.id);
    }

    #[test]
    fn every_write_mode_keeps_last_added_in_sync() {
        let manager =
            CollectionManager::with_last_added_mode(MemoryStore::new(), LastAddedMode::EveryWrite);
        let added = manager.add(candidate("Texhnolyze", None)).unwrap();

        let patch = EntryPatch {
            user_score: Some(7.5),
            ..EntryPatch::default()
        };
        manager.update(&added.id, &patch).unwrap();
        assert_eq!(
            manager.last_added().unwrap().unwrap().user_score,
            Some(7.5)
        );

        manager.remove(&added.id).unwrap();
        assert!(manager.last_added().unwrap().is_none());
    }

    #[test]
    fn breakdown_counts_and_average() {
        let manager = manager();
        manager.add(candidate("A", Some(8.0))).unwrap();
        let mut manga = candidate("B", Some(6.0));
        manga.media_kind = "Manga".to_string();
        manga.watch_status = "Completed".to_string();
        manager.add(manga).unwrap();
        manager.add(candidate("C", None)).unwrap();

        let breakdown = manager.breakdown().unwrap();
        assert_eq!(breakdown.total, 3);
        assert_eq!(breakdown.by_kind["TV"], 2);
        assert_eq!(breakdown.by_kind["Manga"], 1);
        assert_eq!(breakdown.by_status["Watching"], 2);
        assert_eq!(breakdown.by_status["Completed"], 1);
        assert_eq!(breakdown.average_score, Some(7.0));
    }

    #[test]
    fn clear_removes_everything() {
        let manager = manager();
        manager.add(candidate("Kaiji", Some(8.0))).unwrap();
        manager.clear().unwrap();

        assert!(manager.list().unwrap().is_empty());
        assert!(manager.last_added().unwrap().is_none());
    }
}
