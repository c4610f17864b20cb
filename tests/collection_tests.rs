//! End-to-end tests for the file-backed collection flows.

use std::path::PathBuf;

use hondana::TrackerError;
use hondana::cli::commands::sample_entries;
use hondana::models::entry::{EntryPatch, NewEntry};
use hondana::store::collection::CollectionManager;
use hondana::store::{FileStore, StoreAdapter, keys};

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("hondana-test-{}", uuid::Uuid::new_v4()))
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
fn collection_round_trips_through_the_file_store() {
    let dir = scratch_dir();
    let manager = CollectionManager::new(FileStore::open(&dir).unwrap());

    for sample in sample_entries() {
        manager.add(sample).unwrap();
    }
    let written = manager.list().unwrap();
    assert_eq!(written.len(), 15);

    // A fresh store over the same directory sees a structurally equal list.
    let reopened = CollectionManager::new(FileStore::open(&dir).unwrap());
    assert_eq!(reopened.list().unwrap(), written);
}

#[test]
fn seeded_collection_spotlights_the_expected_titles() {
    let dir = scratch_dir();
    let manager = CollectionManager::new(FileStore::open(&dir).unwrap());

    for sample in sample_entries() {
        manager.add(sample).unwrap();
    }

    let last = manager.last_added().unwrap().unwrap();
    assert_eq!(last.title, "Mob Psycho 100");

    // Highest sample score is Fullmetal Alchemist: Brotherhood at 9.1.
    let top = manager.top_rated().unwrap().unwrap();
    assert_eq!(top.title, "Fullmetal Alchemist: Brotherhood");

    let stats = manager.stats().unwrap();
    assert_eq!(stats.total, 15);
    assert_eq!(stats.watching, 4);
    assert_eq!(stats.completed, 9);
}

#[test]
fn add_update_remove_scenario() {
    let dir = scratch_dir();
    let manager = CollectionManager::new(FileStore::open(&dir).unwrap());

    let a = manager.add(candidate("Chihayafuru", Some(8.5))).unwrap();
    let b = manager.add(candidate("Land of the Lustrous", None)).unwrap();
    manager.add(candidate("March Comes in Like a Lion", Some(9.0))).unwrap();

    let stats = manager.stats().unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(manager.top_rated().unwrap().unwrap().user_score, Some(9.0));

    let patch = EntryPatch {
        watch_status: Some("Completed".to_string()),
        user_score: Some(9.5),
        ..EntryPatch::default()
    };
    let updated = manager.update(&b.id, &patch).unwrap().unwrap();
    assert_eq!(updated.title, "Land of the Lustrous");
    assert_eq!(updated.user_score, Some(9.5));

    manager.remove(&a.id).unwrap();
    let remaining = manager.list().unwrap();
    assert_eq!(remaining.len(), 2);
    assert!(remaining.iter().all(|e| e.id != a.id));

    // New top after the update.
    assert_eq!(manager.top_rated().unwrap().unwrap().id, b.id);
}

#[test]
fn corrupt_collection_record_is_surfaced_not_defaulted() {
    let dir = scratch_dir();
    let store = FileStore::open(&dir).unwrap();
    store.write(keys::COLLECTION, "not json at all").unwrap();

    let manager = CollectionManager::new(store);
    match manager.list() {
        Err(TrackerError::StoreCorrupt { key, .. }) => assert_eq!(key, keys::COLLECTION),
        other => panic!("expected StoreCorrupt, got {other:?}"),
    }
}

#[test]
fn clear_wipes_the_data_directory_records() {
    let dir = scratch_dir();
    let manager = CollectionManager::new(FileStore::open(&dir).unwrap());

    manager.add(candidate("Nichijou", Some(8.0))).unwrap();
    manager.clear().unwrap();

    assert!(manager.list().unwrap().is_empty());
    assert!(manager.last_added().unwrap().is_none());
    assert!(!dir.join("animeCollection.json").exists());
}
