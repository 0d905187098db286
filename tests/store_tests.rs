//! Data store and cache integration tests.

use fixgrade::config::DataConfig;
use fixgrade::data::{DataEvent, DatasetCache, DataStore};
use fixgrade::model::Device;
use std::fs;

fn device(name: &str) -> Device {
    Device {
        name: name.to_string(),
        title: None,
        repairability_score: Some(6.0),
        scorecard_version: None,
        brand: None,
        link: None,
        teardown_urls: Vec::new(),
    }
}

fn offline_config(dir: &tempfile::TempDir) -> DataConfig {
    DataConfig {
        cache_dir: Some(dir.path().to_path_buf()),
        offline: true,
        ..Default::default()
    }
}

#[test]
fn cache_survives_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = DataStore::new(&offline_config(&dir)).unwrap();

    assert!(store.load_cached().is_none());

    store.cache().write(&[device("a"), device("b")]).unwrap();
    let cached = store.load_cached().unwrap();
    assert_eq!(cached.len(), 2);
}

#[test]
fn corrupt_cache_falls_through_to_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let cache = DatasetCache::new(Some(dir.path().to_path_buf())).unwrap();

    fs::write(cache.path(), "][ definitely not json").unwrap();

    // Read fails safe: no panic, no Some, and the poisoned entry is gone
    assert!(cache.read().is_none());
    assert!(!cache.path().exists());

    // The next read is a clean miss
    assert!(cache.read().is_none());
}

#[test]
fn cache_tolerates_unknown_fields() {
    let dir = tempfile::tempdir().unwrap();
    let cache = DatasetCache::new(Some(dir.path().to_path_buf())).unwrap();

    // A newer generator may add fields; the cache read must not reject them
    fs::write(
        cache.path(),
        r#"[{"name":"X","repairability_score":4,"future_field":{"a":1}}]"#,
    )
    .unwrap();

    let cached = cache.read().unwrap();
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].integral_score(), Some(4));
}

#[test]
fn offline_store_spawns_nothing_and_reports_it() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DataStore::new(&offline_config(&dir)).unwrap();

    let (tx, rx) = std::sync::mpsc::channel::<DataEvent>();
    let tx2 = tx.clone();
    assert!(!store.spawn_fetch(move |e| drop(tx.send(e))));
    assert!(!store.spawn_freshness_probe(move |e| drop(tx2.send(e))));

    // No worker was started, so nothing ever arrives
    assert!(rx
        .recv_timeout(std::time::Duration::from_millis(50))
        .is_err());
}

#[test]
fn stale_generation_detection() {
    let dir = tempfile::tempdir().unwrap();
    let store = DataStore::new(&offline_config(&dir)).unwrap();

    // Before any fetch, generation 0 results are current
    assert!(!store.is_stale(0));
    assert!(!store.is_stale(1));
}
