use glossary_sync::SettingsStore;
use glossary_sync::settings::{CACHE_TTL_SECS, now_epoch_secs};
use glossary_sync_store::SqliteStore;

fn create_store() -> SqliteStore {
    SqliteStore::open_in_memory().unwrap()
}

#[test]
fn sync_times_start_empty() {
    let store = create_store();

    assert!(store.last_sync_times().unwrap().is_empty());
    assert_eq!(store.last_sync_time("af").unwrap(), None);
}

#[test]
fn recorded_time_is_readable() {
    let store = create_store();

    store.record_sync_time("af", 1_700_000_000).unwrap();

    assert_eq!(store.last_sync_time("af").unwrap(), Some(1_700_000_000));
}

#[test]
fn recording_preserves_other_locales() {
    let store = create_store();
    store.record_sync_time("af", 1_700_000_000).unwrap();
    store.record_sync_time("de", 1_700_000_100).unwrap();

    store.record_sync_time("af", 1_700_000_200).unwrap();

    let times = store.last_sync_times().unwrap();
    assert_eq!(times.get("af").copied(), Some(1_700_000_200));
    assert_eq!(times.get("de").copied(), Some(1_700_000_100));
}

#[test]
fn cached_export_round_trips() {
    let store = create_store();

    store.cache_export("af", "header\nhello,hallo,noun,\n").unwrap();

    assert_eq!(
        store.cached_export("af").unwrap().as_deref(),
        Some("header\nhello,hallo,noun,\n")
    );
}

#[test]
fn missing_exports_read_as_none() {
    let store = create_store();

    assert_eq!(store.cached_export("af").unwrap(), None);
}

#[test]
fn stale_exports_are_not_served() {
    let store = create_store();
    store.cache_export("af", "header\n").unwrap();

    store
        .set_export_cached_at("af", now_epoch_secs() - CACHE_TTL_SECS - 10)
        .unwrap();

    assert_eq!(store.cached_export("af").unwrap(), None);
    assert!(store.has_cached_export("af").unwrap());
}

#[test]
fn invalidate_drops_one_locale() {
    let store = create_store();
    store.cache_export("af", "header\n").unwrap();
    store.cache_export("de", "header\n").unwrap();

    store.invalidate_export("af").unwrap();

    assert!(!store.has_cached_export("af").unwrap());
    assert!(store.has_cached_export("de").unwrap());
}

#[test]
fn clear_drops_every_export() {
    let store = create_store();
    store.cache_export("af", "header\n").unwrap();
    store.cache_export("de", "header\n").unwrap();

    store.clear_exports().unwrap();

    assert!(!store.has_cached_export("af").unwrap());
    assert!(!store.has_cached_export("de").unwrap());
}

#[test]
fn clear_leaves_sync_times_alone() {
    let store = create_store();
    store.record_sync_time("af", 1_700_000_000).unwrap();
    store.cache_export("af", "header\n").unwrap();

    store.clear_exports().unwrap();

    assert_eq!(store.last_sync_time("af").unwrap(), Some(1_700_000_000));
}
