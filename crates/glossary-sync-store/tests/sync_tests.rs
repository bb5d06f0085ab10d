use glossary_sync::settings::now_epoch_secs;
use glossary_sync::{ExportSource, GlossaryStore, SettingsStore, SyncEngine, SyncError};
use glossary_sync_store::SqliteStore;

const AF_CSV: &str = "en,af,pos,description\nhello,hallo,noun,greeting\n";

struct FakeRemote {
    payload: String,
}

impl FakeRemote {
    fn new(payload: &str) -> Self {
        Self {
            payload: payload.to_owned(),
        }
    }
}

#[async_trait::async_trait]
impl ExportSource for FakeRemote {
    fn label(&self) -> &str {
        "fake remote"
    }

    async fn fetch_export(&self, _remote_locale: &str) -> String {
        self.payload.clone()
    }
}

fn create_store() -> SqliteStore {
    let store = SqliteStore::open_in_memory().unwrap();
    store.create_translation_set("af", "Afrikaans").unwrap();
    store
}

#[tokio::test]
async fn af_glossary_imports_end_to_end() {
    let store = create_store();
    let remote = FakeRemote::new(AF_CSV);
    let engine = SyncEngine::new(&store, &remote, &store);

    let before = now_epoch_secs();
    let summary = engine.sync_locale("af").await.unwrap();
    let after = now_epoch_secs();

    assert_eq!(summary.imported, 1);
    assert_eq!(summary.skipped, 0);

    let container = store.container_for_locale("af").unwrap();
    let entries = store.entries(container).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].term, "hello");
    assert_eq!(entries[0].translation, "hallo");
    assert_eq!(entries[0].part_of_speech, "noun");
    assert_eq!(entries[0].comment, "greeting");
    assert_eq!(entries[0].locale, "af");

    let recorded = store.last_sync_time("af").unwrap().unwrap();
    assert!(recorded >= before && recorded <= after);
}

#[tokio::test]
async fn resyncing_the_same_export_imports_nothing() {
    let store = create_store();
    let remote = FakeRemote::new(AF_CSV);
    let engine = SyncEngine::new(&store, &remote, &store);

    let first = engine.sync_locale("af").await.unwrap();
    let second = engine.sync_locale("af").await.unwrap();

    assert_eq!(first.imported, 1);
    assert_eq!(second.imported, 0);
    assert_eq!(second.skipped, 1);

    let container = store.container_for_locale("af").unwrap();
    assert_eq!(store.entry_count(container).unwrap(), 1);
}

#[tokio::test]
async fn empty_remote_leaves_no_timestamp() {
    let store = create_store();
    let remote = FakeRemote::new("");
    let engine = SyncEngine::new(&store, &remote, &store);

    let summary = engine.sync_locale("af").await.unwrap();

    assert_eq!(summary.imported, 0);
    assert_eq!(store.last_sync_time("af").unwrap(), None);
}

#[tokio::test]
async fn a_failed_locale_does_not_block_others() {
    let store = create_store();
    let remote = FakeRemote::new(AF_CSV);
    let engine = SyncEngine::new(&store, &remote, &store);

    let report = engine
        .sync_locales(&["de".to_owned(), "af".to_owned()])
        .await;

    assert!(report.any_failed());
    assert!(matches!(
        report.outcomes[0].outcome,
        Err(SyncError::ContainerResolution(_))
    ));
    assert_eq!(report.outcomes[1].outcome.as_ref().unwrap().imported, 1);
    assert_eq!(report.total_imported(), 1);
}

#[tokio::test]
async fn completed_sync_drops_the_cached_export() {
    let store = create_store();
    store.cache_export("af", AF_CSV).unwrap();
    let remote = FakeRemote::new(AF_CSV);
    let engine = SyncEngine::new(&store, &remote, &store);

    engine.sync_locale("af").await.unwrap();

    assert!(!store.has_cached_export("af").unwrap());
}
