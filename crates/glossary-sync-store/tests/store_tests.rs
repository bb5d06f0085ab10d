use glossary_sync::{ActorId, GlossaryEntry, GlossaryStore, StoreError};
use glossary_sync_store::SqliteStore;

fn sample_entry(term: &str, translation: &str) -> GlossaryEntry {
    GlossaryEntry {
        term: term.to_owned(),
        translation: translation.to_owned(),
        part_of_speech: "noun".to_owned(),
        comment: "from tests".to_owned(),
        locale: "af".to_owned(),
    }
}

fn create_store() -> SqliteStore {
    SqliteStore::open_in_memory().unwrap()
}

#[test]
fn container_resolution_requires_a_translation_set() {
    let store = create_store();

    let result = store.container_for_locale("af");

    assert!(matches!(result, Err(StoreError::NoTranslationSet(locale)) if locale == "af"));
}

#[test]
fn container_created_on_first_resolution() {
    let store = create_store();
    store.create_translation_set("af", "Afrikaans").unwrap();

    let first = store.container_for_locale("af").unwrap();
    let second = store.container_for_locale("af").unwrap();

    assert_eq!(first, second);
}

#[test]
fn first_translation_set_wins() {
    let store = create_store();
    let older = store.create_translation_set("af", "Afrikaans").unwrap();
    store.create_translation_set("af", "Afrikaans (formal)").unwrap();

    let container = store.container_for_locale("af").unwrap();
    let sets = store.translation_sets().unwrap();

    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0].id, older);
    let entry = sample_entry("hello", "hallo");
    store.insert(container, &entry, ActorId::FALLBACK).unwrap();
    assert_eq!(store.entries(container).unwrap()[0].locale, "af");
}

#[test]
fn insert_reports_created_rows() {
    let store = create_store();
    store.create_translation_set("af", "Afrikaans").unwrap();
    let container = store.container_for_locale("af").unwrap();

    let created = store
        .insert(container, &sample_entry("hello", "hallo"), ActorId::FALLBACK)
        .unwrap();

    assert!(created);
    assert_eq!(store.entry_count(container).unwrap(), 1);
}

#[test]
fn duplicate_detection_matches_every_column() {
    let store = create_store();
    store.create_translation_set("af", "Afrikaans").unwrap();
    let container = store.container_for_locale("af").unwrap();
    store
        .insert(container, &sample_entry("hello", "hallo"), ActorId::FALLBACK)
        .unwrap();

    assert!(store.contains(container, &sample_entry("hello", "hallo")).unwrap());

    let mut different_comment = sample_entry("hello", "hallo");
    different_comment.comment = "another note".to_owned();
    assert!(!store.contains(container, &different_comment).unwrap());

    let mut different_pos = sample_entry("hello", "hallo");
    different_pos.part_of_speech = "interjection".to_owned();
    assert!(!store.contains(container, &different_pos).unwrap());
}

#[test]
fn stored_entries_keep_their_columns() {
    let store = create_store();
    store.create_translation_set("af", "Afrikaans").unwrap();
    let container = store.container_for_locale("af").unwrap();
    store
        .insert(container, &sample_entry("hello", "hallo"), ActorId::FALLBACK)
        .unwrap();

    let entries = store.entries(container).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].term, "hello");
    assert_eq!(entries[0].translation, "hallo");
    assert_eq!(entries[0].part_of_speech, "noun");
    assert_eq!(entries[0].comment, "from tests");
    assert_eq!(entries[0].locale, "af");
}

#[test]
fn actor_defaults_to_fallback() {
    let store = create_store();

    assert_eq!(store.current_actor(), ActorId::FALLBACK);
}

#[test]
fn first_administrator_is_the_default_actor() {
    let store = create_store();
    store.create_actor("eve", "editor").unwrap();
    let admin = store.create_actor("alex", "administrator").unwrap();
    store.create_actor("ana", "administrator").unwrap();

    assert_eq!(store.current_actor(), ActorId::new(admin));
}

#[test]
fn with_actor_overrides_the_fallback_chain() {
    let store = create_store();
    store.create_actor("alex", "administrator").unwrap();
    let store = store.with_actor(ActorId::new(42));

    assert_eq!(store.current_actor(), ActorId::new(42));
}
