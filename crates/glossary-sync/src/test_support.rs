use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::entry::{ActorId, GlossaryEntry, GlossaryHandle};
use crate::settings::{CachedExport, SettingsError, SettingsStore, now_epoch_secs};
use crate::store::{GlossaryStore, StoreError};

/// In-memory glossary store for testing. Containers are numbered from one
/// in the order their locales were registered.
pub struct MemoryStore {
    locales: Vec<String>,
    entries: Mutex<BTreeMap<i64, Vec<GlossaryEntry>>>,
    actor: ActorId,
    broken: bool,
}

impl MemoryStore {
    pub fn with_locales(locales: &[&str]) -> Self {
        Self {
            locales: locales.iter().map(|l| (*l).to_owned()).collect(),
            entries: Mutex::new(BTreeMap::new()),
            actor: ActorId::FALLBACK,
            broken: false,
        }
    }

    /// A store whose backend is unreachable.
    pub fn broken() -> Self {
        Self {
            locales: Vec::new(),
            entries: Mutex::new(BTreeMap::new()),
            actor: ActorId::FALLBACK,
            broken: true,
        }
    }

    pub fn entries(&self, locale: &str) -> Vec<GlossaryEntry> {
        let Some(position) = self.locales.iter().position(|l| l == locale) else {
            return Vec::new();
        };
        self.entries
            .lock()
            .unwrap()
            .get(&(position as i64 + 1))
            .cloned()
            .unwrap_or_default()
    }
}

impl GlossaryStore for MemoryStore {
    fn container_for_locale(&self, locale: &str) -> Result<GlossaryHandle, StoreError> {
        if self.broken {
            return Err(StoreError::Storage("backend offline".to_owned()));
        }
        self.locales
            .iter()
            .position(|l| l == locale)
            .map(|position| GlossaryHandle::new(position as i64 + 1))
            .ok_or_else(|| StoreError::NoTranslationSet(locale.to_owned()))
    }

    fn contains(
        &self,
        container: GlossaryHandle,
        entry: &GlossaryEntry,
    ) -> Result<bool, StoreError> {
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .get(&container.value())
            .is_some_and(|held| held.iter().any(|e| e.is_duplicate_of(entry))))
    }

    fn insert(
        &self,
        container: GlossaryHandle,
        entry: &GlossaryEntry,
        _actor: ActorId,
    ) -> Result<bool, StoreError> {
        self.entries
            .lock()
            .unwrap()
            .entry(container.value())
            .or_default()
            .push(entry.clone());
        Ok(true)
    }

    fn current_actor(&self) -> ActorId {
        self.actor
    }
}

#[derive(Default)]
struct MemorySettingsState {
    sync_times: BTreeMap<String, i64>,
    exports: BTreeMap<String, CachedExport>,
}

/// In-memory settings backend for testing.
#[derive(Default)]
pub struct MemorySettings {
    state: Mutex<MemorySettingsState>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a payload is cached, fresh or not.
    pub fn has_cached_export(&self, locale: &str) -> bool {
        self.state.lock().unwrap().exports.contains_key(locale)
    }

    /// Rewrites the stored fetch time of a cached payload, for tests that
    /// need a stale cache.
    pub fn set_export_cached_at(&self, locale: &str, cached_at: i64) {
        let mut state = self.state.lock().unwrap();
        if let Some(cached) = state.exports.get_mut(locale) {
            cached.cached_at = cached_at;
        }
    }
}

impl SettingsStore for MemorySettings {
    fn last_sync_times(&self) -> Result<BTreeMap<String, i64>, SettingsError> {
        Ok(self.state.lock().unwrap().sync_times.clone())
    }

    fn record_sync_time(&self, locale: &str, timestamp: i64) -> Result<(), SettingsError> {
        self.state
            .lock()
            .unwrap()
            .sync_times
            .insert(locale.to_owned(), timestamp);
        Ok(())
    }

    fn cached_export(&self, locale: &str) -> Result<Option<String>, SettingsError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .exports
            .get(locale)
            .filter(|cached| cached.is_fresh(now_epoch_secs()))
            .map(|cached| cached.payload.clone()))
    }

    fn cache_export(&self, locale: &str, payload: &str) -> Result<(), SettingsError> {
        self.state.lock().unwrap().exports.insert(
            locale.to_owned(),
            CachedExport {
                cached_at: now_epoch_secs(),
                payload: payload.to_owned(),
            },
        );
        Ok(())
    }

    fn invalidate_export(&self, locale: &str) -> Result<(), SettingsError> {
        self.state.lock().unwrap().exports.remove(locale);
        Ok(())
    }

    fn clear_exports(&self) -> Result<(), SettingsError> {
        self.state.lock().unwrap().exports.clear();
        Ok(())
    }
}
