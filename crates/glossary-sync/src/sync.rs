use crate::csv::{self, Record};
use crate::entry::GlossaryEntry;
use crate::feedback::Feedback;
use crate::locale::remote_locale;
use crate::remote::ExportSource;
use crate::settings::{SettingsStore, now_epoch_secs};
use crate::store::{GlossaryStore, StoreError};

/// Errors that stop a locale's sync outright.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("no glossary container for locale: {0}")]
    ContainerResolution(String),

    #[error("glossary storage unavailable: {0}")]
    StorageUnavailable(String),
}

/// Counts and feedback from syncing a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleSummary {
    pub imported: u64,
    pub skipped: u64,
    pub feedback: Vec<Feedback>,
}

/// One locale's result within a batch.
#[derive(Debug)]
pub struct LocaleOutcome {
    pub locale: String,
    pub outcome: Result<LocaleSummary, SyncError>,
}

#[derive(Debug, Default)]
pub struct SyncReport {
    pub outcomes: Vec<LocaleOutcome>,
}

impl SyncReport {
    pub fn any_failed(&self) -> bool {
        self.outcomes.iter().any(|o| o.outcome.is_err())
    }

    pub fn total_imported(&self) -> u64 {
        self.outcomes
            .iter()
            .filter_map(|o| o.outcome.as_ref().ok())
            .map(|summary| summary.imported)
            .sum()
    }
}

/// Pulls glossary exports from a remote source into local storage.
///
/// The engine owns none of its collaborators; callers hand in the store,
/// the remote and the settings backend, which keeps every seam swappable
/// in tests.
pub struct SyncEngine<'a> {
    store: &'a dyn GlossaryStore,
    remote: &'a dyn ExportSource,
    settings: &'a dyn SettingsStore,
}

impl<'a> SyncEngine<'a> {
    pub fn new(
        store: &'a dyn GlossaryStore,
        remote: &'a dyn ExportSource,
        settings: &'a dyn SettingsStore,
    ) -> Self {
        Self {
            store,
            remote,
            settings,
        }
    }

    /// Syncs one locale.
    ///
    /// Resolves the glossary container first; a locale without a
    /// translation set fails hard before anything is fetched. An empty
    /// remote payload completes with zero imports and does not record a
    /// sync time. Rows that cannot be imported are skipped with a
    /// warning, and settings failures after the import degrade to
    /// warnings as well.
    pub async fn sync_locale(&self, locale: &str) -> Result<LocaleSummary, SyncError> {
        let container = match self.store.container_for_locale(locale) {
            Ok(container) => container,
            Err(StoreError::NoTranslationSet(locale)) => {
                return Err(SyncError::ContainerResolution(locale));
            }
            Err(StoreError::Storage(message)) => {
                return Err(SyncError::StorageUnavailable(message));
            }
        };

        let mut summary = LocaleSummary::default();
        let payload = self.remote.fetch_export(remote_locale(locale)).await;
        if payload.is_empty() {
            summary.feedback.push(Feedback::info(format!(
                "{} returned no export for {locale}",
                self.remote.label()
            )));
            return Ok(summary);
        }

        let actor = self.store.current_actor();
        for record in csv::parse(&payload) {
            let entry = GlossaryEntry {
                term: record.term,
                translation: record.translation,
                part_of_speech: record.part_of_speech,
                comment: record.comment,
                locale: locale.to_owned(),
            };
            if !entry.is_valid() {
                summary.skipped += 1;
                continue;
            }
            match self.store.contains(container, &entry) {
                Ok(true) => {
                    summary.skipped += 1;
                    continue;
                }
                Ok(false) => {}
                Err(error) => {
                    summary.skipped += 1;
                    summary.feedback.push(Feedback::warning(format!(
                        "skipping {} for {locale}: {error}",
                        entry.term
                    )));
                    continue;
                }
            }
            match self.store.insert(container, &entry, actor) {
                Ok(true) => summary.imported += 1,
                Ok(false) => summary.skipped += 1,
                Err(error) => {
                    summary.skipped += 1;
                    summary.feedback.push(Feedback::warning(format!(
                        "skipping {} for {locale}: {error}",
                        entry.term
                    )));
                }
            }
        }

        if let Err(error) = self.settings.record_sync_time(locale, now_epoch_secs()) {
            summary.feedback.push(Feedback::warning(format!(
                "could not record sync time for {locale}: {error}"
            )));
        }
        if let Err(error) = self.settings.invalidate_export(locale) {
            summary.feedback.push(Feedback::warning(format!(
                "could not drop cached export for {locale}: {error}"
            )));
        }

        Ok(summary)
    }

    /// Syncs each locale in order. A failed locale is recorded in the
    /// report and the batch moves on to the next one.
    pub async fn sync_locales(&self, locales: &[String]) -> SyncReport {
        let mut report = SyncReport::default();
        for locale in locales {
            let outcome = self.sync_locale(locale).await;
            report.outcomes.push(LocaleOutcome {
                locale: locale.clone(),
                outcome,
            });
        }
        report
    }

    /// Parses the export for a locale without importing anything.
    ///
    /// Serves a cached payload when a fresh one exists, otherwise fetches
    /// and caches the result for the next preview. The glossary itself is
    /// never touched.
    pub async fn preview(&self, locale: &str) -> Vec<Record> {
        if let Ok(Some(payload)) = self.settings.cached_export(locale) {
            return csv::parse(&payload);
        }

        let payload = self.remote.fetch_export(remote_locale(locale)).await;
        if !payload.is_empty() {
            // Caching is best effort; preview output does not depend on it.
            let _ = self.settings.cache_export(locale, &payload);
        }
        csv::parse(&payload)
    }
}
