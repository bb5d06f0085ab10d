use crate::entry::{ActorId, GlossaryEntry, GlossaryHandle};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no translation set for locale: {0}")]
    NoTranslationSet(String),
    #[error("storage error: {0}")]
    Storage(String),
}

/// Backing storage for glossary containers and their entries.
pub trait GlossaryStore: Send + Sync {
    /// Resolves the glossary container for a locale, creating the glossary
    /// when the locale's translation set exists but has none yet. When the
    /// locale has several translation sets the first one wins. A locale
    /// without any translation set is `NoTranslationSet`.
    fn container_for_locale(&self, locale: &str) -> Result<GlossaryHandle, StoreError>;

    /// Whether the container already holds an entry matching on all four
    /// imported columns.
    fn contains(
        &self,
        container: GlossaryHandle,
        entry: &GlossaryEntry,
    ) -> Result<bool, StoreError>;

    /// Inserts an entry attributed to `actor`. Returns whether a row was
    /// actually created.
    fn insert(
        &self,
        container: GlossaryHandle,
        entry: &GlossaryEntry,
        actor: ActorId,
    ) -> Result<bool, StoreError>;

    /// The user imported rows are attributed to: the configured actor if
    /// any, otherwise the first administrator, otherwise [`ActorId::FALLBACK`].
    fn current_actor(&self) -> ActorId;
}
