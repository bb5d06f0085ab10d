pub mod csv;
pub mod entry;
pub mod feedback;
pub mod locale;
pub mod remote;
pub mod settings;
pub mod store;
pub mod sync;

pub use csv::{parse as parse_export, Record};
pub use entry::{ActorId, GlossaryEntry, GlossaryHandle};
pub use feedback::Feedback;
pub use locale::remote_locale;
pub use remote::ExportSource;
pub use settings::{CachedExport, SettingsError, SettingsStore};
pub use store::{GlossaryStore, StoreError};
pub use sync::{LocaleOutcome, LocaleSummary, SyncEngine, SyncError, SyncReport};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
