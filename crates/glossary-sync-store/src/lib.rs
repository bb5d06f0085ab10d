pub mod schema;
pub mod store;

pub use store::{SqliteError, SqliteStore, TranslationSet};
