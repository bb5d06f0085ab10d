use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;

use glossary_sync::settings::now_epoch_secs;
use glossary_sync::{
    ActorId, CachedExport, GlossaryEntry, GlossaryHandle, GlossaryStore, SettingsError,
    SettingsStore, StoreError,
};

use crate::schema;

/// A locale's translation set row.
#[derive(Debug, Clone)]
pub struct TranslationSet {
    pub id: i64,
    pub locale: String,
    pub name: String,
}

/// Settings key holding the per-locale sync timestamps as one JSON map.
const IMPORT_TIMES_KEY: &str = "glossary_sync.import_times";

/// Key prefix for cached export payloads, one settings row per locale.
const EXPORT_CACHE_PREFIX: &str = "glossary_sync.export_cache.";

/// A SQLite-backed glossary store that implements `GlossaryStore` and
/// `SettingsStore`.
pub struct SqliteStore {
    conn: Mutex<rusqlite::Connection>,
    actor: Option<ActorId>,
}

impl SqliteStore {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path) -> Result<Self, SqliteError> {
        let conn =
            rusqlite::Connection::open(path).map_err(|e| SqliteError::Database(e.to_string()))?;

        let mut store = Self {
            conn: Mutex::new(conn),
            actor: None,
        };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, SqliteError> {
        let conn = rusqlite::Connection::open_in_memory()
            .map_err(|e| SqliteError::Database(e.to_string()))?;

        let mut store = Self {
            conn: Mutex::new(conn),
            actor: None,
        };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&mut self) -> Result<(), SqliteError> {
        let conn = self.conn.get_mut().unwrap();
        schema::migrations()
            .to_latest(conn)
            .map_err(|e| SqliteError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Attribute imports to a specific user instead of walking the
    /// administrator fallback chain.
    pub fn with_actor(mut self, actor: ActorId) -> Self {
        self.actor = Some(actor);
        self
    }

    /// Register a translation set for a locale.
    pub fn create_translation_set(&self, locale: &str, name: &str) -> Result<i64, SqliteError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO translation_sets (locale, name) VALUES (?1, ?2)",
            rusqlite::params![locale, name],
        )
        .map_err(|e| SqliteError::Database(e.to_string()))?;
        Ok(conn.last_insert_rowid())
    }

    /// Register a user account.
    pub fn create_actor(&self, username: &str, role: &str) -> Result<i64, SqliteError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO actors (username, role) VALUES (?1, ?2)",
            rusqlite::params![username, role],
        )
        .map_err(|e| SqliteError::Database(e.to_string()))?;
        Ok(conn.last_insert_rowid())
    }

    /// Every registered translation set, oldest first.
    pub fn translation_sets(&self) -> Result<Vec<TranslationSet>, SqliteError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn
            .prepare("SELECT id, locale, name FROM translation_sets ORDER BY id")
            .map_err(|e| SqliteError::Database(e.to_string()))?;

        let sets = stmt
            .query_map([], Self::row_to_set)
            .map_err(|e| SqliteError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(sets)
    }

    /// How many entries a glossary container holds.
    pub fn entry_count(&self, container: GlossaryHandle) -> Result<u64, SqliteError> {
        let conn = self.conn.lock().unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM glossary_entries WHERE glossary_id = ?1",
                [container.value()],
                |row| row.get(0),
            )
            .map_err(|e| SqliteError::Database(e.to_string()))?;

        Ok(count as u64)
    }

    /// The entries of a glossary container, oldest first.
    pub fn entries(&self, container: GlossaryHandle) -> Result<Vec<GlossaryEntry>, SqliteError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn
            .prepare(
                "SELECT e.term, e.translation, e.part_of_speech, e.comment, s.locale
                 FROM glossary_entries e
                 JOIN glossaries g ON g.id = e.glossary_id
                 JOIN translation_sets s ON s.id = g.translation_set_id
                 WHERE e.glossary_id = ?1
                 ORDER BY e.id",
            )
            .map_err(|e| SqliteError::Database(e.to_string()))?;

        let entries = stmt
            .query_map([container.value()], Self::row_to_entry)
            .map_err(|e| SqliteError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(entries)
    }

    /// Whether any export payload is cached for a locale, fresh or not
    /// (for testing invalidation).
    pub fn has_cached_export(&self, locale: &str) -> Result<bool, SettingsError> {
        let conn = self.conn.lock().unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM settings WHERE key = ?1",
                [export_cache_key(locale)],
                |row| row.get(0),
            )
            .map_err(|e| SettingsError::Storage(e.to_string()))?;

        Ok(count > 0)
    }

    /// Rewrite the stored fetch time of a cached export (for testing
    /// staleness). A locale without a cached export is left alone.
    pub fn set_export_cached_at(&self, locale: &str, cached_at: i64) -> Result<(), SettingsError> {
        let conn = self.conn.lock().unwrap();

        let raw: String = match conn.query_row(
            "SELECT value FROM settings WHERE key = ?1",
            [export_cache_key(locale)],
            |row| row.get(0),
        ) {
            Ok(raw) => raw,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(()),
            Err(e) => return Err(SettingsError::Storage(e.to_string())),
        };

        let mut cached: CachedExport =
            serde_json::from_str(&raw).map_err(|e| SettingsError::Storage(e.to_string()))?;
        cached.cached_at = cached_at;

        let raw =
            serde_json::to_string(&cached).map_err(|e| SettingsError::Storage(e.to_string()))?;
        conn.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            rusqlite::params![export_cache_key(locale), raw],
        )
        .map_err(|e| SettingsError::Storage(e.to_string()))?;

        Ok(())
    }

    fn row_to_set(row: &rusqlite::Row) -> rusqlite::Result<TranslationSet> {
        Ok(TranslationSet {
            id: row.get(0)?,
            locale: row.get(1)?,
            name: row.get(2)?,
        })
    }

    fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<GlossaryEntry> {
        Ok(GlossaryEntry {
            term: row.get(0)?,
            translation: row.get(1)?,
            part_of_speech: row.get(2)?,
            comment: row.get(3)?,
            locale: row.get(4)?,
        })
    }
}

impl GlossaryStore for SqliteStore {
    fn container_for_locale(&self, locale: &str) -> Result<GlossaryHandle, StoreError> {
        let conn = self.conn.lock().unwrap();

        let set_id: i64 = match conn.query_row(
            "SELECT id FROM translation_sets WHERE locale = ?1 ORDER BY id LIMIT 1",
            [locale],
            |row| row.get(0),
        ) {
            Ok(id) => id,
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                return Err(StoreError::NoTranslationSet(locale.to_owned()));
            }
            Err(e) => return Err(StoreError::Storage(e.to_string())),
        };

        match conn.query_row(
            "SELECT id FROM glossaries WHERE translation_set_id = ?1 ORDER BY id LIMIT 1",
            [set_id],
            |row| row.get(0),
        ) {
            Ok(id) => Ok(GlossaryHandle::new(id)),
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                conn.execute(
                    "INSERT INTO glossaries (translation_set_id) VALUES (?1)",
                    [set_id],
                )
                .map_err(|e| StoreError::Storage(e.to_string()))?;
                Ok(GlossaryHandle::new(conn.last_insert_rowid()))
            }
            Err(e) => Err(StoreError::Storage(e.to_string())),
        }
    }

    fn contains(
        &self,
        container: GlossaryHandle,
        entry: &GlossaryEntry,
    ) -> Result<bool, StoreError> {
        let conn = self.conn.lock().unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM glossary_entries
                 WHERE glossary_id = ?1 AND term = ?2 AND translation = ?3
                   AND part_of_speech = ?4 AND comment = ?5",
                rusqlite::params![
                    container.value(),
                    entry.term,
                    entry.translation,
                    entry.part_of_speech,
                    entry.comment,
                ],
                |row| row.get(0),
            )
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        Ok(count > 0)
    }

    fn insert(
        &self,
        container: GlossaryHandle,
        entry: &GlossaryEntry,
        actor: ActorId,
    ) -> Result<bool, StoreError> {
        let conn = self.conn.lock().unwrap();

        let changed = conn
            .execute(
                "INSERT INTO glossary_entries
                    (glossary_id, term, translation, part_of_speech, comment, last_edited_by)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    container.value(),
                    entry.term,
                    entry.translation,
                    entry.part_of_speech,
                    entry.comment,
                    actor.value(),
                ],
            )
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        Ok(changed > 0)
    }

    fn current_actor(&self) -> ActorId {
        if let Some(actor) = self.actor {
            return actor;
        }

        let conn = self.conn.lock().unwrap();
        conn.query_row(
            "SELECT id FROM actors WHERE role = 'administrator' ORDER BY id LIMIT 1",
            [],
            |row| row.get(0),
        )
        .map(ActorId::new)
        .unwrap_or(ActorId::FALLBACK)
    }
}

impl SettingsStore for SqliteStore {
    fn last_sync_times(&self) -> Result<BTreeMap<String, i64>, SettingsError> {
        let conn = self.conn.lock().unwrap();
        read_sync_times(&conn)
    }

    fn record_sync_time(&self, locale: &str, timestamp: i64) -> Result<(), SettingsError> {
        let conn = self.conn.lock().unwrap();

        let mut times = read_sync_times(&conn)?;
        times.insert(locale.to_owned(), timestamp);

        let raw =
            serde_json::to_string(&times).map_err(|e| SettingsError::Storage(e.to_string()))?;
        conn.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            rusqlite::params![IMPORT_TIMES_KEY, raw],
        )
        .map_err(|e| SettingsError::Storage(e.to_string()))?;

        Ok(())
    }

    fn cached_export(&self, locale: &str) -> Result<Option<String>, SettingsError> {
        let conn = self.conn.lock().unwrap();

        let raw: String = match conn.query_row(
            "SELECT value FROM settings WHERE key = ?1",
            [export_cache_key(locale)],
            |row| row.get(0),
        ) {
            Ok(raw) => raw,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(SettingsError::Storage(e.to_string())),
        };

        let cached: CachedExport =
            serde_json::from_str(&raw).map_err(|e| SettingsError::Storage(e.to_string()))?;
        if cached.is_fresh(now_epoch_secs()) {
            Ok(Some(cached.payload))
        } else {
            Ok(None)
        }
    }

    fn cache_export(&self, locale: &str, payload: &str) -> Result<(), SettingsError> {
        let conn = self.conn.lock().unwrap();

        let cached = CachedExport {
            cached_at: now_epoch_secs(),
            payload: payload.to_owned(),
        };
        let raw =
            serde_json::to_string(&cached).map_err(|e| SettingsError::Storage(e.to_string()))?;
        conn.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            rusqlite::params![export_cache_key(locale), raw],
        )
        .map_err(|e| SettingsError::Storage(e.to_string()))?;

        Ok(())
    }

    fn invalidate_export(&self, locale: &str) -> Result<(), SettingsError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "DELETE FROM settings WHERE key = ?1",
            [export_cache_key(locale)],
        )
        .map_err(|e| SettingsError::Storage(e.to_string()))?;
        Ok(())
    }

    fn clear_exports(&self) -> Result<(), SettingsError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "DELETE FROM settings WHERE key LIKE ?1",
            [format!("{EXPORT_CACHE_PREFIX}%")],
        )
        .map_err(|e| SettingsError::Storage(e.to_string()))?;
        Ok(())
    }
}

/// Errors specific to SQLite-backed storage.
#[derive(Debug, thiserror::Error)]
pub enum SqliteError {
    #[error("database error: {0}")]
    Database(String),

    #[error("migration error: {0}")]
    Migration(String),
}

fn export_cache_key(locale: &str) -> String {
    format!("{EXPORT_CACHE_PREFIX}{locale}")
}

fn read_sync_times(conn: &rusqlite::Connection) -> Result<BTreeMap<String, i64>, SettingsError> {
    let raw: String = match conn.query_row(
        "SELECT value FROM settings WHERE key = ?1",
        [IMPORT_TIMES_KEY],
        |row| row.get(0),
    ) {
        Ok(raw) => raw,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(BTreeMap::new()),
        Err(e) => return Err(SettingsError::Storage(e.to_string())),
    };

    serde_json::from_str(&raw).map_err(|e| SettingsError::Storage(e.to_string()))
}
