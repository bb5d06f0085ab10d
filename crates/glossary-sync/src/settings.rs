use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// How long a cached export payload stays servable.
pub const CACHE_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings error: {0}")]
    Storage(String),
}

/// A raw export payload held back for preview, stamped with when it
/// was fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedExport {
    pub cached_at: i64,
    pub payload: String,
}

impl CachedExport {
    pub fn is_fresh(&self, now: i64) -> bool {
        now - self.cached_at < CACHE_TTL_SECS
    }
}

/// Durable bookkeeping that sits beside the glossary itself: per-locale
/// sync timestamps and short-lived export caches.
pub trait SettingsStore: Send + Sync {
    /// Every recorded sync time, keyed by locale.
    fn last_sync_times(&self) -> Result<BTreeMap<String, i64>, SettingsError>;

    fn last_sync_time(&self, locale: &str) -> Result<Option<i64>, SettingsError> {
        Ok(self.last_sync_times()?.get(locale).copied())
    }

    /// Records when `locale` last completed a sync. Timestamps for other
    /// locales are preserved.
    fn record_sync_time(&self, locale: &str, timestamp: i64) -> Result<(), SettingsError>;

    /// The cached export payload for `locale`, if one exists and is still
    /// fresh. Expired payloads are never served.
    fn cached_export(&self, locale: &str) -> Result<Option<String>, SettingsError>;

    fn cache_export(&self, locale: &str, payload: &str) -> Result<(), SettingsError>;

    fn invalidate_export(&self, locale: &str) -> Result<(), SettingsError>;

    fn clear_exports(&self) -> Result<(), SettingsError>;
}

pub fn now_epoch_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
