use anyhow::Result;
use glossary_sync::SettingsStore;
use glossary_sync::settings::now_epoch_secs;
use glossary_sync_store::SqliteStore;

/// List registered translation sets with their last sync times.
pub fn run(store: &SqliteStore) -> Result<()> {
    let sets = store
        .translation_sets()
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    if sets.is_empty() {
        println!("No translation sets on record. Add one with `glossary-sync add-locale`.");
        return Ok(());
    }

    let times = store.last_sync_times().map_err(|e| anyhow::anyhow!("{e}"))?;
    let now = now_epoch_secs();

    for set in &sets {
        let synced = match times.get(&set.locale) {
            Some(timestamp) => sync_age(now, *timestamp),
            None => "never synced".to_owned(),
        };
        println!("{:<8}  {:<24}  {synced}", set.locale, set.name);
    }

    Ok(())
}

fn sync_age(now: i64, timestamp: i64) -> String {
    let days = (now - timestamp).max(0) / 86400;
    match days {
        0 => "synced today".to_owned(),
        1 => "synced 1 day ago".to_owned(),
        n => format!("synced {n} days ago"),
    }
}
