use anyhow::Result;
use glossary_sync_store::SqliteStore;

/// Register a translation set so a locale can be synced.
pub fn run(store: &SqliteStore, locale: &str, name: Option<&str>) -> Result<()> {
    let sets = store
        .translation_sets()
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    if sets.iter().any(|set| set.locale == locale) {
        anyhow::bail!("locale {locale} already has a translation set");
    }

    let name = name.unwrap_or(locale);
    store
        .create_translation_set(locale, name)
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    println!("Registered translation set \"{name}\" for {locale}.");
    Ok(())
}
