use anyhow::Result;
use glossary_sync::{Record, SettingsStore, SyncEngine};

const MAX_COLUMN_WIDTH: usize = 28;

/// Print a locale's export rows without importing anything. Serves the
/// cached payload when one is fresh unless `refresh` drops it first.
pub async fn run(
    engine: &SyncEngine<'_>,
    settings: &dyn SettingsStore,
    locale: &str,
    refresh: bool,
) -> Result<()> {
    if refresh {
        settings
            .invalidate_export(locale)
            .map_err(|e| anyhow::anyhow!("{e}"))?;
    }

    let records = engine.preview(locale).await;
    if records.is_empty() {
        println!("No glossary rows for {locale}.");
        return Ok(());
    }

    print_records(&records);
    Ok(())
}

fn print_records(records: &[Record]) {
    let term_width = column_width(records.iter().map(|r| r.term.as_str()));
    let translation_width = column_width(records.iter().map(|r| r.translation.as_str()));
    let pos_width = column_width(records.iter().map(|r| r.part_of_speech.as_str()));

    for record in records {
        println!(
            "{:<term_width$}  {:<translation_width$}  {:<pos_width$}  {}",
            truncate(&record.term, term_width),
            truncate(&record.translation, translation_width),
            truncate(&record.part_of_speech, pos_width),
            record.comment,
        );
    }

    println!("\n{} rows", records.len());
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_COLUMN_WIDTH)
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_owned()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{truncated}…")
    }
}
