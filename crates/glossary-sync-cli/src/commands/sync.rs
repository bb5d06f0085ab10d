use anyhow::Result;
use glossary_sync::{Feedback, SyncEngine};

/// Print feedback items to stderr.
pub fn print_feedback(feedback: &[Feedback]) {
    for item in feedback {
        eprintln!("{item}");
    }
}

/// Sync the given locales and print per-locale results to stdout,
/// warnings to stderr. Fails after printing when any locale failed.
pub async fn run(engine: &SyncEngine<'_>, locales: &[String]) -> Result<()> {
    let report = engine.sync_locales(locales).await;

    for outcome in &report.outcomes {
        match &outcome.outcome {
            Ok(summary) => {
                print_feedback(&summary.feedback);
                println!(
                    "{}: {} imported ({} skipped)",
                    outcome.locale, summary.imported, summary.skipped
                );
            }
            Err(error) => {
                eprintln!("{}: sync failed: {error}", outcome.locale);
            }
        }
    }

    if report.any_failed() {
        anyhow::bail!("some locales failed to sync");
    }

    println!("Imported {} entries in total.", report.total_imported());
    Ok(())
}
