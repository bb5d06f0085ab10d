mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glossary_sync::SyncEngine;
use glossary_sync_remote::{ExportClient, ExportConfig};
use glossary_sync_store::SqliteStore;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "glossary-sync")]
#[command(about = "Synchronize locale glossaries from a remote translation platform")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sync glossaries for one or more locales into the local store
    Sync {
        /// Locales to sync (for example: af de pt)
        #[arg(required_unless_present = "all")]
        locales: Vec<String>,
        /// Sync every locale with a registered translation set
        #[arg(long)]
        all: bool,
    },
    /// Show a locale's remote export without importing it
    Preview {
        /// Locale to preview
        locale: String,
        /// Drop any cached payload and fetch a fresh one
        #[arg(long)]
        refresh: bool,
    },
    /// List registered translation sets and their last sync times
    Locales,
    /// Register a translation set so a locale can be synced
    AddLocale {
        /// Locale code (for example: af)
        locale: String,
        /// Display name (defaults to the locale code)
        #[arg(long)]
        name: Option<String>,
    },
}

fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("could not determine data directory")?;
    let dir = base.join("glossary-sync");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory: {}", dir.display()))?;
    Ok(dir)
}

fn open_store(app_config: &AppConfig) -> Result<SqliteStore> {
    let path = match &app_config.database_path {
        Some(path) => path.clone(),
        None => data_dir()?.join("glossary.db"),
    };
    SqliteStore::open(&path).map_err(|e| anyhow::anyhow!("{e}"))
}

fn all_locales(store: &SqliteStore) -> Result<Vec<String>> {
    let mut locales: Vec<String> = Vec::new();
    for set in store
        .translation_sets()
        .map_err(|e| anyhow::anyhow!("{e}"))?
    {
        if !locales.contains(&set.locale) {
            locales.push(set.locale);
        }
    }
    Ok(locales)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let app_config = config::load_config();
    let store = open_store(&app_config)?;
    let remote = ExportClient::new(ExportConfig {
        base_url: app_config.remote_base_url.clone(),
        ..ExportConfig::default()
    });

    match cli.command {
        Command::Sync { locales, all } => {
            let locales = if all { all_locales(&store)? } else { locales };
            if locales.is_empty() {
                anyhow::bail!("no locales to sync; register one with `glossary-sync add-locale`");
            }
            let engine = SyncEngine::new(&store, &remote, &store);
            commands::sync::run(&engine, &locales).await
        }
        Command::Preview { locale, refresh } => {
            let engine = SyncEngine::new(&store, &remote, &store);
            commands::preview::run(&engine, &store, &locale, refresh).await
        }
        Command::Locales => commands::locales::run(&store),
        Command::AddLocale { locale, name } => {
            commands::add_locale::run(&store, &locale, name.as_deref())
        }
    }
}
