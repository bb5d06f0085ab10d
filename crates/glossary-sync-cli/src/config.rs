use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Base URL of the translation platform exports are fetched from.
    #[serde(default = "default_remote_base_url")]
    pub remote_base_url: String,
    /// Where the glossary database lives. Defaults to a file in the
    /// platform data directory when unset.
    #[serde(default)]
    pub database_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remote_base_url: default_remote_base_url(),
            database_path: None,
        }
    }
}

fn default_remote_base_url() -> String {
    "https://translate.wordpress.org".into()
}

/// Config file path: `~/.config/glossary-sync/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("glossary-sync").join("config.toml"))
}

/// Load config from file, falling back to defaults if missing.
pub fn load_config() -> AppConfig {
    if let Some(path) = config_path()
        && let Ok(contents) = std::fs::read_to_string(&path)
    {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            return config;
        }
        eprintln!(
            "warning: failed to parse config at {}, using defaults",
            path.display()
        );
    }

    AppConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_public_platform() {
        let config = AppConfig::default();
        assert_eq!(config.remote_base_url, "https://translate.wordpress.org");
        assert!(config.database_path.is_none());
    }

    #[test]
    fn parse_full_config_from_toml() {
        let toml_str = r#"
remote_base_url = "https://translate.example.org"
database_path = "/var/lib/glossary/glossary.db"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.remote_base_url, "https://translate.example.org");
        assert_eq!(
            config.database_path.as_deref(),
            Some(std::path::Path::new("/var/lib/glossary/glossary.db"))
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.remote_base_url, "https://translate.wordpress.org");
        assert!(config.database_path.is_none());
    }

    #[test]
    fn partial_config_keeps_the_other_default() {
        let toml_str = r#"
database_path = "./glossary.db"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.remote_base_url, "https://translate.wordpress.org");
        assert!(config.database_path.is_some());
    }
}
