use std::time::Duration;

use glossary_sync::ExportSource;

/// Where and how glossary exports are fetched.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Base URL of the translation platform.
    pub base_url: String,
    /// How long to wait for the remote before giving up.
    pub timeout: Duration,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_url: "https://translate.wordpress.org".to_owned(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Fetches glossary exports from the translation platform over HTTP.
pub struct ExportClient {
    config: ExportConfig,
    client: reqwest::Client,
}

impl ExportClient {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// The export URL for a remote locale, following the platform's
    /// per-locale layout.
    pub fn export_url(&self, remote_locale: &str) -> String {
        format!(
            "{}/locale/{remote_locale}/default/glossary/-export/",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl ExportSource for ExportClient {
    fn label(&self) -> &str {
        let base = self.config.base_url.as_str();
        base.strip_prefix("https://")
            .or_else(|| base.strip_prefix("http://"))
            .unwrap_or(base)
    }

    async fn fetch_export(&self, remote_locale: &str) -> String {
        let response = self
            .client
            .get(self.export_url(remote_locale))
            .header("Accept", "text/csv")
            .header("User-Agent", "glossary-sync")
            .timeout(self.config.timeout)
            .send()
            .await;

        let Ok(response) = response else {
            return String::new();
        };
        // Exactly 200 carries an export; any other status means no payload.
        if response.status().as_u16() != 200 {
            return String::new();
        }
        response.text().await.unwrap_or_default()
    }
}
