/// Where glossary exports come from.
///
/// Fetching is total: any failure (unreachable host, unexpected status,
/// timeout) is reported as an empty payload, never as an error. Callers
/// treat an empty payload as "nothing to import".
#[async_trait::async_trait]
pub trait ExportSource: Send + Sync {
    /// Human-readable name of the source, used in feedback messages.
    fn label(&self) -> &str;

    /// Fetches the raw export for `remote_locale`. The caller is expected
    /// to map its local locale through [`crate::remote_locale`] first.
    async fn fetch_export(&self, remote_locale: &str) -> String;
}
