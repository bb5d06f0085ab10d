pub mod export;

pub use export::{ExportClient, ExportConfig};
