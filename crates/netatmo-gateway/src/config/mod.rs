//! Exporter config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use netatmo_core::error::{ExporterError, Result};

pub use schema::ExporterConfig;

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| ExporterError::Config(format!("read {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| ExporterError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
