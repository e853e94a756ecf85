//! CLI subcommands.

pub mod batch;
pub mod parse;
pub mod surnames;

use std::path::Path;

use cedula_core::ScanConfig;

/// Load configuration from `--config`, falling back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ScanConfig> {
    match config_path {
        Some(path) => Ok(ScanConfig::from_file(Path::new(path))?),
        None => Ok(ScanConfig::default()),
    }
}
