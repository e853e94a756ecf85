//! Configuration structures for the scan pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CedulaError, Result};

/// Main configuration for the cedula pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Extraction configuration.
    pub extraction: ExtractionConfig,

    /// Surname dictionary configuration.
    pub dictionary: DictionaryConfig,
}

/// Extraction behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Enable the digits-only fallback strategy. Strict deployments that
    /// only accept full cedula payloads turn this off.
    pub enable_fallback: bool,

    /// Strip keyboard-wedge control markers from input before parsing.
    pub clean_wedge_buffer: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            enable_fallback: true,
            clean_wedge_buffer: false,
        }
    }
}

/// Surname dictionary configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Replace the built-in surname list with entries from this file
    /// (one surname per line, `#` comments allowed).
    pub file: Option<PathBuf>,
}

impl ScanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CedulaError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CedulaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
