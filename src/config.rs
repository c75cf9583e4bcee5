// ==========================================
// Configuration layer - file paths
// ==========================================
// The system has no configuration beyond the locations of the three
// source exports and the canonical output file. Defaults match the
// standard SAP export drop directory; an optional JSON file overrides them.
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::importer::error::{ImportError, ImportResult};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "portal.json";

/// File locations for both stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// UTF-16LE tab-delimited inventory export.
    pub inventory_path: PathBuf,
    /// UTF-16LE tab-delimited price export.
    pub price_path: PathBuf,
    /// Excel category dictionary.
    pub dictionary_path: PathBuf,
    /// Canonical merged CSV (merge stage output, portal input).
    pub canonical_path: PathBuf,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from("data/Inventory in Warehouse Report (Detailed).txt"),
            price_path: PathBuf::from("data/Price Report.txt"),
            dictionary_path: PathBuf::from("data/diccionario.xlsx"),
            canonical_path: PathBuf::from("datos_disponibilidad.csv"),
        }
    }
}

impl PortalConfig {
    /// Load from a JSON config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ImportError::ConfigReadError {
                path: path.as_ref().display().to_string(),
                message: e.to_string(),
            }
        })?;
        serde_json::from_str(&content).map_err(|e| ImportError::ConfigReadError {
            path: path.as_ref().display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load `portal.json` from the working directory if present,
    /// falling back to defaults otherwise.
    pub fn load() -> ImportResult<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            tracing::info!("Loading configuration from {}", CONFIG_FILE);
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}
