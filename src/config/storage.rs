//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ConfigValidationError;

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory for the JSON file store
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Which store implementation to run against
    #[serde(default)]
    pub backend: StorageBackend,
}

/// Available storage backends
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local store, lost on exit
    Memory,
    /// JSON files under `data_dir`, one directory per organization
    #[default]
    File,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyDataDir);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            backend: StorageBackend::default(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
