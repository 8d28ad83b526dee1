//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `LITERACY_PULSE_` prefix and nested values use underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use literacy_pulse::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Storing data under {}", config.storage.data_dir.display());
//! ```

mod error;
mod snapshot;
mod storage;

pub use error::{ConfigError, ConfigValidationError};
pub use snapshot::SnapshotConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the analytics snapshot run.
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every field carries a default, so a bare environment loads.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Storage configuration (backend choice, data directory)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Snapshot configuration (target organization, demo seeding)
    #[serde(default)]
    pub snapshot: SnapshotConfig,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `LITERACY_PULSE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `LITERACY_PULSE__STORAGE__BACKEND=memory` -> `storage.backend = Memory`
    /// - `LITERACY_PULSE__SNAPSHOT__ORG_ID=acme` -> `snapshot.org_id = "acme"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LITERACY_PULSE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.storage.validate()?;
        self.snapshot.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            snapshot: SnapshotConfig::default(),
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info,literacy_pulse=debug".to_string()
}
