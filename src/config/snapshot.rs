//! Snapshot run configuration

use serde::Deserialize;

use super::error::ConfigValidationError;

/// Configuration for the analytics snapshot run
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotConfig {
    /// Organization the snapshot is computed for
    #[serde(default = "default_org_id")]
    pub org_id: String,

    /// Seed demo survey data before computing the snapshot
    #[serde(default)]
    pub seed_demo: bool,
}

impl SnapshotConfig {
    /// Validate snapshot configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.org_id.is_empty() {
            return Err(ConfigValidationError::EmptyOrgId);
        }
        Ok(())
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            org_id: default_org_id(),
            seed_demo: false,
        }
    }
}

fn default_org_id() -> String {
    "demo-org".to_string()
}
