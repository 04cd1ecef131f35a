//! Landscape snapshot configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where assembled landscape snapshots are read from
#[derive(Debug, Clone, Deserialize)]
pub struct LandscapeConfig {
    /// Directory holding `<domainModelId>.json|.yaml|.yml` documents
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: String,
}

impl LandscapeConfig {
    pub fn snapshot_path(&self) -> PathBuf {
        PathBuf::from(&self.snapshot_dir)
    }

    /// Validate landscape configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.snapshot_dir.trim().is_empty() {
            return Err(ValidationError::MissingRequired("landscape.snapshot_dir"));
        }
        Ok(())
    }
}

impl Default for LandscapeConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: default_snapshot_dir(),
        }
    }
}

fn default_snapshot_dir() -> String {
    "./snapshots".to_string()
}
