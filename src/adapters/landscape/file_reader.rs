//! File-based Landscape Reader Adapter
//!
//! Loads one pre-assembled snapshot document per domain model from a
//! directory. Documents are named after the domain model id and may be JSON
//! or YAML:
//!
//! ```text
//! snapshots/
//! ├── billing.json
//! └── logistics.yaml
//! ```

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::foundation::DomainModelId;
use crate::domain::lint::LintContext;
use crate::ports::{LandscapeError, LandscapeReader};

/// Extensions tried in order when locating a snapshot document.
const SNAPSHOT_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    fn from_extension(ext: &str) -> Self {
        match ext {
            "json" => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Reads snapshot documents from a base directory
#[derive(Debug, Clone)]
pub struct FileLandscapeReader {
    base_path: PathBuf,
}

impl FileLandscapeReader {
    /// Create a reader rooted at a snapshot directory
    ///
    /// # Arguments
    /// * `base_path` - Directory holding `<domainModelId>.json|.yaml|.yml` files
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Locate the snapshot document for a domain model, if any
    async fn locate(&self, domain_model_id: &DomainModelId) -> Option<(PathBuf, DocumentFormat)> {
        for ext in SNAPSHOT_EXTENSIONS {
            let path = self
                .base_path
                .join(format!("{}.{}", domain_model_id.as_str(), ext));
            if fs::try_exists(&path).await.unwrap_or(false) {
                return Some((path, DocumentFormat::from_extension(ext)));
            }
        }
        None
    }

    fn parse(
        domain_model_id: &DomainModelId,
        raw: &str,
        format: DocumentFormat,
    ) -> Result<LintContext, LandscapeError> {
        let parsed = match format {
            DocumentFormat::Json => serde_json::from_str(raw).map_err(|e| e.to_string()),
            DocumentFormat::Yaml => serde_yaml::from_str(raw).map_err(|e| e.to_string()),
        };

        parsed.map_err(|reason| LandscapeError::InvalidSnapshot {
            domain_model_id: domain_model_id.clone(),
            reason,
        })
    }
}

/// Ids become file names, so anything that could leave the base directory is
/// treated as unknown.
fn is_safe_file_stem(id: &DomainModelId) -> bool {
    let raw = id.as_str();
    !raw.contains(['/', '\\', '\0']) && raw != "." && raw != ".."
}

#[async_trait]
impl LandscapeReader for FileLandscapeReader {
    async fn assemble_context(
        &self,
        domain_model_id: &DomainModelId,
    ) -> Result<LintContext, LandscapeError> {
        if !is_safe_file_stem(domain_model_id) {
            warn!(domain_model_id = %domain_model_id, "Rejected domain model id unusable as file name");
            return Err(LandscapeError::DomainModelNotFound(domain_model_id.clone()));
        }

        let (path, format) = self
            .locate(domain_model_id)
            .await
            .ok_or_else(|| LandscapeError::DomainModelNotFound(domain_model_id.clone()))?;

        debug!(domain_model_id = %domain_model_id, path = %path.display(), "Loading snapshot document");

        let raw = fs::read_to_string(&path)
            .await
            .map_err(|e| LandscapeError::Io(e.to_string()))?;

        let context = Self::parse(domain_model_id, &raw, format).map_err(|e| {
            warn!(domain_model_id = %domain_model_id, path = %path.display(), error = %e, "Malformed snapshot document");
            e
        })?;

        if &context.domain_model_id != domain_model_id {
            warn!(
                domain_model_id = %domain_model_id,
                document_id = %context.domain_model_id,
                "Snapshot document belongs to a different domain model"
            );
            return Err(LandscapeError::InvalidSnapshot {
                domain_model_id: domain_model_id.clone(),
                reason: format!(
                    "document declares domain model {}",
                    context.domain_model_id
                ),
            });
        }

        debug!(
            domain_model_id = %domain_model_id,
            entities = context.entity_count(),
            "Snapshot document loaded"
        );

        Ok(context)
    }
}
