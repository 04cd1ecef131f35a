//! Landscape Reader Port - Interface for assembling lint contexts.
//!
//! Implementations join the governance snapshot, taxonomy snapshot and
//! domain model that belong together and flatten them into a `LintContext`.
//! Choosing which snapshots pair with a domain model is the adapter's job.

use async_trait::async_trait;

use crate::domain::foundation::DomainModelId;
use crate::domain::lint::LintContext;

/// Errors that can occur while assembling a landscape
#[derive(Debug, thiserror::Error)]
pub enum LandscapeError {
    #[error("Domain model not found: {0}")]
    DomainModelNotFound(DomainModelId),

    #[error("Invalid snapshot for domain model {domain_model_id}: {reason}")]
    InvalidSnapshot {
        domain_model_id: DomainModelId,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(String),
}

/// Read-only port for landscape assembly
#[async_trait]
pub trait LandscapeReader: Send + Sync {
    /// Assembles the lint context for a domain model
    ///
    /// # Errors
    /// Returns `LandscapeError::DomainModelNotFound` if no domain model
    /// with this id is known
    async fn assemble_context(
        &self,
        domain_model_id: &DomainModelId,
    ) -> Result<LintContext, LandscapeError>;
}
