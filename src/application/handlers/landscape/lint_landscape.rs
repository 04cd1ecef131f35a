//! LintLandscapeHandler - Query handler for linting a domain model's landscape.
//!
//! Assembles the landscape through the reader port, runs every rule set and
//! narrows the findings with the caller's filter. The summary always
//! describes the unfiltered run.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::DomainModelId;
use crate::domain::lint::{lint, LintFilter, LintReport, LintSeverity};
use crate::ports::{LandscapeError, LandscapeReader};

/// Query to lint the landscape of one domain model.
#[derive(Debug, Clone)]
pub struct LintLandscapeQuery {
    /// The domain model to assemble and lint.
    pub domain_model_id: DomainModelId,
    /// Post-hoc narrowing of findings. Empty keeps everything.
    pub filter: LintFilter,
}

impl LintLandscapeQuery {
    pub fn new(domain_model_id: DomainModelId) -> Self {
        Self {
            domain_model_id,
            filter: LintFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: LintFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Result of a successful lint query.
#[derive(Debug, Clone, PartialEq)]
pub struct LintLandscapeResult {
    /// Report whose findings are filtered and whose summary is not.
    pub report: LintReport,
    /// Number of findings left after filtering.
    pub filtered_count: usize,
}

/// Errors from the lint query.
#[derive(Debug, thiserror::Error)]
pub enum LintLandscapeError {
    #[error("Domain model not found: {0}")]
    DomainModelNotFound(DomainModelId),

    #[error("Snapshot unreadable: {0}")]
    SnapshotUnreadable(String),
}

impl From<LandscapeError> for LintLandscapeError {
    fn from(err: LandscapeError) -> Self {
        match err {
            LandscapeError::DomainModelNotFound(id) => Self::DomainModelNotFound(id),
            other => Self::SnapshotUnreadable(other.to_string()),
        }
    }
}

/// Handler for linting a landscape.
pub struct LintLandscapeHandler {
    reader: Arc<dyn LandscapeReader>,
}

impl LintLandscapeHandler {
    pub fn new(reader: Arc<dyn LandscapeReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: LintLandscapeQuery,
    ) -> Result<LintLandscapeResult, LintLandscapeError> {
        let context = self.reader.assemble_context(&query.domain_model_id).await?;

        let mut report = lint(&context);
        let total = report.summary.total;

        if !query.filter.is_empty() {
            report.findings = query.filter.apply(&report.findings);
        }
        let filtered_count = report.findings.len();

        info!(
            domain_model_id = %query.domain_model_id,
            entities = context.entity_count(),
            total,
            errors = report.summary.count_for_severity(LintSeverity::Error),
            filtered_count,
            "Landscape linted"
        );

        Ok(LintLandscapeResult {
            report,
            filtered_count,
        })
    }
}
