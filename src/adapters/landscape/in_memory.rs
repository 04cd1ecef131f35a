//! In-Memory Landscape Reader Adapter
//!
//! Holds assembled lint contexts keyed by domain model id.
//! Useful for testing and for embedding the linter in another process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainModelId;
use crate::domain::lint::LintContext;
use crate::ports::{LandscapeError, LandscapeReader};

/// In-memory store of lint contexts
#[derive(Debug, Clone)]
pub struct InMemoryLandscapeReader {
    contexts: Arc<RwLock<HashMap<DomainModelId, LintContext>>>,
}

impl InMemoryLandscapeReader {
    /// Create an empty reader
    pub fn new() -> Self {
        Self {
            contexts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a reader pre-populated with contexts
    pub fn with_contexts(contexts: impl IntoIterator<Item = LintContext>) -> Self {
        let map = contexts
            .into_iter()
            .map(|ctx| (ctx.domain_model_id.clone(), ctx))
            .collect();
        Self {
            contexts: Arc::new(RwLock::new(map)),
        }
    }

    /// Insert or replace the context for its domain model
    pub async fn insert(&self, context: LintContext) {
        self.contexts
            .write()
            .await
            .insert(context.domain_model_id.clone(), context);
    }

    /// Remove all contexts
    pub async fn clear(&self) {
        self.contexts.write().await.clear();
    }

    /// Number of stored contexts
    pub async fn len(&self) -> usize {
        self.contexts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contexts.read().await.is_empty()
    }
}

impl Default for InMemoryLandscapeReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LandscapeReader for InMemoryLandscapeReader {
    async fn assemble_context(
        &self,
        domain_model_id: &DomainModelId,
    ) -> Result<LintContext, LandscapeError> {
        let contexts = self.contexts.read().await;
        contexts
            .get(domain_model_id)
            .cloned()
            .ok_or_else(|| LandscapeError::DomainModelNotFound(domain_model_id.clone()))
    }
}
