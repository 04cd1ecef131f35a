use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainModelId, SnapshotId};
use crate::domain::landscape::{
    Aggregate, BoundedContext, Capability, DomainEvent, GlossaryTerm, Persona, TaxonomyNode,
    UserStory, Workflow,
};

/// Fully-resolved landscape snapshot handed to the linter.
///
/// Joins one governance snapshot, one taxonomy snapshot and one domain model.
/// Built by the caller per lint request and never mutated by the linter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintContext {
    pub domain_model_id: DomainModelId,
    #[serde(default)]
    pub governance_snapshot_id: Option<SnapshotId>,
    #[serde(default)]
    pub taxonomy_snapshot_id: Option<SnapshotId>,

    // Governance
    #[serde(default)]
    pub personas: Vec<Persona>,
    #[serde(default)]
    pub user_stories: Vec<UserStory>,
    #[serde(default)]
    pub capabilities: Vec<Capability>,

    // Taxonomy
    #[serde(default)]
    pub taxonomy_nodes: Vec<TaxonomyNode>,

    // Domain model
    #[serde(default)]
    pub bounded_contexts: Vec<BoundedContext>,
    #[serde(default)]
    pub aggregates: Vec<Aggregate>,
    #[serde(default)]
    pub domain_events: Vec<DomainEvent>,
    #[serde(default)]
    pub glossary_terms: Vec<GlossaryTerm>,
    #[serde(default)]
    pub workflows: Vec<Workflow>,
}

impl LintContext {
    /// Creates a context with no entities.
    pub fn empty(domain_model_id: DomainModelId) -> Self {
        Self {
            domain_model_id,
            governance_snapshot_id: None,
            taxonomy_snapshot_id: None,
            personas: Vec::new(),
            user_stories: Vec::new(),
            capabilities: Vec::new(),
            taxonomy_nodes: Vec::new(),
            bounded_contexts: Vec::new(),
            aggregates: Vec::new(),
            domain_events: Vec::new(),
            glossary_terms: Vec::new(),
            workflows: Vec::new(),
        }
    }

    /// Total number of entities across all collections.
    pub fn entity_count(&self) -> usize {
        self.personas.len()
            + self.user_stories.len()
            + self.capabilities.len()
            + self.taxonomy_nodes.len()
            + self.bounded_contexts.len()
            + self.aggregates.len()
            + self.domain_events.len()
            + self.glossary_terms.len()
            + self.workflows.len()
    }
}
