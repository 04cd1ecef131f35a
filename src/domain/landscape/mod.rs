//! Landscape entity model.
//!
//! Flattened projections of the governance snapshot (personas, stories,
//! capabilities), the taxonomy snapshot (nodes) and the domain model
//! (contexts, aggregates, events, glossary, workflows). Cross references are
//! plain ids or slugs and are allowed to dangle; the linter reports them.

mod domain_model;
mod governance;
mod taxonomy;

pub use domain_model::{
    Aggregate, BoundedContext, ContextRelationship, DomainEvent, GlossaryTerm, Workflow,
    WorkflowTransition, INTERNAL_CONTEXT_TYPE,
};
pub use governance::{Capability, Persona, UserStory, TAXONOMY_NODE_PLACEHOLDER};
pub use taxonomy::TaxonomyNode;
