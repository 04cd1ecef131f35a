//! Domain-model artifacts: bounded contexts, aggregates, events, glossary
//! terms and workflows.

use serde::{Deserialize, Serialize};

/// Context type value that marks a context as owned by the modeled system.
pub const INTERNAL_CONTEXT_TYPE: &str = "internal";

/// A named subdomain boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundedContext {
    pub id: String,
    pub slug: String,
    pub title: String,
    /// `internal`, `external`, `human` or `unknown`. Absent means internal.
    #[serde(default)]
    pub context_type: Option<String>,
    /// `core`, `supporting` or `generic`.
    #[serde(default)]
    pub subdomain_type: Option<String>,
    #[serde(default)]
    pub taxonomy_node: Option<String>,
    #[serde(default)]
    pub relationships: Vec<ContextRelationship>,
}

impl BoundedContext {
    pub fn new(id: impl Into<String>, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            context_type: None,
            subdomain_type: None,
            taxonomy_node: None,
            relationships: Vec::new(),
        }
    }

    pub fn with_context_type(mut self, context_type: impl Into<String>) -> Self {
        self.context_type = Some(context_type.into());
        self
    }

    pub fn with_taxonomy_node(mut self, node: impl Into<String>) -> Self {
        self.taxonomy_node = Some(node.into());
        self
    }

    pub fn with_relationship(mut self, target_context_id: impl Into<String>) -> Self {
        self.relationships.push(ContextRelationship {
            target_context_id: target_context_id.into(),
            kind: None,
        });
        self
    }

    /// Whether the context belongs to the modeled system itself.
    pub fn is_internal(&self) -> bool {
        self.context_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .map_or(true, |t| t.eq_ignore_ascii_case(INTERNAL_CONTEXT_TYPE))
    }

    /// Taxonomy node name, ignoring empty values.
    pub fn taxonomy_node_ref(&self) -> Option<&str> {
        self.taxonomy_node.as_deref().filter(|node| !node.is_empty())
    }
}

/// An outgoing edge from one bounded context to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextRelationship {
    pub target_context_id: String,
    /// Context-map pattern such as `customer-supplier` or `conformist`.
    #[serde(default, alias = "type")]
    pub kind: Option<String>,
}

/// A consistency boundary inside a bounded context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregate {
    pub id: String,
    pub context_id: String,
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub root_entity: String,
    #[serde(default)]
    pub events: Vec<String>,
}

impl Aggregate {
    pub fn new(id: impl Into<String>, context_id: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            context_id: context_id.into(),
            slug: slug.into(),
            title: String::new(),
            root_entity: String::new(),
            events: Vec::new(),
        }
    }
}

/// A fact published by a context, consumed by zero or more others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainEvent {
    pub id: String,
    /// Producing context id.
    pub context_id: String,
    #[serde(default)]
    pub aggregate_id: Option<String>,
    pub slug: String,
    /// Slugs of consuming contexts.
    #[serde(default)]
    pub consumed_by: Vec<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub side_effects: Vec<String>,
    #[serde(default)]
    pub source_capability_id: Option<String>,
    #[serde(default)]
    pub target_capability_ids: Vec<String>,
}

impl DomainEvent {
    pub fn new(id: impl Into<String>, context_id: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            context_id: context_id.into(),
            aggregate_id: None,
            slug: slug.into(),
            consumed_by: Vec::new(),
            triggers: Vec::new(),
            side_effects: Vec::new(),
            source_capability_id: None,
            target_capability_ids: Vec::new(),
        }
    }

    pub fn with_aggregate(mut self, aggregate_id: impl Into<String>) -> Self {
        self.aggregate_id = Some(aggregate_id.into());
        self
    }

    pub fn consumed_by<I, S>(mut self, context_slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.consumed_by = context_slugs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_source_capability(mut self, capability_id: impl Into<String>) -> Self {
        self.source_capability_id = Some(capability_id.into());
        self
    }

    pub fn with_target_capabilities<I, S>(mut self, capability_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_capability_ids = capability_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Owning aggregate id, ignoring empty values.
    pub fn aggregate_ref(&self) -> Option<&str> {
        self.aggregate_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Source capability id, ignoring empty values.
    pub fn source_capability_ref(&self) -> Option<&str> {
        self.source_capability_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// A ubiquitous-language term, optionally scoped to one context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryTerm {
    pub id: String,
    #[serde(default)]
    pub context_id: Option<String>,
    pub term: String,
}

impl GlossaryTerm {
    pub fn new(id: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            context_id: None,
            term: term.into(),
        }
    }

    pub fn scoped_to(mut self, context_id: impl Into<String>) -> Self {
        self.context_id = Some(context_id.into());
        self
    }
}

/// A cross-context business process modeled as a state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: String,
    pub slug: String,
    pub title: String,
    /// Ids of the contexts the workflow spans.
    #[serde(default)]
    pub context_ids: Vec<String>,
    #[serde(default)]
    pub transitions: Vec<WorkflowTransition>,
}

impl Workflow {
    pub fn new(id: impl Into<String>, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            context_ids: Vec::new(),
            transitions: Vec::new(),
        }
    }

    pub fn spanning<I, S>(mut self, context_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.context_ids = context_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_transition(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        trigger: Option<&str>,
    ) -> Self {
        self.transitions.push(WorkflowTransition {
            from: from.into(),
            to: to.into(),
            trigger: trigger.map(str::to_string),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTransition {
    pub from: String,
    pub to: String,
    /// Slug of the domain event that fires this transition.
    #[serde(default)]
    pub trigger: Option<String>,
}
