//! Lint findings and their classification enums.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Impact of a finding on the landscape's integrity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    Error,
    Warning,
    Info,
}

impl LintSeverity {
    pub fn all() -> &'static [LintSeverity] {
        &[LintSeverity::Error, LintSeverity::Warning, LintSeverity::Info]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LintSeverity::Error => "error",
            LintSeverity::Warning => "warning",
            LintSeverity::Info => "info",
        }
    }
}

/// Kind of integrity problem a finding describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LintCategory {
    BrokenReference,
    OrphanedEntity,
    MissingLink,
    IncompleteCoverage,
    DisconnectedWorkflow,
    SemanticGap,
}

impl LintCategory {
    pub fn all() -> &'static [LintCategory] {
        &[
            LintCategory::BrokenReference,
            LintCategory::OrphanedEntity,
            LintCategory::MissingLink,
            LintCategory::IncompleteCoverage,
            LintCategory::DisconnectedWorkflow,
            LintCategory::SemanticGap,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LintCategory::BrokenReference => "broken-reference",
            LintCategory::OrphanedEntity => "orphaned-entity",
            LintCategory::MissingLink => "missing-link",
            LintCategory::IncompleteCoverage => "incomplete-coverage",
            LintCategory::DisconnectedWorkflow => "disconnected-workflow",
            LintCategory::SemanticGap => "semantic-gap",
        }
    }
}

/// The kind of landscape entity a finding is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityType {
    Persona,
    UserStory,
    Capability,
    TaxonomyNode,
    BoundedContext,
    Aggregate,
    DomainEvent,
    GlossaryTerm,
    Workflow,
}

impl EntityType {
    pub fn all() -> &'static [EntityType] {
        &[
            EntityType::Persona,
            EntityType::UserStory,
            EntityType::Capability,
            EntityType::TaxonomyNode,
            EntityType::BoundedContext,
            EntityType::Aggregate,
            EntityType::DomainEvent,
            EntityType::GlossaryTerm,
            EntityType::Workflow,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Persona => "persona",
            EntityType::UserStory => "user-story",
            EntityType::Capability => "capability",
            EntityType::TaxonomyNode => "taxonomy-node",
            EntityType::BoundedContext => "bounded-context",
            EntityType::Aggregate => "aggregate",
            EntityType::DomainEvent => "domain-event",
            EntityType::GlossaryTerm => "glossary-term",
            EntityType::Workflow => "workflow",
        }
    }
}

macro_rules! impl_wire_name {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::all()
                    .iter()
                    .find(|v| v.as_str() == s)
                    .copied()
                    .ok_or_else(|| {
                        ValidationError::invalid_format($field, format!("unknown value '{}'", s))
                    })
            }
        }
    };
}

impl_wire_name!(LintSeverity, "severity");
impl_wire_name!(LintCategory, "category");
impl_wire_name!(EntityType, "entityType");

/// One detected integrity problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintFinding {
    /// Name of the rule that produced the finding, e.g. `story-persona-exists`.
    pub rule: String,
    pub severity: LintSeverity,
    pub category: LintCategory,
    pub message: String,
    pub entity_type: EntityType,
    pub entity_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_entities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl LintFinding {
    pub fn new(
        rule: &str,
        severity: LintSeverity,
        category: LintCategory,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.to_string(),
            severity,
            category,
            message: message.into(),
            entity_type,
            entity_id: entity_id.into(),
            entity_name: None,
            related_entities: None,
            suggestion: None,
        }
    }

    /// Sets the display name, ignoring empty names.
    pub fn with_entity_name(mut self, name: &str) -> Self {
        if !name.is_empty() {
            self.entity_name = Some(name.to_string());
        }
        self
    }

    pub fn with_related<I, S>(mut self, related: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let related: Vec<String> = related.into_iter().map(Into::into).collect();
        if !related.is_empty() {
            self.related_entities = Some(related);
        }
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}
