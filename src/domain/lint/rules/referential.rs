//! Referential rules - every id or slug reference resolves.
//!
//! All findings here are `broken-reference` errors: a dangling reference is
//! corruption, not a coverage gap.

use super::{key_set, LintRule};
use crate::domain::lint::context::LintContext;
use crate::domain::lint::finding::{EntityType, LintCategory, LintFinding, LintSeverity};

pub const STORY_PERSONA_EXISTS: &str = "story-persona-exists";
pub const STORY_CAPABILITY_EXISTS: &str = "story-capability-exists";
pub const EVENT_CONTEXT_EXISTS: &str = "event-context-exists";
pub const EVENT_AGGREGATE_EXISTS: &str = "event-aggregate-exists";
pub const AGGREGATE_CONTEXT_EXISTS: &str = "aggregate-context-exists";
pub const WORKFLOW_CONTEXT_EXISTS: &str = "workflow-context-exists";
pub const CONTEXT_RELATIONSHIP_TARGET_EXISTS: &str = "context-relationship-target-exists";
pub const CAPABILITY_TAXONOMY_NODE_EXISTS: &str = "capability-taxonomy-node-exists";
pub const PERSONA_CAPABILITY_EXISTS: &str = "persona-capability-exists";
pub const EVENT_SOURCE_CAPABILITY_EXISTS: &str = "event-source-capability-exists";
pub const EVENT_TARGET_CAPABILITY_EXISTS: &str = "event-target-capability-exists";
pub const EVENT_CONSUMER_EXISTS: &str = "event-consumer-exists";
pub const GLOSSARY_TERM_CONTEXT_EXISTS: &str = "glossary-term-context-exists";
pub const WORKFLOW_TRIGGER_EVENT_EXISTS: &str = "workflow-trigger-event-exists";

/// Referential rules in execution order.
pub const RULES: &[LintRule] = &[
    LintRule { name: STORY_PERSONA_EXISTS, check: story_persona_exists },
    LintRule { name: STORY_CAPABILITY_EXISTS, check: story_capability_exists },
    LintRule { name: EVENT_CONTEXT_EXISTS, check: event_context_exists },
    LintRule { name: EVENT_AGGREGATE_EXISTS, check: event_aggregate_exists },
    LintRule { name: AGGREGATE_CONTEXT_EXISTS, check: aggregate_context_exists },
    LintRule { name: WORKFLOW_CONTEXT_EXISTS, check: workflow_context_exists },
    LintRule { name: CONTEXT_RELATIONSHIP_TARGET_EXISTS, check: context_relationship_target_exists },
    LintRule { name: CAPABILITY_TAXONOMY_NODE_EXISTS, check: capability_taxonomy_node_exists },
    LintRule { name: PERSONA_CAPABILITY_EXISTS, check: persona_capability_exists },
    LintRule { name: EVENT_SOURCE_CAPABILITY_EXISTS, check: event_source_capability_exists },
    LintRule { name: EVENT_TARGET_CAPABILITY_EXISTS, check: event_target_capability_exists },
    LintRule { name: EVENT_CONSUMER_EXISTS, check: event_consumer_exists },
    LintRule { name: GLOSSARY_TERM_CONTEXT_EXISTS, check: glossary_term_context_exists },
    LintRule { name: WORKFLOW_TRIGGER_EVENT_EXISTS, check: workflow_trigger_event_exists },
];

/// Runs the whole referential set.
pub fn check(ctx: &LintContext) -> Vec<LintFinding> {
    super::run_rules(RULES, ctx)
}

fn broken_reference(
    rule: &str,
    entity_type: EntityType,
    entity_id: &str,
    entity_name: &str,
    target: &str,
    message: String,
) -> LintFinding {
    LintFinding::new(
        rule,
        LintSeverity::Error,
        LintCategory::BrokenReference,
        entity_type,
        entity_id,
        message,
    )
    .with_entity_name(entity_name)
    .with_related([target])
    .with_suggestion(format!("Fix dangling reference to {}", target))
}

fn story_persona_exists(ctx: &LintContext) -> Vec<LintFinding> {
    let personas = key_set(&ctx.personas, |p| p.id.as_str());

    ctx.user_stories
        .iter()
        .filter(|story| !personas.contains(story.persona.as_str()))
        .map(|story| {
            if story.persona.is_empty() {
                LintFinding::new(
                    STORY_PERSONA_EXISTS,
                    LintSeverity::Error,
                    LintCategory::BrokenReference,
                    EntityType::UserStory,
                    &story.id,
                    format!("User story {} has no persona", story.id),
                )
                .with_entity_name(&story.title)
                .with_suggestion(format!("Assign an existing persona to user story {}", story.id))
            } else {
                broken_reference(
                    STORY_PERSONA_EXISTS,
                    EntityType::UserStory,
                    &story.id,
                    &story.title,
                    &story.persona,
                    format!(
                        "User story {} references unknown persona {}",
                        story.id, story.persona
                    ),
                )
            }
        })
        .collect()
}

fn story_capability_exists(ctx: &LintContext) -> Vec<LintFinding> {
    let capabilities = key_set(&ctx.capabilities, |c| c.id.as_str());

    ctx.user_stories
        .iter()
        .flat_map(|story| {
            story
                .capabilities
                .iter()
                .filter(|cap| !capabilities.contains(cap.as_str()))
                .map(move |cap| {
                    broken_reference(
                        STORY_CAPABILITY_EXISTS,
                        EntityType::UserStory,
                        &story.id,
                        &story.title,
                        cap,
                        format!("User story {} references unknown capability {}", story.id, cap),
                    )
                })
        })
        .collect()
}

fn event_context_exists(ctx: &LintContext) -> Vec<LintFinding> {
    let contexts = key_set(&ctx.bounded_contexts, |c| c.id.as_str());

    ctx.domain_events
        .iter()
        .filter(|event| !contexts.contains(event.context_id.as_str()))
        .map(|event| {
            broken_reference(
                EVENT_CONTEXT_EXISTS,
                EntityType::DomainEvent,
                &event.id,
                &event.slug,
                &event.context_id,
                format!(
                    "Domain event {} belongs to unknown bounded context {}",
                    event.slug, event.context_id
                ),
            )
        })
        .collect()
}

fn event_aggregate_exists(ctx: &LintContext) -> Vec<LintFinding> {
    let aggregates = key_set(&ctx.aggregates, |a| a.id.as_str());

    ctx.domain_events
        .iter()
        .filter_map(|event| {
            let aggregate_id = event.aggregate_ref()?;
            if aggregates.contains(aggregate_id) {
                return None;
            }
            Some(broken_reference(
                EVENT_AGGREGATE_EXISTS,
                EntityType::DomainEvent,
                &event.id,
                &event.slug,
                aggregate_id,
                format!(
                    "Domain event {} references unknown aggregate {}",
                    event.slug, aggregate_id
                ),
            ))
        })
        .collect()
}

fn aggregate_context_exists(ctx: &LintContext) -> Vec<LintFinding> {
    let contexts = key_set(&ctx.bounded_contexts, |c| c.id.as_str());

    ctx.aggregates
        .iter()
        .filter(|aggregate| !contexts.contains(aggregate.context_id.as_str()))
        .map(|aggregate| {
            broken_reference(
                AGGREGATE_CONTEXT_EXISTS,
                EntityType::Aggregate,
                &aggregate.id,
                &aggregate.title,
                &aggregate.context_id,
                format!(
                    "Aggregate {} belongs to unknown bounded context {}",
                    aggregate.slug, aggregate.context_id
                ),
            )
        })
        .collect()
}

fn workflow_context_exists(ctx: &LintContext) -> Vec<LintFinding> {
    let contexts = key_set(&ctx.bounded_contexts, |c| c.id.as_str());

    ctx.workflows
        .iter()
        .flat_map(|workflow| {
            workflow
                .context_ids
                .iter()
                .filter(|id| !contexts.contains(id.as_str()))
                .map(move |id| {
                    broken_reference(
                        WORKFLOW_CONTEXT_EXISTS,
                        EntityType::Workflow,
                        &workflow.id,
                        &workflow.title,
                        id,
                        format!("Workflow {} spans unknown bounded context {}", workflow.slug, id),
                    )
                })
        })
        .collect()
}

fn context_relationship_target_exists(ctx: &LintContext) -> Vec<LintFinding> {
    let contexts = key_set(&ctx.bounded_contexts, |c| c.id.as_str());

    ctx.bounded_contexts
        .iter()
        .flat_map(|context| {
            context
                .relationships
                .iter()
                .filter(|rel| !contexts.contains(rel.target_context_id.as_str()))
                .map(move |rel| {
                    broken_reference(
                        CONTEXT_RELATIONSHIP_TARGET_EXISTS,
                        EntityType::BoundedContext,
                        &context.id,
                        &context.title,
                        &rel.target_context_id,
                        format!(
                            "Bounded context {} has a relationship to unknown context {}",
                            context.slug, rel.target_context_id
                        ),
                    )
                })
        })
        .collect()
}

fn capability_taxonomy_node_exists(ctx: &LintContext) -> Vec<LintFinding> {
    let nodes = key_set(&ctx.taxonomy_nodes, |n| n.name.as_str());

    ctx.capabilities
        .iter()
        .filter_map(|capability| {
            let node = capability.taxonomy_node_ref()?;
            if nodes.contains(node) {
                return None;
            }
            Some(broken_reference(
                CAPABILITY_TAXONOMY_NODE_EXISTS,
                EntityType::Capability,
                &capability.id,
                &capability.title,
                node,
                format!(
                    "Capability {} is mapped to unknown taxonomy node {}",
                    capability.id, node
                ),
            ))
        })
        .collect()
}

fn persona_capability_exists(ctx: &LintContext) -> Vec<LintFinding> {
    let capabilities = key_set(&ctx.capabilities, |c| c.id.as_str());

    ctx.personas
        .iter()
        .flat_map(|persona| {
            persona
                .typical_capabilities
                .iter()
                .filter(|cap| !capabilities.contains(cap.as_str()))
                .map(move |cap| {
                    broken_reference(
                        PERSONA_CAPABILITY_EXISTS,
                        EntityType::Persona,
                        &persona.id,
                        &persona.name,
                        cap,
                        format!(
                            "Persona {} lists unknown typical capability {}",
                            persona.id, cap
                        ),
                    )
                })
        })
        .collect()
}

fn event_source_capability_exists(ctx: &LintContext) -> Vec<LintFinding> {
    let capabilities = key_set(&ctx.capabilities, |c| c.id.as_str());

    ctx.domain_events
        .iter()
        .filter_map(|event| {
            let source = event.source_capability_ref()?;
            if capabilities.contains(source) {
                return None;
            }
            Some(broken_reference(
                EVENT_SOURCE_CAPABILITY_EXISTS,
                EntityType::DomainEvent,
                &event.id,
                &event.slug,
                source,
                format!(
                    "Domain event {} is sourced from unknown capability {}",
                    event.slug, source
                ),
            ))
        })
        .collect()
}

fn event_target_capability_exists(ctx: &LintContext) -> Vec<LintFinding> {
    let capabilities = key_set(&ctx.capabilities, |c| c.id.as_str());

    ctx.domain_events
        .iter()
        .flat_map(|event| {
            event
                .target_capability_ids
                .iter()
                .filter(|cap| !capabilities.contains(cap.as_str()))
                .map(move |cap| {
                    broken_reference(
                        EVENT_TARGET_CAPABILITY_EXISTS,
                        EntityType::DomainEvent,
                        &event.id,
                        &event.slug,
                        cap,
                        format!("Domain event {} targets unknown capability {}", event.slug, cap),
                    )
                })
        })
        .collect()
}

fn event_consumer_exists(ctx: &LintContext) -> Vec<LintFinding> {
    let slugs = key_set(&ctx.bounded_contexts, |c| c.slug.as_str());

    ctx.domain_events
        .iter()
        .flat_map(|event| {
            event
                .consumed_by
                .iter()
                .filter(|slug| !slugs.contains(slug.as_str()))
                .map(move |slug| {
                    broken_reference(
                        EVENT_CONSUMER_EXISTS,
                        EntityType::DomainEvent,
                        &event.id,
                        &event.slug,
                        slug,
                        format!(
                            "Domain event {} is consumed by unknown bounded context {}",
                            event.slug, slug
                        ),
                    )
                })
        })
        .collect()
}

fn glossary_term_context_exists(ctx: &LintContext) -> Vec<LintFinding> {
    let contexts = key_set(&ctx.bounded_contexts, |c| c.id.as_str());

    ctx.glossary_terms
        .iter()
        .filter_map(|term| {
            let context_id = term.context_id.as_deref().filter(|id| !id.is_empty())?;
            if contexts.contains(context_id) {
                return None;
            }
            Some(broken_reference(
                GLOSSARY_TERM_CONTEXT_EXISTS,
                EntityType::GlossaryTerm,
                &term.id,
                &term.term,
                context_id,
                format!(
                    "Glossary term '{}' is scoped to unknown bounded context {}",
                    term.term, context_id
                ),
            ))
        })
        .collect()
}

fn workflow_trigger_event_exists(ctx: &LintContext) -> Vec<LintFinding> {
    let event_slugs = key_set(&ctx.domain_events, |e| e.slug.as_str());

    ctx.workflows
        .iter()
        .flat_map(|workflow| {
            workflow
                .transitions
                .iter()
                .filter_map(|t| t.trigger.as_deref().map(|trigger| (t, trigger)))
                .filter(|(_, trigger)| !event_slugs.contains(trigger))
                .map(move |(t, trigger)| {
                    broken_reference(
                        WORKFLOW_TRIGGER_EVENT_EXISTS,
                        EntityType::Workflow,
                        &workflow.id,
                        &workflow.title,
                        trigger,
                        format!(
                            "Workflow {} transition {} -> {} is triggered by unknown event {}",
                            workflow.slug, t.from, t.to, trigger
                        ),
                    )
                })
        })
        .collect()
}

#[cfg(test)]
#[path = "referential_test.rs"]
mod referential_test;
