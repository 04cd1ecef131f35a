//! Coverage rules - entities have their expected downstream links.
//!
//! Findings are gaps rather than corruption, so they are `warning` or `info`.

use std::collections::HashSet;

use super::{key_set, LintRule};
use crate::domain::lint::context::LintContext;
use crate::domain::lint::finding::{EntityType, LintCategory, LintFinding, LintSeverity};

pub const PERSONA_HAS_STORIES: &str = "persona-has-stories";
pub const STORY_HAS_CAPABILITIES: &str = "story-has-capabilities";
pub const CAPABILITY_HAS_ROAD_ITEMS: &str = "capability-has-road-items";
pub const CAPABILITY_HAS_STORIES: &str = "capability-has-stories";
pub const CAPABILITY_HAS_TAXONOMY_NODE: &str = "capability-has-taxonomy-node";
pub const CONTEXT_PRODUCES_EVENTS: &str = "context-produces-events";
pub const CONTEXT_NOT_ORPHANED: &str = "context-not-orphaned";
pub const EVENT_HAS_CONSUMERS: &str = "event-has-consumers";
pub const EVENT_HAS_SOURCE_CAPABILITY: &str = "event-has-source-capability";
pub const WORKFLOW_HAS_TRANSITIONS: &str = "workflow-has-transitions";

/// Coverage rules in execution order.
pub const RULES: &[LintRule] = &[
    LintRule { name: PERSONA_HAS_STORIES, check: persona_has_stories },
    LintRule { name: STORY_HAS_CAPABILITIES, check: story_has_capabilities },
    LintRule { name: CAPABILITY_HAS_ROAD_ITEMS, check: capability_has_road_items },
    LintRule { name: CAPABILITY_HAS_STORIES, check: capability_has_stories },
    LintRule { name: CAPABILITY_HAS_TAXONOMY_NODE, check: capability_has_taxonomy_node },
    LintRule { name: CONTEXT_PRODUCES_EVENTS, check: context_produces_events },
    LintRule { name: CONTEXT_NOT_ORPHANED, check: context_not_orphaned },
    LintRule { name: EVENT_HAS_CONSUMERS, check: event_has_consumers },
    LintRule { name: EVENT_HAS_SOURCE_CAPABILITY, check: event_has_source_capability },
    LintRule { name: WORKFLOW_HAS_TRANSITIONS, check: workflow_has_transitions },
];

/// Runs the whole coverage set.
pub fn check(ctx: &LintContext) -> Vec<LintFinding> {
    super::run_rules(RULES, ctx)
}

fn persona_has_stories(ctx: &LintContext) -> Vec<LintFinding> {
    let referenced = key_set(&ctx.user_stories, |s| s.persona.as_str());

    ctx.personas
        .iter()
        .filter(|persona| !referenced.contains(persona.id.as_str()))
        .map(|persona| {
            LintFinding::new(
                PERSONA_HAS_STORIES,
                LintSeverity::Warning,
                LintCategory::IncompleteCoverage,
                EntityType::Persona,
                &persona.id,
                format!("Persona {} has no user stories", persona.id),
            )
            .with_entity_name(&persona.name)
            .with_suggestion(format!("Add a user story for persona {}", persona.id))
        })
        .collect()
}

fn story_has_capabilities(ctx: &LintContext) -> Vec<LintFinding> {
    ctx.user_stories
        .iter()
        .filter(|story| story.capabilities.is_empty())
        .map(|story| {
            LintFinding::new(
                STORY_HAS_CAPABILITIES,
                LintSeverity::Warning,
                LintCategory::MissingLink,
                EntityType::UserStory,
                &story.id,
                format!("User story {} is not linked to any capability", story.id),
            )
            .with_entity_name(&story.title)
            .with_suggestion(format!("Link user story {} to at least one capability", story.id))
        })
        .collect()
}

fn capability_has_road_items(ctx: &LintContext) -> Vec<LintFinding> {
    ctx.capabilities
        .iter()
        .filter(|capability| capability.road_count == 0)
        .map(|capability| {
            LintFinding::new(
                CAPABILITY_HAS_ROAD_ITEMS,
                LintSeverity::Info,
                LintCategory::IncompleteCoverage,
                EntityType::Capability,
                &capability.id,
                format!("Capability {} has no road items", capability.id),
            )
            .with_entity_name(&capability.title)
            .with_suggestion(format!("Plan road items for capability {}", capability.id))
        })
        .collect()
}

/// A capability counts as storied when the governance count says so or a
/// story in the snapshot links it.
fn capability_has_stories(ctx: &LintContext) -> Vec<LintFinding> {
    let linked: HashSet<&str> = ctx
        .user_stories
        .iter()
        .flat_map(|story| story.capabilities.iter().map(String::as_str))
        .collect();

    ctx.capabilities
        .iter()
        .filter(|capability| capability.story_count == 0 && !linked.contains(capability.id.as_str()))
        .map(|capability| {
            LintFinding::new(
                CAPABILITY_HAS_STORIES,
                LintSeverity::Warning,
                LintCategory::IncompleteCoverage,
                EntityType::Capability,
                &capability.id,
                format!("Capability {} has no user stories", capability.id),
            )
            .with_entity_name(&capability.title)
            .with_suggestion(format!("Add a user story that exercises capability {}", capability.id))
        })
        .collect()
}

fn capability_has_taxonomy_node(ctx: &LintContext) -> Vec<LintFinding> {
    ctx.capabilities
        .iter()
        .filter(|capability| capability.taxonomy_node_ref().is_none())
        .map(|capability| {
            LintFinding::new(
                CAPABILITY_HAS_TAXONOMY_NODE,
                LintSeverity::Info,
                LintCategory::MissingLink,
                EntityType::Capability,
                &capability.id,
                format!("Capability {} is not mapped to a taxonomy node", capability.id),
            )
            .with_entity_name(&capability.title)
            .with_suggestion(format!("Map capability {} to a taxonomy node", capability.id))
        })
        .collect()
}

/// Internal contexts only; external, human and unknown contexts are exempt.
fn context_produces_events(ctx: &LintContext) -> Vec<LintFinding> {
    let producers = key_set(&ctx.domain_events, |e| e.context_id.as_str());

    ctx.bounded_contexts
        .iter()
        .filter(|context| context.is_internal() && !producers.contains(context.id.as_str()))
        .map(|context| {
            LintFinding::new(
                CONTEXT_PRODUCES_EVENTS,
                LintSeverity::Warning,
                LintCategory::IncompleteCoverage,
                EntityType::BoundedContext,
                &context.id,
                format!("Bounded context {} produces no domain events", context.slug),
            )
            .with_entity_name(&context.title)
            .with_suggestion(format!("Model the domain events published by {}", context.slug))
        })
        .collect()
}

fn context_not_orphaned(ctx: &LintContext) -> Vec<LintFinding> {
    let related: HashSet<&str> = ctx
        .bounded_contexts
        .iter()
        .filter(|context| !context.relationships.is_empty())
        .flat_map(|context| {
            std::iter::once(context.id.as_str())
                .chain(context.relationships.iter().map(|r| r.target_context_id.as_str()))
        })
        .collect();
    let owners = key_set(&ctx.aggregates, |a| a.context_id.as_str());
    let producers = key_set(&ctx.domain_events, |e| e.context_id.as_str());
    let consumers: HashSet<&str> = ctx
        .domain_events
        .iter()
        .flat_map(|event| event.consumed_by.iter().map(String::as_str))
        .collect();

    ctx.bounded_contexts
        .iter()
        .filter(|context| {
            let id = context.id.as_str();
            !related.contains(id)
                && !owners.contains(id)
                && !producers.contains(id)
                && !consumers.contains(context.slug.as_str())
        })
        .map(|context| {
            LintFinding::new(
                CONTEXT_NOT_ORPHANED,
                LintSeverity::Warning,
                LintCategory::OrphanedEntity,
                EntityType::BoundedContext,
                &context.id,
                format!(
                    "Bounded context {} has no relationships, aggregates or events",
                    context.slug
                ),
            )
            .with_entity_name(&context.title)
            .with_suggestion(format!(
                "Connect {} to the context map or remove it",
                context.slug
            ))
        })
        .collect()
}

fn event_has_consumers(ctx: &LintContext) -> Vec<LintFinding> {
    let slugs = key_set(&ctx.bounded_contexts, |c| c.slug.as_str());

    ctx.domain_events
        .iter()
        .filter(|event| !event.consumed_by.iter().any(|slug| slugs.contains(slug.as_str())))
        .map(|event| {
            LintFinding::new(
                EVENT_HAS_CONSUMERS,
                LintSeverity::Warning,
                LintCategory::MissingLink,
                EntityType::DomainEvent,
                &event.id,
                format!("Domain event {} has no resolved consumers", event.slug),
            )
            .with_entity_name(&event.slug)
            .with_suggestion(format!(
                "Declare which bounded contexts consume {}",
                event.slug
            ))
        })
        .collect()
}

fn event_has_source_capability(ctx: &LintContext) -> Vec<LintFinding> {
    ctx.domain_events
        .iter()
        .filter(|event| event.source_capability_ref().is_none())
        .map(|event| {
            LintFinding::new(
                EVENT_HAS_SOURCE_CAPABILITY,
                LintSeverity::Info,
                LintCategory::MissingLink,
                EntityType::DomainEvent,
                &event.id,
                format!("Domain event {} has no source capability", event.slug),
            )
            .with_entity_name(&event.slug)
            .with_suggestion(format!("Set sourceCapabilityId on {}", event.slug))
        })
        .collect()
}

fn workflow_has_transitions(ctx: &LintContext) -> Vec<LintFinding> {
    ctx.workflows
        .iter()
        .filter(|workflow| workflow.transitions.is_empty())
        .map(|workflow| {
            LintFinding::new(
                WORKFLOW_HAS_TRANSITIONS,
                LintSeverity::Info,
                LintCategory::IncompleteCoverage,
                EntityType::Workflow,
                &workflow.id,
                format!("Workflow {} has no transitions", workflow.slug),
            )
            .with_entity_name(&workflow.title)
            .with_suggestion(format!("Model the state transitions of {}", workflow.slug))
        })
        .collect()
}

#[cfg(test)]
#[path = "coverage_test.rs"]
mod coverage_test;
