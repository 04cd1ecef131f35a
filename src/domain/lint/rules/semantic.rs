//! Semantic rules - consistency that needs more than id existence.
//!
//! References that do not resolve are skipped here; the referential set
//! already reports them.

use std::collections::{HashMap, HashSet};

use super::LintRule;
use crate::domain::landscape::{BoundedContext, DomainEvent};
use crate::domain::lint::context::LintContext;
use crate::domain::lint::finding::{EntityType, LintCategory, LintFinding, LintSeverity};

pub const WORKFLOW_TRIGGER_IN_SCOPE: &str = "workflow-trigger-in-scope";
pub const CONTEXT_RELATIONSHIP_HAS_EVENT_FLOW: &str = "context-relationship-has-event-flow";
pub const WORKFLOW_STATES_CONNECTED: &str = "workflow-states-connected";
pub const EVENT_AGGREGATE_CONTEXT_CONSISTENT: &str = "event-aggregate-context-consistent";
pub const EVENT_CAPABILITY_TAXONOMY_ALIGNED: &str = "event-capability-taxonomy-aligned";

/// Related contexts connected by fewer events than this are disconnected.
pub const MIN_CONNECTING_EVENTS: usize = 1;

/// Semantic rules in execution order.
pub const RULES: &[LintRule] = &[
    LintRule { name: WORKFLOW_TRIGGER_IN_SCOPE, check: workflow_trigger_in_scope },
    LintRule { name: CONTEXT_RELATIONSHIP_HAS_EVENT_FLOW, check: context_relationship_has_event_flow },
    LintRule { name: WORKFLOW_STATES_CONNECTED, check: workflow_states_connected },
    LintRule { name: EVENT_AGGREGATE_CONTEXT_CONSISTENT, check: event_aggregate_context_consistent },
    LintRule { name: EVENT_CAPABILITY_TAXONOMY_ALIGNED, check: event_capability_taxonomy_aligned },
];

/// Runs the whole semantic set.
pub fn check(ctx: &LintContext) -> Vec<LintFinding> {
    super::run_rules(RULES, ctx)
}

/// A trigger event must be produced by a context the workflow spans.
fn workflow_trigger_in_scope(ctx: &LintContext) -> Vec<LintFinding> {
    let mut producers_by_slug: HashMap<&str, Vec<&str>> = HashMap::new();
    for event in &ctx.domain_events {
        producers_by_slug
            .entry(event.slug.as_str())
            .or_default()
            .push(event.context_id.as_str());
    }

    let mut findings = Vec::new();
    for workflow in &ctx.workflows {
        let span: HashSet<&str> = workflow.context_ids.iter().map(String::as_str).collect();

        for transition in &workflow.transitions {
            let Some(trigger) = transition.trigger.as_deref() else {
                continue;
            };
            let Some(producers) = producers_by_slug.get(trigger) else {
                continue;
            };
            if producers.iter().any(|context_id| span.contains(context_id)) {
                continue;
            }

            let mut related = vec![trigger.to_string()];
            related.extend(producers.iter().map(|id| id.to_string()));
            findings.push(
                LintFinding::new(
                    WORKFLOW_TRIGGER_IN_SCOPE,
                    LintSeverity::Warning,
                    LintCategory::SemanticGap,
                    EntityType::Workflow,
                    &workflow.id,
                    format!(
                        "Workflow {} transition {} -> {} is triggered by {}, which is produced outside the workflow's contexts",
                        workflow.slug, transition.from, transition.to, trigger
                    ),
                )
                .with_entity_name(&workflow.title)
                .with_related(related)
                .with_suggestion(format!(
                    "Add the producing context of {} to workflow {} or pick a trigger from its contexts",
                    trigger, workflow.slug
                )),
            );
        }
    }
    findings
}

/// Related contexts should exchange at least one event.
///
/// Each unordered pair is judged once, on the first context (in input
/// order) that declares the relationship.
fn context_relationship_has_event_flow(ctx: &LintContext) -> Vec<LintFinding> {
    let contexts: HashMap<&str, &BoundedContext> = ctx
        .bounded_contexts
        .iter()
        .map(|c| (c.id.as_str(), c))
        .collect();
    let mut judged: HashSet<(&str, &str)> = HashSet::new();
    let mut findings = Vec::new();

    for source in &ctx.bounded_contexts {
        for relationship in &source.relationships {
            let Some(target) = contexts.get(relationship.target_context_id.as_str()) else {
                continue;
            };
            if target.id == source.id {
                continue;
            }
            if !judged.insert(unordered_pair(&source.id, &target.id)) {
                continue;
            }

            let connecting = ctx
                .domain_events
                .iter()
                .filter(|event| connects(event, source, target))
                .count();
            if connecting >= MIN_CONNECTING_EVENTS {
                continue;
            }

            findings.push(
                LintFinding::new(
                    CONTEXT_RELATIONSHIP_HAS_EVENT_FLOW,
                    LintSeverity::Warning,
                    LintCategory::DisconnectedWorkflow,
                    EntityType::BoundedContext,
                    &source.id,
                    format!(
                        "Bounded contexts {} and {} are related but no domain event flows between them",
                        source.slug, target.slug
                    ),
                )
                .with_entity_name(&source.title)
                .with_related([target.id.as_str()])
                .with_suggestion(format!(
                    "Model an event produced by {} and consumed by {}, or the reverse",
                    source.slug, target.slug
                )),
            );
        }
    }
    findings
}

fn unordered_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn connects(event: &DomainEvent, a: &BoundedContext, b: &BoundedContext) -> bool {
    let flows = |from: &BoundedContext, to: &BoundedContext| {
        event.context_id == from.id && event.consumed_by.iter().any(|slug| *slug == to.slug)
    };
    flows(a, b) || flows(b, a)
}

/// Every transition should leave a state reachable from the initial state,
/// taken as the `from` of the first transition.
fn workflow_states_connected(ctx: &LintContext) -> Vec<LintFinding> {
    let mut findings = Vec::new();

    for workflow in &ctx.workflows {
        let Some(first) = workflow.transitions.first() else {
            continue;
        };

        let mut reachable: HashSet<&str> = HashSet::from([first.from.as_str()]);
        loop {
            let mut grew = false;
            for transition in &workflow.transitions {
                if reachable.contains(transition.from.as_str())
                    && reachable.insert(transition.to.as_str())
                {
                    grew = true;
                }
            }
            if !grew {
                break;
            }
        }

        let mut stranded: Vec<&str> = Vec::new();
        for transition in &workflow.transitions {
            let from = transition.from.as_str();
            if !reachable.contains(from) && !stranded.contains(&from) {
                stranded.push(from);
            }
        }
        if stranded.is_empty() {
            continue;
        }

        findings.push(
            LintFinding::new(
                WORKFLOW_STATES_CONNECTED,
                LintSeverity::Warning,
                LintCategory::DisconnectedWorkflow,
                EntityType::Workflow,
                &workflow.id,
                format!(
                    "Workflow {} has states unreachable from {}: {}",
                    workflow.slug,
                    first.from,
                    stranded.join(", ")
                ),
            )
            .with_entity_name(&workflow.title)
            .with_related(stranded.iter().copied())
            .with_suggestion(format!(
                "Add transitions that lead from {} into the stranded states",
                first.from
            )),
        );
    }
    findings
}

fn event_aggregate_context_consistent(ctx: &LintContext) -> Vec<LintFinding> {
    let aggregates: HashMap<&str, &str> = ctx
        .aggregates
        .iter()
        .map(|a| (a.id.as_str(), a.context_id.as_str()))
        .collect();

    ctx.domain_events
        .iter()
        .filter_map(|event| {
            let aggregate_id = event.aggregate_ref()?;
            let owner = *aggregates.get(aggregate_id)?;
            if owner == event.context_id {
                return None;
            }
            Some(
                LintFinding::new(
                    EVENT_AGGREGATE_CONTEXT_CONSISTENT,
                    LintSeverity::Warning,
                    LintCategory::SemanticGap,
                    EntityType::DomainEvent,
                    &event.id,
                    format!(
                        "Domain event {} belongs to context {} but its aggregate {} lives in {}",
                        event.slug, event.context_id, aggregate_id, owner
                    ),
                )
                .with_entity_name(&event.slug)
                .with_related([aggregate_id, owner])
                .with_suggestion(format!(
                    "Move {} to context {} or attach it to an aggregate of {}",
                    event.slug, owner, event.context_id
                )),
            )
        })
        .collect()
}

fn event_capability_taxonomy_aligned(ctx: &LintContext) -> Vec<LintFinding> {
    let capability_nodes: HashMap<&str, &str> = ctx
        .capabilities
        .iter()
        .filter_map(|c| Some((c.id.as_str(), c.taxonomy_node_ref()?)))
        .collect();
    let context_nodes: HashMap<&str, &str> = ctx
        .bounded_contexts
        .iter()
        .filter_map(|c| Some((c.id.as_str(), c.taxonomy_node_ref()?)))
        .collect();

    ctx.domain_events
        .iter()
        .filter_map(|event| {
            let capability_id = event.source_capability_ref()?;
            let capability_node = *capability_nodes.get(capability_id)?;
            let context_node = *context_nodes.get(event.context_id.as_str())?;
            if capability_node == context_node {
                return None;
            }
            Some(
                LintFinding::new(
                    EVENT_CAPABILITY_TAXONOMY_ALIGNED,
                    LintSeverity::Info,
                    LintCategory::SemanticGap,
                    EntityType::DomainEvent,
                    &event.id,
                    format!(
                        "Domain event {} is sourced from capability {} under taxonomy node {}, but its context sits under {}",
                        event.slug, capability_id, capability_node, context_node
                    ),
                )
                .with_entity_name(&event.slug)
                .with_related([capability_id, event.context_id.as_str()])
                .with_suggestion(format!(
                    "Check whether {} belongs to the capability {} or to another context",
                    event.slug, capability_id
                )),
            )
        })
        .collect()
}
