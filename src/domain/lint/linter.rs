//! Linter orchestrator - runs every rule set and summarizes the result.

use std::collections::HashSet;

use super::context::LintContext;
use super::finding::LintFinding;
use super::report::{coverage_percentage, CoverageScores, LintReport, LintSummary};
use super::rules::{coverage, referential, semantic};
use crate::domain::foundation::Timestamp;

/// Lints a landscape.
///
/// Findings are ordered referential, coverage, semantic. Apart from
/// `generated_at`, the report is a pure function of `ctx`.
pub fn lint(ctx: &LintContext) -> LintReport {
    let findings = collect_findings(ctx);
    let summary = LintSummary::tally(&findings, compute_coverage_scores(ctx));

    LintReport {
        domain_model_id: ctx.domain_model_id.clone(),
        governance_snapshot_id: ctx.governance_snapshot_id.clone(),
        taxonomy_snapshot_id: ctx.taxonomy_snapshot_id.clone(),
        generated_at: Timestamp::now(),
        findings,
        summary,
    }
}

/// Concatenated findings of all three rule sets.
pub fn collect_findings(ctx: &LintContext) -> Vec<LintFinding> {
    let mut findings = referential::check(ctx);
    findings.extend(coverage::check(ctx));
    findings.extend(semantic::check(ctx));
    findings
}

/// Computes the seven linkage percentages.
pub fn compute_coverage_scores(ctx: &LintContext) -> CoverageScores {
    let persona_refs: HashSet<&str> = ctx.user_stories.iter().map(|s| s.persona.as_str()).collect();
    let capability_ids: HashSet<&str> = ctx.capabilities.iter().map(|c| c.id.as_str()).collect();
    let context_ids: HashSet<&str> = ctx.bounded_contexts.iter().map(|c| c.id.as_str()).collect();
    let context_slugs: HashSet<&str> =
        ctx.bounded_contexts.iter().map(|c| c.slug.as_str()).collect();
    let context_nodes: HashSet<&str> = ctx
        .bounded_contexts
        .iter()
        .filter_map(|c| c.taxonomy_node_ref())
        .collect();
    let producers: HashSet<&str> = ctx.domain_events.iter().map(|e| e.context_id.as_str()).collect();

    let personas_with_story = ctx
        .personas
        .iter()
        .filter(|p| persona_refs.contains(p.id.as_str()))
        .count();

    let stories_with_capability = ctx
        .user_stories
        .iter()
        .filter(|s| s.capabilities.iter().any(|c| capability_ids.contains(c.as_str())))
        .count();

    let capabilities_in_context = ctx
        .capabilities
        .iter()
        .filter(|c| c.taxonomy_node_ref().map_or(false, |node| context_nodes.contains(node)))
        .count();

    let internal_contexts: Vec<_> = ctx.bounded_contexts.iter().filter(|c| c.is_internal()).collect();
    let producing_contexts = internal_contexts
        .iter()
        .filter(|c| producers.contains(c.id.as_str()))
        .count();

    let consumed_events = ctx
        .domain_events
        .iter()
        .filter(|e| e.consumed_by.iter().any(|slug| context_slugs.contains(slug.as_str())))
        .count();

    let resolved_workflows = ctx
        .workflows
        .iter()
        .filter(|w| w.context_ids.iter().all(|id| context_ids.contains(id.as_str())))
        .count();

    let sourced_events = ctx
        .domain_events
        .iter()
        .filter(|e| e.source_capability_ref().is_some())
        .count();

    CoverageScores {
        persona_to_story: coverage_percentage(personas_with_story, ctx.personas.len()),
        story_to_capability: coverage_percentage(stories_with_capability, ctx.user_stories.len()),
        capability_to_context: coverage_percentage(capabilities_in_context, ctx.capabilities.len()),
        context_to_event: coverage_percentage(producing_contexts, internal_contexts.len()),
        event_to_consumer: coverage_percentage(consumed_events, ctx.domain_events.len()),
        workflow_to_context: coverage_percentage(resolved_workflows, ctx.workflows.len()),
        event_to_capability: coverage_percentage(sourced_events, ctx.domain_events.len()),
    }
}

#[cfg(test)]
#[path = "linter_test.rs"]
mod linter_test;
