//! Lint rule sets.
//!
//! Every rule is a plain function from the context to its findings. Rules
//! are grouped into three tables that the linter runs in order: referential,
//! coverage, semantic. Within a table, rules run in declaration order and
//! walk the context collections in input order, so output is deterministic.

pub mod coverage;
pub mod referential;
pub mod semantic;

use std::collections::HashSet;

use super::context::LintContext;
use super::finding::LintFinding;

/// Signature shared by all rules.
pub type RuleCheck = fn(&LintContext) -> Vec<LintFinding>;

/// A named rule.
#[derive(Clone, Copy)]
pub struct LintRule {
    pub name: &'static str,
    pub check: RuleCheck,
}

impl LintRule {
    pub fn run(&self, ctx: &LintContext) -> Vec<LintFinding> {
        (self.check)(ctx)
    }
}

impl std::fmt::Debug for LintRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LintRule").field("name", &self.name).finish()
    }
}

/// Runs every rule in the table and concatenates their findings.
pub fn run_rules(rules: &[LintRule], ctx: &LintContext) -> Vec<LintFinding> {
    rules.iter().flat_map(|rule| rule.run(ctx)).collect()
}

/// Collects a lookup set of keys borrowed from `items`.
pub(crate) fn key_set<'a, T, F>(items: &'a [T], key: F) -> HashSet<&'a str>
where
    F: Fn(&'a T) -> &'a str,
{
    items.iter().map(key).collect()
}
