//! Landscape Integrity Linter.
//!
//! Pure domain service that checks a fully-resolved landscape snapshot for
//! broken references, coverage gaps and semantic inconsistencies.
//!
//! # Components
//!
//! - `LintContext` - Read-only bundle of every entity collection
//! - `rules` - Referential, coverage and semantic rule tables
//! - `lint` - Runs all rule sets and computes the summary
//! - `LintFilter` - Post-hoc narrowing of findings for API consumers
//!
//! # Design Philosophy
//!
//! Rules are stateless functions over the context. Nothing here performs
//! I/O, logs, or mutates input, so the linter can run concurrently on
//! independent contexts without coordination.

mod context;
mod filter;
mod finding;
mod linter;
mod report;
pub mod rules;

#[cfg(test)]
pub(crate) mod fixtures;

pub use context::LintContext;
pub use filter::LintFilter;
pub use finding::{EntityType, LintCategory, LintFinding, LintSeverity};
pub use linter::{collect_findings, compute_coverage_scores, lint};
pub use report::{coverage_percentage, CoverageScores, LintReport, LintSummary};
pub use rules::{LintRule, RuleCheck};
