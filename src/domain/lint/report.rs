//! Lint report and summary types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::finding::{LintCategory, LintFinding, LintSeverity};
use crate::domain::foundation::{DomainModelId, SnapshotId, Timestamp};

/// Output of one lint run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintReport {
    pub domain_model_id: DomainModelId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub governance_snapshot_id: Option<SnapshotId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy_snapshot_id: Option<SnapshotId>,
    pub generated_at: Timestamp,
    pub findings: Vec<LintFinding>,
    pub summary: LintSummary,
}

impl LintReport {
    /// Findings of the given severity.
    pub fn findings_with_severity(&self, severity: LintSeverity) -> impl Iterator<Item = &LintFinding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    pub fn has_errors(&self) -> bool {
        self.summary.count_for_severity(LintSeverity::Error) > 0
    }
}

/// Counts and coverage scores over the full, unfiltered findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintSummary {
    pub total: usize,
    /// Every category key is present, zero or not.
    pub by_category: BTreeMap<LintCategory, usize>,
    /// Every severity key is present, zero or not.
    pub by_severity: BTreeMap<LintSeverity, usize>,
    pub coverage_scores: CoverageScores,
}

impl LintSummary {
    /// Builds the fixed-key histograms for the given findings.
    pub fn tally(findings: &[LintFinding], coverage_scores: CoverageScores) -> Self {
        let mut by_category: BTreeMap<LintCategory, usize> =
            LintCategory::all().iter().map(|c| (*c, 0)).collect();
        let mut by_severity: BTreeMap<LintSeverity, usize> =
            LintSeverity::all().iter().map(|s| (*s, 0)).collect();

        for finding in findings {
            *by_category.entry(finding.category).or_insert(0) += 1;
            *by_severity.entry(finding.severity).or_insert(0) += 1;
        }

        Self {
            total: findings.len(),
            by_category,
            by_severity,
            coverage_scores,
        }
    }

    pub fn count_for_category(&self, category: LintCategory) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    pub fn count_for_severity(&self, severity: LintSeverity) -> usize {
        self.by_severity.get(&severity).copied().unwrap_or(0)
    }
}

/// Seven linkage percentages, each 0-100 with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageScores {
    pub persona_to_story: f64,
    pub story_to_capability: f64,
    pub capability_to_context: f64,
    pub context_to_event: f64,
    pub event_to_consumer: f64,
    pub workflow_to_context: f64,
    pub event_to_capability: f64,
}

impl CoverageScores {
    /// All scores in declaration order, keyed by wire name.
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("personaToStory", self.persona_to_story),
            ("storyToCapability", self.story_to_capability),
            ("capabilityToContext", self.capability_to_context),
            ("contextToEvent", self.context_to_event),
            ("eventToConsumer", self.event_to_consumer),
            ("workflowToContext", self.workflow_to_context),
            ("eventToCapability", self.event_to_capability),
        ]
    }
}

/// Percentage of `numerator` over `denominator`, rounded to one decimal.
///
/// An empty denominator is vacuously complete and scores 100.
pub fn coverage_percentage(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 100.0;
    }
    ((numerator as f64 / denominator as f64) * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lint::finding::EntityType;

    fn scores(value: f64) -> CoverageScores {
        CoverageScores {
            persona_to_story: value,
            story_to_capability: value,
            capability_to_context: value,
            context_to_event: value,
            event_to_consumer: value,
            workflow_to_context: value,
            event_to_capability: value,
        }
    }

    #[test]
    fn coverage_percentage_empty_denominator_is_100() {
        assert_eq!(coverage_percentage(0, 0), 100.0);
    }

    #[test]
    fn coverage_percentage_rounds_to_one_decimal() {
        assert_eq!(coverage_percentage(1, 2), 50.0);
        assert_eq!(coverage_percentage(1, 3), 33.3);
        assert_eq!(coverage_percentage(2, 3), 66.7);
        assert_eq!(coverage_percentage(0, 5), 0.0);
        assert_eq!(coverage_percentage(7, 7), 100.0);
    }

    #[test]
    fn tally_initializes_every_key() {
        let summary = LintSummary::tally(&[], scores(100.0));
        assert_eq!(summary.total, 0);
        assert_eq!(summary.by_category.len(), 6);
        assert_eq!(summary.by_severity.len(), 3);
        assert!(summary.by_category.values().all(|c| *c == 0));
    }

    #[test]
    fn tally_counts_by_category_and_severity() {
        let findings = vec![
            LintFinding::new(
                "a",
                LintSeverity::Error,
                LintCategory::BrokenReference,
                EntityType::UserStory,
                "US-1",
                "m",
            ),
            LintFinding::new(
                "b",
                LintSeverity::Warning,
                LintCategory::IncompleteCoverage,
                EntityType::Persona,
                "PER-1",
                "m",
            ),
            LintFinding::new(
                "c",
                LintSeverity::Error,
                LintCategory::BrokenReference,
                EntityType::DomainEvent,
                "EV-1",
                "m",
            ),
        ];
        let summary = LintSummary::tally(&findings, scores(50.0));
        assert_eq!(summary.total, 3);
        assert_eq!(summary.count_for_severity(LintSeverity::Error), 2);
        assert_eq!(summary.count_for_severity(LintSeverity::Info), 0);
        assert_eq!(summary.count_for_category(LintCategory::BrokenReference), 2);
        assert_eq!(summary.count_for_category(LintCategory::IncompleteCoverage), 1);
    }

    #[test]
    fn summary_serializes_fixed_keys() {
        let summary = LintSummary::tally(&[], scores(100.0));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["byCategory"]["broken-reference"], 0);
        assert_eq!(json["byCategory"]["semantic-gap"], 0);
        assert_eq!(json["bySeverity"]["warning"], 0);
        assert_eq!(json["coverageScores"]["personaToStory"], 100.0);
        assert_eq!(json["coverageScores"]["eventToCapability"], 100.0);
    }

    #[test]
    fn entries_lists_all_seven_scores() {
        let entries = scores(12.5).entries();
        assert_eq!(entries.len(), 7);
        assert!(entries.iter().all(|(_, v)| *v == 12.5));
    }
}
