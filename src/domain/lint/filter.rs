//! Post-hoc narrowing of lint findings.

use std::collections::BTreeSet;
use std::str::FromStr;

use super::finding::{EntityType, LintCategory, LintFinding, LintSeverity};
use crate::domain::foundation::ValidationError;

/// Filter over severity, category and entity type.
///
/// An empty set places no constraint on its dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintFilter {
    pub severities: BTreeSet<LintSeverity>,
    pub categories: BTreeSet<LintCategory>,
    pub entity_types: BTreeSet<EntityType>,
}

impl LintFilter {
    /// Parses comma-separated filter values as sent on the query string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` naming the first unknown value.
    pub fn from_csv(
        severity: Option<&str>,
        category: Option<&str>,
        entity_type: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            severities: parse_csv(severity)?,
            categories: parse_csv(category)?,
            entity_types: parse_csv(entity_type)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.severities.is_empty() && self.categories.is_empty() && self.entity_types.is_empty()
    }

    pub fn matches(&self, finding: &LintFinding) -> bool {
        (self.severities.is_empty() || self.severities.contains(&finding.severity))
            && (self.categories.is_empty() || self.categories.contains(&finding.category))
            && (self.entity_types.is_empty() || self.entity_types.contains(&finding.entity_type))
    }

    /// Findings that pass the filter, in their original order.
    pub fn apply(&self, findings: &[LintFinding]) -> Vec<LintFinding> {
        findings.iter().filter(|f| self.matches(f)).cloned().collect()
    }
}

fn parse_csv<T>(raw: Option<&str>) -> Result<BTreeSet<T>, ValidationError>
where
    T: FromStr<Err = ValidationError> + Ord,
{
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<T>())
        .collect()
}
