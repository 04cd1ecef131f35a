//! HTTP DTOs for landscape endpoints.
//!
//! Linting is read-only, so we only have response DTOs. The lint report is
//! already designed for serialization and is embedded as-is.

use serde::{Deserialize, Serialize};

use crate::application::LintLandscapeResult;
use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::lint::LintReport;

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Lint report plus the number of findings that survived filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintReportResponse {
    #[serde(flatten)]
    pub report: LintReport,
    pub filtered_count: usize,
}

impl From<LintLandscapeResult> for LintReportResponse {
    fn from(result: LintLandscapeResult) -> Self {
        Self {
            report: result.report,
            filtered_count: result.filtered_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(err: &ValidationError) -> Self {
        let details = match err {
            ValidationError::EmptyField { field } => serde_json::json!({ "field": field }),
            ValidationError::InvalidFormat { field, .. } => serde_json::json!({ "field": field }),
        };
        Self {
            code: ErrorCode::from(err).to_string(),
            message: err.to_string(),
            details: Some(details),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new(
            ErrorCode::DomainModelNotFound,
            format!("{} not found: {}", resource_type, id),
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lint::fixtures::broken_context;
    use crate::domain::lint::lint;

    #[test]
    fn report_response_flattens_report_fields() {
        let report = lint(&broken_context());
        let response = LintReportResponse {
            filtered_count: 3,
            report,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["domainModelId"], "dm-test");
        assert_eq!(json["filteredCount"], 3);
        assert!(json["findings"].is_array());
        assert!(json["summary"]["bySeverity"]["error"].is_number());
        assert!(json["summary"]["coverageScores"]["personaToStory"].is_number());
        assert!(json.get("report").is_none());
    }

    #[test]
    fn validation_error_response_names_the_field() {
        let err = ValidationError::invalid_format("severity", "unknown value 'fatal'");
        let response = ErrorResponse::validation(&err);

        assert_eq!(response.code, "INVALID_FORMAT");
        assert!(response.message.contains("fatal"));
        assert_eq!(response.details.unwrap()["field"], "severity");
    }

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_string(&ErrorResponse::internal("boom")).unwrap();
        assert!(!json.contains("details"));
        assert!(json.contains("INTERNAL_ERROR"));
    }
}
