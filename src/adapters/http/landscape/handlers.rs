//! HTTP handlers for landscape endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use tracing::error;

use crate::application::{LintLandscapeError, LintLandscapeHandler, LintLandscapeQuery};
use crate::domain::foundation::{DomainModelId, ValidationError};
use crate::domain::lint::LintFilter;
use crate::ports::LandscapeReader;

use super::dto::{ErrorResponse, HealthResponse, LintReportResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Landscape API error that implements IntoResponse.
#[derive(Debug)]
pub enum LandscapeApiError {
    BadRequest(ValidationError),
    NotFound(DomainModelId),
    Internal(String),
}

/// Client-facing text for 500s; the cause is only logged.
const INTERNAL_ERROR_MESSAGE: &str = "Landscape snapshot could not be read";

impl IntoResponse for LandscapeApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            LandscapeApiError::BadRequest(err) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::validation(&err))
            }
            LandscapeApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found("Domain model", id.as_str()),
            ),
            LandscapeApiError::Internal(msg) => {
                error!(error = %msg, "Landscape lint failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal(INTERNAL_ERROR_MESSAGE),
                )
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<ValidationError> for LandscapeApiError {
    fn from(error: ValidationError) -> Self {
        LandscapeApiError::BadRequest(error)
    }
}

impl From<LintLandscapeError> for LandscapeApiError {
    fn from(error: LintLandscapeError) -> Self {
        match error {
            LintLandscapeError::DomainModelNotFound(id) => LandscapeApiError::NotFound(id),
            LintLandscapeError::SnapshotUnreadable(msg) => {
                LandscapeApiError::Internal(format!("Snapshot unreadable: {}", msg))
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing landscape dependencies.
#[derive(Clone)]
pub struct LandscapeAppState {
    pub landscape_reader: Arc<dyn LandscapeReader>,
}

impl LandscapeAppState {
    pub fn new(landscape_reader: Arc<dyn LandscapeReader>) -> Self {
        Self { landscape_reader }
    }

    pub fn lint_landscape_handler(&self) -> LintLandscapeHandler {
        LintLandscapeHandler::new(self.landscape_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Parameters
// ════════════════════════════════════════════════════════════════════════════════

/// Comma-separated filter values for the lint endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct LintParams {
    pub severity: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "entityType")]
    pub entity_type: Option<String>,
}

impl LintParams {
    fn to_filter(&self) -> Result<LintFilter, ValidationError> {
        LintFilter::from_csv(
            self.severity.as_deref(),
            self.category.as_deref(),
            self.entity_type.as_deref(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /landscape/:domain_model_id/lint
pub async fn get_landscape_lint(
    State(state): State<LandscapeAppState>,
    Path(domain_model_id): Path<String>,
    Query(params): Query<LintParams>,
) -> Result<impl IntoResponse, LandscapeApiError> {
    let domain_model_id = DomainModelId::new(domain_model_id)?;
    let filter = params.to_filter()?;

    let query = LintLandscapeQuery::new(domain_model_id).with_filter(filter);
    let result = state.lint_landscape_handler().handle(query).await?;

    Ok((StatusCode::OK, Json(LintReportResponse::from(result))))
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let id = DomainModelId::new("dm-1").unwrap();
        let response = LandscapeApiError::NotFound(id).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let err = ValidationError::empty_field("domain_model_id");
        let response = LandscapeApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unreadable_snapshot_maps_to_500_without_leaking_cause() {
        let err = LintLandscapeError::SnapshotUnreadable(
            "/srv/snapshots/commerce.yaml: bad yaml at line 3".to_string(),
        );
        let response = LandscapeApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "INTERNAL_ERROR");
        assert_eq!(body["message"], INTERNAL_ERROR_MESSAGE);
        let text = String::from_utf8_lossy(&bytes);
        assert!(!text.contains("/srv/snapshots"));
        assert!(!text.contains("bad yaml"));
    }

    #[test]
    fn params_parse_into_filter() {
        let params = LintParams {
            severity: Some("error,warning".to_string()),
            category: None,
            entity_type: Some("workflow".to_string()),
        };
        let filter = params.to_filter().unwrap();
        assert_eq!(filter.severities.len(), 2);
        assert!(filter.categories.is_empty());
        assert_eq!(filter.entity_types.len(), 1);
    }

    #[test]
    fn unknown_param_value_is_rejected() {
        let params = LintParams {
            entity_type: Some("spaceship".to_string()),
            ..Default::default()
        };
        assert!(params.to_filter().is_err());
    }
}
