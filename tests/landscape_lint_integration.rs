//! Integration tests for the landscape lint endpoint.
//!
//! These tests verify the end-to-end flow:
//! 1. A snapshot document on disk is assembled by the file reader
//! 2. The lint endpoint runs every rule set over it
//! 3. Query filters narrow findings without touching the summary
//! 4. Reader failures surface as the right HTTP status
//!
//! Uses a temporary snapshot directory; no server process is started.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use landscape_lint::adapters::http::{landscape_routes, LandscapeAppState};
use landscape_lint::adapters::FileLandscapeReader;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Story with an unknown persona and capability, plus an event in a
/// context that does not exist.
fn broken_snapshot() -> Value {
    json!({
        "domainModelId": "commerce",
        "governanceSnapshotId": "gov-2024-06",
        "taxonomySnapshotId": "tax-2024-06",
        "personas": [
            { "id": "PER-001", "name": "Shopper", "type": "customer", "typicalCapabilities": ["CAP-001"] },
            { "id": "PER-002", "name": "Support Agent", "type": "staff" }
        ],
        "userStories": [
            { "id": "US-001", "title": "Place order", "persona": "PER-001", "capabilities": ["CAP-001"], "status": "done" },
            { "id": "US-002", "title": "Refund order", "persona": "PER-999", "capabilities": ["CAP-999"] }
        ],
        "capabilities": [
            { "id": "CAP-001", "title": "Checkout", "taxonomyNode": "storefront", "roadCount": 1, "storyCount": 1 }
        ],
        "taxonomyNodes": [
            { "name": "storefront", "fqtn": "commerce.storefront", "nodeType": "subsystem" }
        ],
        "boundedContexts": [
            { "id": "BC-001", "slug": "ordering", "title": "Ordering", "contextType": "internal", "taxonomyNode": "storefront" }
        ],
        "aggregates": [
            { "id": "AGG-001", "contextId": "BC-001", "slug": "order" }
        ],
        "domainEvents": [
            { "id": "EV-001", "contextId": "BC-001", "aggregateId": "AGG-001", "slug": "order-placed", "sourceCapabilityId": "CAP-001" },
            { "id": "EV-002", "contextId": "BC-404", "slug": "refund-issued" }
        ]
    })
}

struct TestServer {
    _dir: TempDir,
    app: Router,
}

impl TestServer {
    fn with_documents(documents: &[(&str, String)]) -> Self {
        let dir = TempDir::new().unwrap();
        for (name, contents) in documents {
            std::fs::write(dir.path().join(name), contents).unwrap();
        }
        let reader = FileLandscapeReader::new(dir.path());
        let app = landscape_routes(LandscapeAppState::new(Arc::new(reader)));
        Self { _dir: dir, app }
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

fn commerce_server() -> TestServer {
    TestServer::with_documents(&[("commerce.json", broken_snapshot().to_string())])
}

fn findings(body: &Value) -> &Vec<Value> {
    body["findings"].as_array().unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn lint_reports_every_broken_reference() {
    let server = commerce_server();
    let (status, body) = server.get("/landscape/commerce/lint").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["domainModelId"], "commerce");
    assert_eq!(body["governanceSnapshotId"], "gov-2024-06");
    assert_eq!(body["taxonomySnapshotId"], "tax-2024-06");
    assert!(body["generatedAt"].is_string());

    let errors: Vec<&Value> = findings(&body)
        .iter()
        .filter(|f| f["severity"] == "error")
        .collect();
    assert!(errors.len() >= 3);
    assert_eq!(body["summary"]["bySeverity"]["error"], errors.len());

    let broken_entities: Vec<&str> = errors
        .iter()
        .filter_map(|f| f["entityId"].as_str())
        .collect();
    assert!(broken_entities.contains(&"US-002"));
    assert!(broken_entities.contains(&"EV-002"));
}

#[tokio::test]
async fn summary_is_consistent_with_findings() {
    let server = commerce_server();
    let (_, body) = server.get("/landscape/commerce/lint").await;

    let total = body["summary"]["total"].as_u64().unwrap();
    assert_eq!(findings(&body).len() as u64, total);
    assert_eq!(body["filteredCount"], total);

    let sum = |key: &str| -> u64 {
        body["summary"][key]
            .as_object()
            .unwrap()
            .values()
            .map(|v| v.as_u64().unwrap())
            .sum()
    };
    assert_eq!(sum("bySeverity"), total);
    assert_eq!(sum("byCategory"), total);
}

#[tokio::test]
async fn coverage_scores_reflect_partial_linkage() {
    let server = commerce_server();
    let (_, body) = server.get("/landscape/commerce/lint").await;

    let scores = &body["summary"]["coverageScores"];
    // PER-001 has a story, PER-002 does not
    assert_eq!(scores["personaToStory"], 50.0);
    // EV-001 names its source capability, EV-002 does not
    assert_eq!(scores["eventToCapability"], 50.0);
    assert_eq!(scores["workflowToContext"], 100.0);
}

#[tokio::test]
async fn filters_change_findings_but_never_summary() {
    let server = commerce_server();
    let (_, full) = server.get("/landscape/commerce/lint").await;
    let (status, filtered) = server
        .get("/landscape/commerce/lint?severity=error&category=broken-reference&entityType=user-story,domain-event")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(filtered["summary"], full["summary"]);

    let kept = findings(&filtered);
    assert!(!kept.is_empty());
    assert!(kept.len() < findings(&full).len());
    assert_eq!(filtered["filteredCount"], kept.len());
    assert!(kept.iter().all(|f| f["severity"] == "error"
        && f["category"] == "broken-reference"
        && (f["entityType"] == "user-story" || f["entityType"] == "domain-event")));
}

#[tokio::test]
async fn yaml_snapshot_is_served() {
    let yaml = "domainModelId: empty-model\n";
    let server = TestServer::with_documents(&[("empty-model.yaml", yaml.to_string())]);
    let (status, body) = server.get("/landscape/empty-model/lint").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["total"], 0);
    assert_eq!(body["summary"]["coverageScores"]["capabilityToContext"], 100.0);
    assert!(body.get("governanceSnapshotId").is_none());
}

#[tokio::test]
async fn unknown_domain_model_returns_404() {
    let server = commerce_server();
    let (status, body) = server.get("/landscape/inventory/lint").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "DOMAIN_MODEL_NOT_FOUND");
}

#[tokio::test]
async fn unknown_filter_value_returns_400() {
    let server = commerce_server();
    let (status, body) = server.get("/landscape/commerce/lint?severity=fatal").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "severity");
    assert!(body["message"].as_str().unwrap().contains("fatal"));
}

#[tokio::test]
async fn malformed_snapshot_returns_500() {
    let server = TestServer::with_documents(&[("garbled.json", "{ \"domainModelId\": ".to_string())]);
    let (status, body) = server.get("/landscape/garbled/lint").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert_eq!(body["message"], "Landscape snapshot could not be read");
    assert!(body.get("details").is_none());
}
