//! HTTP routes for landscape endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_landscape_lint, health, LandscapeAppState};

/// Creates the landscape router with all routes.
pub fn landscape_routes(state: LandscapeAppState) -> Router {
    Router::new()
        // GET /landscape/:domain_model_id/lint
        .route("/landscape/:domain_model_id/lint", get(get_landscape_lint))
        // GET /health
        .route("/health", get(health))
        .with_state(state)
}
