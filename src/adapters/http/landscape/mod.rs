//! Landscape HTTP adapter module.
//!
//! Provides the REST endpoint for linting a domain model's landscape.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, HealthResponse, LintReportResponse};
pub use handlers::{LandscapeApiError, LandscapeAppState};
pub use routes::landscape_routes;
