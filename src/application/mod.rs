//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Linting is read-only, so every handler here is a query handler.

pub mod handlers;

pub use handlers::{
    LintLandscapeError, LintLandscapeHandler, LintLandscapeQuery, LintLandscapeResult,
};
