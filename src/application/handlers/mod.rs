//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod landscape;

pub use landscape::{
    LintLandscapeError, LintLandscapeHandler, LintLandscapeQuery, LintLandscapeResult,
};
