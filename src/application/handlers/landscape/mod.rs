//! Landscape query handlers.
//!
//! Read-only handlers that assemble a landscape and lint it.

mod lint_landscape;

pub use lint_landscape::{
    LintLandscapeError, LintLandscapeHandler, LintLandscapeQuery, LintLandscapeResult,
};
