//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, errors)
//! - `landscape` - Governance, taxonomy and domain-model entity projections
//! - `lint` - Pure landscape integrity linter

pub mod foundation;
pub mod landscape;
pub mod lint;
