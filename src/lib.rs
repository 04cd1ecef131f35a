//! Landscape Lint - Integrity checks for software landscapes
//!
//! This crate cross-checks governance artifacts (personas, user stories,
//! capabilities), the taxonomy and a domain model for broken references,
//! coverage gaps and semantic inconsistencies, and serves the results
//! over HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
