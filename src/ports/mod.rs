//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `LandscapeReader` - Assembles a `LintContext` for a domain model

mod landscape_reader;

pub use landscape_reader::{LandscapeError, LandscapeReader};
