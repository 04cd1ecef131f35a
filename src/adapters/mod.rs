//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `landscape` - Landscape readers (snapshot files, in-memory)
//! - `http` - REST endpoints

pub mod http;
pub mod landscape;

pub use landscape::{FileLandscapeReader, InMemoryLandscapeReader};
