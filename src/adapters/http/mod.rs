//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod landscape;

// Re-export key types for convenience
pub use landscape::landscape_routes;
pub use landscape::LandscapeAppState;
