//! Landscape Reader Adapters
//!
//! Implementations of the LandscapeReader port.
//!
//! ## Available Adapters
//!
//! - **FileLandscapeReader** - Loads pre-assembled snapshot documents from disk
//! - **InMemoryLandscapeReader** - Holds contexts in memory (testing/embedding)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::landscape::{FileLandscapeReader, InMemoryLandscapeReader};
//!
//! // Production: one JSON or YAML document per domain model
//! let reader = FileLandscapeReader::new("./snapshots");
//!
//! // Testing: contexts inserted directly
//! let reader = InMemoryLandscapeReader::new();
//! ```

mod file_reader;
mod in_memory;

pub use file_reader::FileLandscapeReader;
pub use in_memory::InMemoryLandscapeReader;
