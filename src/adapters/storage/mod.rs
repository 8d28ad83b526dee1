//! Storage Adapters
//!
//! Implementations of the repository ports for persisting surveys,
//! responses, and rank definitions.
//!
//! ## Available Adapters
//!
//! - **JsonFileStore** - Stores data as JSON files on disk, one
//!   directory per organization
//! - **InMemoryStore** - Stores data in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryStore, JsonFileStore};
//!
//! // Production: file-based storage
//! let store = JsonFileStore::new("./data");
//!
//! // Testing: in-memory storage
//! let store = InMemoryStore::new();
//! ```

mod in_memory;
mod json_file;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
