//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Repository implementations (in-memory, JSON files)

pub mod storage;

pub use storage::{InMemoryStore, JsonFileStore};
