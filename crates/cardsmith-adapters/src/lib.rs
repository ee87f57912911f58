//! Infrastructure adapters for Cardsmith.
//!
//! This crate implements the ports defined in `cardsmith-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod store;

// Re-export commonly used adapters
pub use store::{FileStore, MemoryStore};
