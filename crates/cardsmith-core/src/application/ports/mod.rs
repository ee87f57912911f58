//! Application ports (traits) for external dependencies.
//!
//! Adapters in `cardsmith-adapters` implement these.
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `KeyValueStore`: string blobs stored under string keys

pub mod output;

pub use output::KeyValueStore;
