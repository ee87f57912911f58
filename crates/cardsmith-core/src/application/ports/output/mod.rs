//! Driven (output) ports - implemented by infrastructure.

use crate::error::CardsmithResult;

/// Port for persisting string values under string keys.
///
/// Implemented by:
/// - `cardsmith_adapters::store::FileStore` (production)
/// - `cardsmith_adapters::store::MemoryStore` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent.
    fn load(&self, key: &str) -> CardsmithResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> CardsmithResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> CardsmithResult<()>;
}
