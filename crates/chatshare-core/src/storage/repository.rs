//! Key-value store trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Asynchronous key-value storage holding JSON values.
///
/// Mirrors the extension's local storage area: every write replaces the whole
/// value under a key, and there is no versioning or batching.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Overwrites the value stored under `key`.
    async fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Removes `key` from the namespace. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Wipes the entire namespace.
    async fn clear(&self) -> Result<()>;
}
