//! Typed access to the extension storage.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use chatshare_core::error::{PopupError, Result};
use chatshare_core::storage::KeyValueStore;

/// Wraps a [`KeyValueStore`] with the two primitives the popup relies on.
///
/// Reads fail loudly so callers can fall back to defaults; writes are
/// fire-and-forget and only log on failure.
#[derive(Clone)]
pub struct StorageAdapter {
    store: Arc<dyn KeyValueStore>,
}

impl StorageAdapter {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the value stored under `key`, or `None` when absent or `null`.
    ///
    /// Fails when the backend reports an error or the value does not decode
    /// as `T`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.store.get(key).await? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value).map(Some).map_err(|e| {
                PopupError::Serialization {
                    format: "JSON".to_string(),
                    message: format!("Failed to decode '{}': {}", key, e),
                }
            }),
        }
    }

    /// Overwrites the value under `key`. Errors are logged, never returned.
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(key, error = %e, "Error serializing value for storage");
                return;
            }
        };

        if let Err(e) = self.store.set(key, value).await {
            tracing::error!(key, error = %e, "Error saving to storage");
        }
    }

    pub async fn remove(&self, key: &str) -> Result<()> {
        self.store.remove(key).await
    }

    /// Wipes the whole storage namespace.
    pub async fn clear(&self) -> Result<()> {
        self.store.clear().await
    }
}
