//! In-memory key-value store.
//!
//! Backs tests and hosts that do not persist anything between popup opens.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use chatshare_core::error::Result;
use chatshare_core::storage::KeyValueStore;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given entries.
    pub fn with_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            entries: RwLock::new(entries.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    pub async fn contains_key(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = InMemoryStore::new();
        store.set("a", json!(1)).await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), Some(json!(1)));

        store.remove("a").await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), None);

        // Removing again is not an error
        store.remove("a").await.unwrap();
    }

    #[tokio::test]
    async fn test_clear() {
        let store = InMemoryStore::with_entries([("x", json!(true)), ("y", json!("v"))]);
        assert_eq!(store.len().await, 2);

        store.clear().await.unwrap();
        assert!(store.is_empty().await);
    }
}
