//! File-backed key-value store.
//!
//! The whole storage namespace is one JSON object on disk:
//!
//! ```text
//! {
//!   "age_verified": true,
//!   "local_db_ids": ["c-1"],
//!   "c-1": { "user_msgs": [...], "bot_msgs": [...], ... }
//! }
//! ```
//!
//! Every write rewrites the file through a temporary file and an atomic
//! rename, so a crashed write leaves the previous namespace intact.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::Mutex;

use chatshare_core::error::{PopupError, Result};
use chatshare_core::storage::KeyValueStore;

type Namespace = Map<String, Value>;

pub struct JsonFileStore {
    path: PathBuf,
    /// Loaded lazily on first access.
    cache: Mutex<Option<Namespace>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the namespace from disk. A missing or blank file is empty.
    async fn read_namespace(&self) -> Result<Namespace> {
        if !fs::try_exists(&self.path).await? {
            return Ok(Namespace::new());
        }

        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            PopupError::storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        if content.trim().is_empty() {
            return Ok(Namespace::new());
        }

        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            other => Err(PopupError::storage(format!(
                "Storage file {} does not hold an object (found {})",
                self.path.display(),
                type_name(&other)
            ))),
        }
    }

    async fn write_namespace(&self, namespace: &Namespace) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PopupError::storage(format!("Failed to create directory: {}", e)))?;
        }

        let serialized = serde_json::to_string_pretty(namespace)?;
        let tmp_path = self.tmp_path();

        fs::write(&tmp_path, serialized)
            .await
            .map_err(|e| PopupError::storage(format!("Failed to write temp file: {}", e)))?;

        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(PopupError::storage(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            )));
        }

        tracing::trace!(path = %self.path.display(), keys = namespace.len(), "storage persisted");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "storage.json".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4()))
    }

    /// Applies `mutate` to the cached namespace and persists the result.
    ///
    /// The cache only changes once the file write succeeded.
    async fn update<F>(&self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut Namespace),
    {
        let mut cache = self.cache.lock().await;
        let mut namespace = match cache.as_ref() {
            Some(cached) => cached.clone(),
            None => self.read_namespace().await?,
        };

        mutate(&mut namespace);
        self.write_namespace(&namespace).await?;
        *cache = Some(namespace);
        Ok(())
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.read_namespace().await?);
        }
        Ok(cache.as_ref().and_then(|namespace| namespace.get(key).cloned()))
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.update(|namespace| {
            namespace.insert(key.to_string(), value);
        })
        .await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.update(|namespace| {
            namespace.remove(key);
        })
        .await
    }

    async fn clear(&self) -> Result<()> {
        self.update(Namespace::clear).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("storage.json"));

        assert_eq!(store.get("age_verified").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_writes_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("storage.json");

        let store = JsonFileStore::new(&path);
        store.set("local_db_ids", json!(["a", "b"])).await.unwrap();
        store.set("age_verified", json!(true)).await.unwrap();
        store.remove("age_verified").await.unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(
            reopened.get("local_db_ids").await.unwrap(),
            Some(json!(["a", "b"]))
        );
        assert_eq!(reopened.get("age_verified").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_leaves_empty_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");

        let store = JsonFileStore::new(&path);
        store.set("user_id", json!("u-1")).await.unwrap();
        store.clear().await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&content).unwrap(), json!({}));
        assert_eq!(store.get("user_id").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_non_object_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let store = JsonFileStore::new(&path);
        let err = store.get("anything").await.unwrap_err();
        assert!(err.is_storage());
    }
}
