//! In-memory storage implementation.
//!
//! A thread-safe [`StorageProvider`] backed by nested HashMaps behind an
//! async RwLock. Nothing survives the process; use it for tests and for
//! sessions that do not need persistence.
//!
//! # Example Usage
//!
//! ```rust
//! use asset_attributes::storage::{InMemoryStorage, StorageKey, StorageProvider};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryStorage::new();
//! let key = StorageKey::new("generator", "schema");
//!
//! storage.put(key.clone(), json!([{"name": "payload", "type": "Number"}])).await?;
//! assert!(storage.exists(key).await?);
//! # Ok(())
//! # }
//! ```

use crate::storage::{StorageError, StorageKey, StorageProvider};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe in-memory storage implementation.
///
/// Structure: `namespace` → `name` → `data`.
#[derive(Clone)]
pub struct InMemoryStorage {
    data: Arc<RwLock<HashMap<String, HashMap<String, Value>>>>,
}

impl InMemoryStorage {
    /// Create a new empty in-memory storage instance.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get storage statistics for debugging.
    pub async fn stats(&self) -> InMemoryStorageStats {
        let data_guard = self.data.read().await;
        let namespace_count = data_guard.values().filter(|names| !names.is_empty()).count();
        let total_entries = data_guard.values().map(HashMap::len).sum();

        InMemoryStorageStats {
            namespace_count,
            total_entries,
        }
    }

    /// Clear all data.
    pub async fn clear(&self) {
        let mut data_guard = self.data.write().await;
        data_guard.clear();
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageProvider for InMemoryStorage {
    type Error = StorageError;

    async fn put(&self, key: StorageKey, data: Value) -> Result<Value, Self::Error> {
        let mut data_guard = self.data.write().await;

        data_guard
            .entry(key.namespace().to_string())
            .or_default()
            .insert(key.name().to_string(), data.clone());

        Ok(data)
    }

    async fn get(&self, key: StorageKey) -> Result<Option<Value>, Self::Error> {
        let data_guard = self.data.read().await;

        let result = data_guard
            .get(key.namespace())
            .and_then(|names| names.get(key.name()))
            .cloned();

        Ok(result)
    }

    async fn delete(&self, key: StorageKey) -> Result<bool, Self::Error> {
        let mut data_guard = self.data.write().await;

        let existed = data_guard
            .get_mut(key.namespace())
            .is_some_and(|names| names.remove(key.name()).is_some());

        Ok(existed)
    }

    async fn exists(&self, key: StorageKey) -> Result<bool, Self::Error> {
        let data_guard = self.data.read().await;

        let exists = data_guard
            .get(key.namespace())
            .is_some_and(|names| names.contains_key(key.name()));

        Ok(exists)
    }
}

/// Statistics about in-memory storage usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryStorageStats {
    /// Number of namespaces holding at least one entry
    pub namespace_count: usize,
    /// Total number of stored entries
    pub total_entries: usize,
}
