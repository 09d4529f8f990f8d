//! Storage abstraction layer for schemas, catalogs and form state.
//!
//! The engine itself is pure: validation, generation and projection never
//! touch storage. Persistence is a separate concern handled here, in two
//! layers:
//!
//! - [`StorageProvider`] is a plain key/value store of JSON values with
//!   PUT/GET/DELETE/EXISTS operations and no knowledge of what it stores.
//! - [`Workspace`] sits on top of a provider and loads and saves the typed
//!   artifacts of an editing session (active schema, property catalog,
//!   attribute lists, form values).
//!
//! Two providers are included: [`InMemoryStorage`] for tests and ephemeral
//! sessions, and [`FileStorage`] which keeps one JSON file per key.
//!
//! # Example Usage
//!
//! ```rust
//! use asset_attributes::storage::{InMemoryStorage, StorageKey, StorageProvider};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryStorage::new();
//!
//! let key = StorageKey::new("generator", "values");
//! storage.put(key.clone(), json!({"payload": "800"})).await?;
//!
//! let retrieved = storage.get(key.clone()).await?;
//! assert_eq!(retrieved, Some(json!({"payload": "800"})));
//!
//! let was_deleted = storage.delete(key).await?;
//! assert!(was_deleted);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod file;
pub mod in_memory;
pub mod workspace;

pub use errors::StorageError;
pub use file::FileStorage;
pub use in_memory::{InMemoryStorage, InMemoryStorageStats};
pub use workspace::Workspace;

use serde_json::Value;
use std::fmt;
use std::future::Future;

/// A two-level key identifying a stored value: `namespace` → `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageKey {
    namespace: String,
    name: String,
}

impl StorageKey {
    /// Create a new storage key.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Get the namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Get the name within the namespace.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Core trait for storage providers that handle pure data persistence.
///
/// - PUT replaces whatever is stored at the key and returns the stored data.
/// - GET returns `None` for a key that was never written.
/// - DELETE returns whether the key existed.
pub trait StorageProvider: Send + Sync {
    /// The error type returned by storage operations.
    type Error: std::error::Error + Into<StorageError> + Send + Sync + 'static;

    /// Store data at the specified key and return the stored data.
    fn put(
        &self,
        key: StorageKey,
        data: Value,
    ) -> impl Future<Output = Result<Value, Self::Error>> + Send;

    /// Retrieve data by key.
    fn get(&self, key: StorageKey)
    -> impl Future<Output = Result<Option<Value>, Self::Error>> + Send;

    /// Delete data by key, returning `true` if it existed.
    fn delete(&self, key: StorageKey) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Check whether data exists at the key.
    fn exists(&self, key: StorageKey) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}
