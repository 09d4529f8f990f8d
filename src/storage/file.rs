//! File-backed storage implementation.
//!
//! Each key maps to one pretty-printed JSON file at
//! `<root>/<namespace>/<name>.json`. Writes go to a sibling temporary file
//! first and are renamed into place, so a reader never sees half a file.

use crate::storage::{StorageError, StorageKey, StorageProvider};
use log::debug;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Storage provider persisting one JSON file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a provider rooted at `root`. The directory is created lazily
    /// on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file a key is stored in.
    pub fn path_for(&self, key: &StorageKey) -> Result<PathBuf, StorageError> {
        check_component(key, key.namespace())?;
        check_component(key, key.name())?;
        Ok(self
            .root
            .join(key.namespace())
            .join(format!("{}.json", key.name())))
    }
}

fn check_component(key: &StorageKey, component: &str) -> Result<(), StorageError> {
    if component.trim().is_empty() {
        return Err(StorageError::invalid_key(key.to_string(), "empty key component"));
    }
    if component == "." || component == ".." || component.contains(['/', '\\']) {
        return Err(StorageError::invalid_key(
            key.to_string(),
            "key component must not contain path separators",
        ));
    }
    Ok(())
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

impl StorageProvider for FileStorage {
    type Error = StorageError;

    async fn put(&self, key: StorageKey, data: Value) -> Result<Value, Self::Error> {
        let path = self.path_for(&key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::io("create directory", display(parent), e))?;
        }

        let content = serde_json::to_string_pretty(&data)
            .map_err(|e| StorageError::serialization(e.to_string(), None))?;

        let staging = path.with_extension("json.tmp");
        fs::write(&staging, content)
            .await
            .map_err(|e| StorageError::io("write", display(&staging), e))?;
        if let Err(e) = fs::rename(&staging, &path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(StorageError::io("rename", display(&path), e));
        }

        debug!("Stored {} at {}", key, path.display());
        Ok(data)
    }

    async fn get(&self, key: StorageKey) -> Result<Option<Value>, Self::Error> {
        let path = self.path_for(&key)?;
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io("read", display(&path), e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StorageError::data_corruption(key.to_string(), e.to_string()))
    }

    async fn delete(&self, key: StorageKey) -> Result<bool, Self::Error> {
        let path = self.path_for(&key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::io("delete", display(&path), e)),
        }
    }

    async fn exists(&self, key: StorageKey) -> Result<bool, Self::Error> {
        let path = self.path_for(&key)?;
        fs::try_exists(&path)
            .await
            .map_err(|e| StorageError::io("stat", display(&path), e))
    }
}
