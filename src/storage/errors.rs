//! Storage-specific error types for persistence operations.
//!
//! These errors describe failures of the key/value persistence layer only.
//! They carry no knowledge of schemas or documents; the typed
//! [`Workspace`](super::Workspace) layer decides what a failure means.

use std::fmt;

/// Errors that can occur during storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// A key component is empty or would escape the storage namespace.
    InvalidKey { key: String, reason: String },

    /// Stored bytes could not be read back as JSON.
    DataCorruption { key: String, details: String },

    /// Serialization or deserialization of typed data failed.
    Serialization {
        message: String,
        data_type: Option<String>,
    },

    /// Underlying I/O failure of a file-backed store.
    Io {
        operation: String,
        path: String,
        source: std::io::Error,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::InvalidKey { key, reason } => {
                write!(f, "Invalid storage key '{}': {}", key, reason)
            }
            StorageError::DataCorruption { key, details } => {
                write!(f, "Data corruption in {}: {}", key, details)
            }
            StorageError::Serialization { message, data_type } => {
                if let Some(dtype) = data_type {
                    write!(f, "Serialization error: {} (type: {})", message, dtype)
                } else {
                    write!(f, "Serialization error: {}", message)
                }
            }
            StorageError::Io {
                operation,
                path,
                source,
            } => {
                write!(f, "I/O error during {} of {}: {}", operation, path, source)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl StorageError {
    /// Create a new InvalidKey error.
    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a new DataCorruption error.
    pub fn data_corruption(key: impl Into<String>, details: impl Into<String>) -> Self {
        Self::DataCorruption {
            key: key.into(),
            details: details.into(),
        }
    }

    /// Create a new Serialization error.
    pub fn serialization(message: impl Into<String>, data_type: Option<&str>) -> Self {
        Self::Serialization {
            message: message.into(),
            data_type: data_type.map(String::from),
        }
    }

    /// Create a new Io error.
    pub fn io(operation: impl Into<String>, path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }
}
