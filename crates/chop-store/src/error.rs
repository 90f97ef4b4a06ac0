//! Error types for the storage module.

use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Value serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure (poisoned lock, cancelled task, injected
    /// test failure).
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
