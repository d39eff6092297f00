//! Error types for newsdesk-store.

use std::path::PathBuf;

/// Result type for newsdesk-store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in newsdesk-store.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Database error from SQLite.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Failed to create database directory.
    #[error("Failed to create database directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The storage backend refused the operation.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A blocking storage task panicked or was aborted.
    #[error("Storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
