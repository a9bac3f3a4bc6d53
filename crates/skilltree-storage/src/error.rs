//! Storage error types for skilltree-storage.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing store failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No tree with the given name is stored.
    #[error("skill tree not found: '{0}'")]
    TreeNotFound(String),

    /// The tree name cannot be used as a storage key.
    #[error("invalid tree name: '{0}'")]
    InvalidTreeName(String),
}
