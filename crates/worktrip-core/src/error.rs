//! Error types for worktrip-core

use thiserror::Error;

/// Result type alias using worktrip-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in worktrip-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Blob store read/write error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Item not found
    #[error("Item not found: {0}")]
    NotFound(String),

    /// Key prefix matches more than one item
    #[error("Key prefix '{prefix}' is ambiguous; matches: {matches}")]
    AmbiguousKey { prefix: String, matches: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
