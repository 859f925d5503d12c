//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! Validation errors propagate to the caller as hard failures; storage-layer
//! errors are absorbed at the call site and converted into degraded results
//! plus a warning (see the tokenizer and deanonymizer).

use thiserror::Error;

/// Main privault error type
#[derive(Debug, Error)]
pub enum PrivaultError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid caller input (empty text, malformed token, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Mapping store errors
    #[error("Mapping store error: {0}")]
    Store(#[from] StoreError),

    /// Pattern library or regex evaluation errors
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Mapping-store-specific errors
///
/// These don't expose the underlying storage technology; an in-memory store,
/// a file store and a database-backed store all surface the same kinds.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be opened or reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A lookup failed for reasons other than "not found"
    #[error("Failed to read mapping: {0}")]
    ReadFailed(String),

    /// An upsert failed
    #[error("Failed to write mapping: {0}")]
    WriteFailed(String),

    /// Durable persistence of the mapping set failed
    #[error("Failed to persist mappings: {0}")]
    PersistFailed(String),
}

impl From<std::io::Error> for PrivaultError {
    fn from(err: std::io::Error) -> Self {
        PrivaultError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PrivaultError {
    fn from(err: serde_json::Error) -> Self {
        PrivaultError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for PrivaultError {
    fn from(err: toml::de::Error) -> Self {
        PrivaultError::Configuration(format!("TOML parse error: {err}"))
    }
}
