//! Error types for logkeep.
//!
//! This module provides the [`enum@Error`] type returned by every store
//! operation.

use thiserror::Error;

/// Errors that can occur when using a store.
#[derive(Debug, Error)]
pub enum Error {
    /// No log record exists at the requested index.
    #[error("log not found: {0}")]
    LogNotFound(u64),

    /// No stable entry exists under the requested key.
    #[error("not found")]
    KeyNotFound,

    /// Stored bytes or a physical key could not be decoded.
    #[error("encoding error: {0}")]
    Encoding(#[from] logkeep_core::CoreError),

    /// The underlying storage engine failed.
    #[error("storage error: {0}")]
    Storage(#[from] logkeep_storage::StorageError),

    /// The store could not be opened.
    #[error("failed to open store: {0}")]
    Open(String),
}

impl Error {
    /// Returns `true` if this error reports a missing log record or stable entry.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::LogNotFound(_) | Self::KeyNotFound)
    }
}

/// A specialized Result type for store operations.
pub type Result<T> = std::result::Result<T, Error>;
