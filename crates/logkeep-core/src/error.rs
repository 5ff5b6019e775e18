//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// An encoding or decoding error occurred.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// A physical key did not have the expected namespace or layout.
    #[error("invalid key: {0}")]
    InvalidKey(String),
}

impl CoreError {
    /// Shorthand for the error returned when input ends early.
    #[must_use]
    pub(crate) fn truncated(what: &str) -> Self {
        Self::Encoding(format!("unexpected end of input reading {what}"))
    }
}
