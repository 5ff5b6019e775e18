//! Replicated log records.
//!
//! This module provides the [`LogRecord`] type, one entry of the consensus log,
//! and [`LogType`], which tells the consensus layer how to interpret it.
//!
//! # Example
//!
//! ```
//! use logkeep_core::types::{LogRecord, LogType};
//!
//! let record = LogRecord::new(42, 3, LogType::Command)
//!     .with_data(b"set x=1".to_vec());
//!
//! assert_eq!(record.index, 42);
//! assert_eq!(record.term, 3);
//! assert_eq!(record.data, b"set x=1");
//! assert!(record.extensions.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The kind of a log record.
///
/// The byte tag of each variant is part of the on-disk format and must never
/// be reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LogType {
    /// An application command applied to the state machine.
    #[default]
    Command,
    /// A no-op written by a new leader to commit entries from earlier terms.
    Noop,
    /// Legacy single-peer addition.
    AddPeerDeprecated,
    /// Legacy single-peer removal.
    RemovePeerDeprecated,
    /// A barrier that is applied only once all preceding records are applied.
    Barrier,
    /// A cluster membership configuration change.
    Configuration,
}

impl LogType {
    /// The byte stored for this type.
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Command => 0,
            Self::Noop => 1,
            Self::AddPeerDeprecated => 2,
            Self::RemovePeerDeprecated => 3,
            Self::Barrier => 4,
            Self::Configuration => 5,
        }
    }
}

impl TryFrom<u8> for LogType {
    type Error = CoreError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Command),
            1 => Ok(Self::Noop),
            2 => Ok(Self::AddPeerDeprecated),
            3 => Ok(Self::RemovePeerDeprecated),
            4 => Ok(Self::Barrier),
            5 => Ok(Self::Configuration),
            other => Err(CoreError::Encoding(format!("unknown log type tag: {other}"))),
        }
    }
}

/// One entry of the replicated log.
///
/// A store holds at most one record per `index`. Writing a record at an
/// index that is already present replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogRecord {
    /// Position in the log. This is the value encoded into the record's key.
    pub index: u64,
    /// Election term in which the record was created.
    pub term: u64,
    /// How the consensus layer interprets `data`.
    pub log_type: LogType,
    /// Opaque payload.
    pub data: Vec<u8>,
    /// Opaque extension bytes carried alongside the payload.
    pub extensions: Vec<u8>,
}

impl LogRecord {
    /// Create a record with an empty payload.
    #[must_use]
    pub const fn new(index: u64, term: u64, log_type: LogType) -> Self {
        Self { index, term, log_type, data: Vec::new(), extensions: Vec::new() }
    }

    /// Set the payload.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    /// Set the extension bytes.
    #[must_use]
    pub fn with_extensions(mut self, extensions: impl Into<Vec<u8>>) -> Self {
        self.extensions = extensions.into();
        self
    }
}
