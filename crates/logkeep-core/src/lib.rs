//! `logkeep` Core
//!
//! This crate provides the data model and byte layouts shared by the logkeep
//! storage layer.
//!
//! # Overview
//!
//! - **Records**: [`LogRecord`] and [`LogType`], one entry of a replicated consensus log
//! - **Keys**: [`encoding::keys`] partitions one ordered key space into log and stable namespaces
//! - **Values**: [`Encoder`](encoding::Encoder) and [`Decoder`](encoding::Decoder) for the record format
//!
//! # Example
//!
//! ```
//! use logkeep_core::encoding::keys::{decode_log_key, encode_log_key};
//! use logkeep_core::{LogRecord, LogType};
//!
//! let record = LogRecord::new(10, 2, LogType::Command).with_data(b"x".to_vec());
//!
//! let key = encode_log_key(record.index);
//! assert_eq!(decode_log_key(&key).unwrap(), 10);
//!
//! // Keys sort numerically, not textually.
//! assert!(encode_log_key(9) < encode_log_key(10));
//! ```
//!
//! # Modules
//!
//! - [`types`] - Core data types ([`LogRecord`], [`LogType`])
//! - [`encoding`] - Serialization and key encoding utilities
//! - [`error`] - Error types ([`CoreError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod encoding;
pub mod error;
pub mod types;

pub use error::CoreError;
pub use types::{LogRecord, LogType};
