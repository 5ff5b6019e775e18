//! Serialization and key encoding for storage.
//!
//! This module provides traits and implementations for encoding log records
//! to bytes and for generating the ordered physical keys they are stored under.
//!
//! # Encoding Traits
//!
//! - [`Encoder`] - Serialize types to bytes
//! - [`Decoder`] - Deserialize types from bytes
//!
//! # Key Encoding
//!
//! The [`keys`] module maps log indices and stable entry keys into one shared
//! ordered key space. Prefixes partition it and big-endian indices preserve
//! numeric order.
//!
//! # Example
//!
//! ```
//! use logkeep_core::encoding::{Decoder, Encoder};
//! use logkeep_core::types::{LogRecord, LogType};
//!
//! let record = LogRecord::new(1, 1, LogType::Command).with_data(b"hello".to_vec());
//!
//! let bytes = record.encode().unwrap();
//! let decoded = LogRecord::decode(&bytes).unwrap();
//! assert_eq!(decoded, record);
//! ```

pub mod keys;
mod record;
mod traits;


pub use traits::{Decoder, Encoder, FORMAT_VERSION};
