//! `logkeep` - A durable Raft log and stable-config store
//!
//! logkeep persists the two things a consensus module must not lose across
//! restarts: its replicated log and a handful of stable facts such as the
//! current term and last vote. Both live in one embedded
//! [redb](https://docs.rs/redb) database.
//!
//! # Features
//!
//! - **Ordered log storage**: records addressed by index, with the lowest and
//!   highest index found without scanning
//! - **Atomic batches**: [`LogStore::store_logs`] writes all records or none
//! - **Range deletion**: [`LogStore::delete_range`] for compaction and truncation
//! - **Stable entries**: [`StableStore`] byte and `u64` accessors in a separate namespace
//!
//! # Quick Start
//!
//! ```
//! use logkeep::{LogRecord, LogStore, LogType, RaftStore, StableStore};
//!
//! let dir = tempfile::tempdir()?;
//! let store = RaftStore::open(dir.path())?;
//!
//! store.store_logs(&[
//!     LogRecord::new(5, 1, LogType::Command).with_data(b"a".to_vec()),
//!     LogRecord::new(7, 1, LogType::Command).with_data(b"b".to_vec()),
//!     LogRecord::new(10, 2, LogType::Noop),
//! ])?;
//!
//! assert_eq!(store.first_index()?, 5);
//! assert_eq!(store.last_index()?, 10);
//!
//! store.delete_range(6, 9)?;
//! assert!(store.get_log(7).unwrap_err().is_not_found());
//!
//! store.set_u64(b"CurrentTerm", 2)?;
//! assert_eq!(store.get_u64(b"CurrentTerm")?, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! - [`config`] - Store configuration ([`Config`])
//! - [`error`] - Error types ([`enum@Error`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
mod log_store;
mod stable_store;
mod store;

pub use config::{Config, DB_FILE_NAME};
pub use error::{Error, Result};
pub use log_store::LogStore;
pub use stable_store::StableStore;
pub use store::RaftStore;

pub use logkeep_core::{LogRecord, LogType};
pub use logkeep_storage::backends::RedbConfig;
