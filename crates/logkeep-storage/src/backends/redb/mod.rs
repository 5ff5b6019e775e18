//! Redb storage backend.
//!
//! This module provides a storage backend implementation using Redb,
//! a pure-Rust embedded database with ACID transactions.
//!
//! # Example
//!
//! ```ignore
//! use logkeep_storage::backends::RedbEngine;
//! use logkeep_storage::{Direction, StorageEngine, Transaction};
//!
//! let engine = RedbEngine::open("raft.redb")?;
//!
//! let mut tx = engine.begin_write()?;
//! tx.put(b"logs\x00", b"first")?;
//! tx.commit()?;
//!
//! let tx = engine.begin_read()?;
//! let mut cursor = tx.cursor(Direction::Reverse)?;
//! cursor.seek(b"logs\xff")?;
//! ```
//!
//! # In-Memory Databases
//!
//! For testing, you can create an in-memory database that doesn't persist:
//!
//! ```ignore
//! let engine = RedbEngine::in_memory()?;
//! ```

mod engine;
pub mod tables;
mod transaction;

pub use engine::{RedbConfig, RedbEngine};
pub use transaction::{RedbCursor, RedbTransaction};
