//! Storage engine traits and abstractions.
//!
//! This module defines the core traits that storage backends must implement:
//!
//! - [`StorageEngine`] - Main entry point for creating transactions
//! - [`Transaction`] - ACID transaction with get/put/delete/cursor operations
//! - [`Cursor`] - Ordered iteration in either [`Direction`]

mod error;
mod traits;

pub use error::{StorageError, StorageResult};
pub use traits::{Cursor, CursorResult, Direction, KeyValue, StorageEngine, Transaction};
