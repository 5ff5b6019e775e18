//! logkeep Storage
//!
//! This crate provides the ordered key-value storage abstraction that the
//! logkeep Raft stores are built on, plus its redb backend.
//!
//! # Overview
//!
//! A backend exposes one flat key space sorted by raw byte order, with
//! read-only and read-write transactions and bidirectional cursors. Anything
//! richer, such as namespaces or typed keys, is layered on top by callers.
//!
//! # Core Traits
//!
//! - [`StorageEngine`] - The main entry point for storage operations
//! - [`Transaction`] - ACID transaction support with read/write operations
//! - [`Cursor`] - Ordered iteration over key-value pairs
//!
//! # Error Handling
//!
//! All storage operations return [`StorageResult<T>`], which is an alias for
//! `Result<T, StorageError>`.
//!
//! # Modules
//!
//! - [`engine`] - Storage engine traits and abstractions
//! - [`backends`] - Concrete storage backend implementations

#![deny(clippy::unwrap_used)]

pub mod backends;
pub mod engine;

pub use engine::{
    Cursor, CursorResult, Direction, KeyValue, StorageEngine, StorageError, StorageResult,
    Transaction,
};
