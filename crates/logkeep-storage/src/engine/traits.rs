//! Core storage engine traits.
//!
//! This module defines the fundamental traits for storage backends:
//!
//! - [`StorageEngine`] - The main entry point for storage operations
//! - [`Transaction`] - ACID transaction support with read/write operations
//! - [`Cursor`] - Ordered iteration over key-value pairs
//!
//! An engine exposes a single flat key space ordered by raw byte comparison.
//! Callers that need several logical namespaces partition it with key prefixes.

use std::sync::Arc;

use super::StorageError;

/// A key-value pair returned by cursor operations.
pub type KeyValue = (Vec<u8>, Vec<u8>);

/// Result type for cursor operations that return a key-value pair.
pub type CursorResult = Result<Option<KeyValue>, StorageError>;

/// Iteration order of a [`Cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Ascending key order.
    #[default]
    Forward,
    /// Descending key order.
    Reverse,
}

/// A storage engine that provides transactional key-value operations.
///
/// Implementations must be thread-safe (`Send + Sync`).
///
/// # Example
///
/// ```ignore
/// use logkeep_storage::{StorageEngine, Transaction};
///
/// fn example<E: StorageEngine>(engine: &E) -> Result<(), StorageError> {
///     let mut tx = engine.begin_write()?;
///     tx.put(b"key", b"value")?;
///     tx.commit()?;
///
///     let tx = engine.begin_read()?;
///     let value = tx.get(b"key")?;
///     Ok(())
/// }
/// ```
pub trait StorageEngine: Send + Sync {
    /// The transaction type for this engine.
    type Transaction<'a>: Transaction
    where
        Self: 'a;

    /// Begin a read-only transaction.
    ///
    /// Read transactions observe a consistent snapshot. Multiple read
    /// transactions can run concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Transaction`] if the transaction cannot be started.
    fn begin_read(&self) -> Result<Self::Transaction<'_>, StorageError>;

    /// Begin a read-write transaction.
    ///
    /// Write transactions may be serialized by the backend.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Transaction`] if the transaction cannot be started.
    fn begin_write(&self) -> Result<Self::Transaction<'_>, StorageError>;

    /// Flush any buffered data to durable storage.
    ///
    /// The default implementation does nothing, as most backends handle
    /// durability on commit.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the flush fails.
    fn flush(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

/// A transaction over the engine's key space.
///
/// Write transactions must be explicitly committed; dropping one without
/// committing rolls back its changes.
pub trait Transaction {
    /// The cursor type for iteration.
    type Cursor<'a>: Cursor
    where
        Self: 'a;

    /// Get a value by key.
    ///
    /// The returned bytes are owned and stay valid after the transaction ends.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Internal`] if the backend read fails.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError>;

    /// Insert or replace a key-value pair.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ReadOnly`] on a read transaction, or
    /// [`StorageError::Internal`] if the write fails.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), StorageError>;

    /// Delete a key.
    ///
    /// Returns `Ok(true)` if the key was deleted, `Ok(false)` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ReadOnly`] on a read transaction, or
    /// [`StorageError::Internal`] if the delete fails.
    fn delete(&mut self, key: &[u8]) -> Result<bool, StorageError>;

    /// Insert or replace every pair in `entries`.
    ///
    /// The default implementation calls [`put`](Self::put) per entry.
    /// Backends override it to reuse one table handle.
    ///
    /// # Errors
    ///
    /// Returns the first error hit. Entries already written remain part of
    /// the uncommitted transaction.
    fn put_batch(&mut self, entries: &[KeyValue]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.put(key, value)?;
        }
        Ok(())
    }

    /// Delete every key in `keys`, returning how many existed.
    ///
    /// The default implementation calls [`delete`](Self::delete) per key.
    ///
    /// # Errors
    ///
    /// Returns the first error hit.
    fn delete_batch(&mut self, keys: &[Vec<u8>]) -> Result<usize, StorageError> {
        let mut removed = 0;
        for key in keys {
            if self.delete(key)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Create an unpositioned cursor iterating in the given direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot create the cursor.
    fn cursor(&self, direction: Direction) -> Result<Self::Cursor<'_>, StorageError>;

    /// Commit the transaction, making all changes durable.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Commit`] if the commit fails.
    fn commit(self) -> Result<(), StorageError>;

    /// Roll back the transaction, discarding all changes.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Transaction`] if the rollback fails.
    fn rollback(self) -> Result<(), StorageError>;

    /// Check if this is a read-only transaction.
    fn is_read_only(&self) -> bool;
}

/// A cursor for ordered iteration over key-value pairs.
///
/// # Iteration Pattern
///
/// ```ignore
/// let mut cursor = tx.cursor(Direction::Forward)?;
///
/// cursor.seek(b"prefix")?;
/// while cursor.valid_for_prefix(b"prefix") {
///     let (key, value) = cursor.current().unwrap();
///     // ...
///     cursor.next()?;
/// }
/// ```
pub trait Cursor {
    /// Position the cursor relative to `key`.
    ///
    /// A forward cursor lands on the first key `>= key`; a reverse cursor
    /// lands on the last key `<= key`.
    ///
    /// Returns the entry at the new position, or `None` if there is none.
    fn seek(&mut self, key: &[u8]) -> CursorResult;

    /// Advance one entry in the cursor's direction.
    ///
    /// An unpositioned cursor moves to the first entry in its direction.
    /// Returns `None` once iteration is exhausted.
    fn next(&mut self) -> CursorResult;

    /// Get the current key-value pair without advancing.
    fn current(&self) -> Option<(&[u8], &[u8])>;

    /// Check that the cursor sits on a key starting with `prefix`.
    fn valid_for_prefix(&self, prefix: &[u8]) -> bool {
        self.current().is_some_and(|(key, _)| key.starts_with(prefix))
    }
}

/// Implement `StorageEngine` for `Arc<E>` to allow shared ownership of engines.
impl<E: StorageEngine> StorageEngine for Arc<E> {
    type Transaction<'a>
        = E::Transaction<'a>
    where
        Self: 'a;

    fn begin_read(&self) -> Result<Self::Transaction<'_>, StorageError> {
        (**self).begin_read()
    }

    fn begin_write(&self) -> Result<Self::Transaction<'_>, StorageError> {
        (**self).begin_write()
    }

    fn flush(&self) -> Result<(), StorageError> {
        (**self).flush()
    }
}
