//! Redb transaction implementation.
//!
//! This module provides the `RedbTransaction` type which implements the
//! `Transaction` trait for both read-only and read-write transactions.
//!
//! # Memory-Efficient Cursors
//!
//! The cursor implementation uses batched streaming to avoid loading the
//! whole table into memory. It loads entries in bounded batches (default 1000
//! entries) in its iteration direction, fetching the next batch on demand as
//! the cursor advances.

use std::ops::Bound;

use redb::{AccessGuard, ReadTransaction, ReadableTable, WriteTransaction};

use crate::engine::{Cursor, CursorResult, Direction, KeyValue, StorageError, Transaction};

use super::tables::{DATA_TABLE, DEFAULT_BATCH_SIZE};

/// A transaction for the Redb storage engine.
///
/// Every operation opens the data table for its own duration only, so a
/// cursor and a later `put` or `delete` on the same write transaction never
/// hold the table at the same time.
#[allow(clippy::large_enum_variant)]
pub enum RedbTransaction {
    /// A read-only transaction.
    Read(ReadTransaction),
    /// A read-write transaction.
    Write(WriteTransaction),
}

impl RedbTransaction {
    /// Create a new read-only transaction.
    pub const fn new_read(tx: ReadTransaction) -> Self {
        Self::Read(tx)
    }

    /// Create a new read-write transaction.
    pub const fn new_write(tx: WriteTransaction) -> Self {
        Self::Write(tx)
    }

    /// Fetch up to `limit` entries starting at `from`, in `direction` order.
    ///
    /// For a forward fetch `from` is the lower bound; for a reverse fetch it
    /// is the upper bound.
    fn fetch_batch(
        &self,
        direction: Direction,
        from: Bound<&[u8]>,
        limit: usize,
    ) -> Result<Vec<KeyValue>, StorageError> {
        match self {
            Self::Read(tx) => match tx.open_table(DATA_TABLE) {
                Ok(t) => collect_batch(&t, direction, from, limit),
                // No data table means no data, which is not an error
                Err(redb::TableError::TableDoesNotExist(_)) => Ok(Vec::new()),
                Err(e) => Err(internal(e)),
            },
            Self::Write(tx) => {
                let t = tx.open_table(DATA_TABLE).map_err(internal)?;
                collect_batch(&t, direction, from, limit)
            }
        }
    }
}

impl Transaction for RedbTransaction {
    type Cursor<'a>
        = RedbCursor<'a>
    where
        Self: 'a;

    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        match self {
            Self::Read(tx) => match tx.open_table(DATA_TABLE) {
                Ok(t) => read_value(&t, key),
                Err(redb::TableError::TableDoesNotExist(_)) => Ok(None),
                Err(e) => Err(internal(e)),
            },
            Self::Write(tx) => {
                let t = tx.open_table(DATA_TABLE).map_err(internal)?;
                read_value(&t, key)
            }
        }
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), StorageError> {
        match self {
            Self::Read(_) => Err(StorageError::ReadOnly),
            Self::Write(tx) => {
                let mut t = tx.open_table(DATA_TABLE).map_err(internal)?;
                t.insert(key, value).map_err(internal)?;
                Ok(())
            }
        }
    }

    fn delete(&mut self, key: &[u8]) -> Result<bool, StorageError> {
        match self {
            Self::Read(_) => Err(StorageError::ReadOnly),
            Self::Write(tx) => {
                let mut t = tx.open_table(DATA_TABLE).map_err(internal)?;
                let removed = t.remove(key).map_err(internal)?;
                Ok(removed.is_some())
            }
        }
    }

    fn put_batch(&mut self, entries: &[KeyValue]) -> Result<(), StorageError> {
        match self {
            Self::Read(_) => Err(StorageError::ReadOnly),
            Self::Write(tx) => {
                let mut t = tx.open_table(DATA_TABLE).map_err(internal)?;
                for (key, value) in entries {
                    t.insert(key.as_slice(), value.as_slice()).map_err(internal)?;
                }
                Ok(())
            }
        }
    }

    fn delete_batch(&mut self, keys: &[Vec<u8>]) -> Result<usize, StorageError> {
        match self {
            Self::Read(_) => Err(StorageError::ReadOnly),
            Self::Write(tx) => {
                let mut t = tx.open_table(DATA_TABLE).map_err(internal)?;
                let mut removed = 0;
                for key in keys {
                    if t.remove(key.as_slice()).map_err(internal)?.is_some() {
                        removed += 1;
                    }
                }
                Ok(removed)
            }
        }
    }

    fn cursor(&self, direction: Direction) -> Result<Self::Cursor<'_>, StorageError> {
        Ok(RedbCursor::new(self, direction, DEFAULT_BATCH_SIZE))
    }

    fn commit(self) -> Result<(), StorageError> {
        match self {
            // Read transactions don't need explicit commit
            Self::Read(_) => Ok(()),
            Self::Write(tx) => tx.commit().map_err(|e| StorageError::Commit(e.to_string())),
        }
    }

    fn rollback(self) -> Result<(), StorageError> {
        match self {
            Self::Read(_) => Ok(()),
            Self::Write(tx) => tx.abort().map_err(|e| StorageError::Transaction(e.to_string())),
        }
    }

    fn is_read_only(&self) -> bool {
        matches!(self, Self::Read(_))
    }
}

fn internal(e: impl std::fmt::Display) -> StorageError {
    StorageError::Internal(e.to_string())
}

/// Point lookup, copying the value out of redb's guard.
fn read_value<T>(table: &T, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError>
where
    T: ReadableTable<&'static [u8], &'static [u8]>,
{
    let value = table.get(key).map_err(internal)?;
    Ok(value.map(|v| v.value().to_vec()))
}

/// Read one batch from either kind of table handle.
fn collect_batch<T>(
    table: &T,
    direction: Direction,
    from: Bound<&[u8]>,
    limit: usize,
) -> Result<Vec<KeyValue>, StorageError>
where
    T: ReadableTable<&'static [u8], &'static [u8]>,
{
    match direction {
        Direction::Forward => {
            let range = table.range::<&[u8]>((from, Bound::Unbounded)).map_err(internal)?;
            take_entries(range, limit)
        }
        Direction::Reverse => {
            let range = table.range::<&[u8]>((Bound::Unbounded, from)).map_err(internal)?;
            take_entries(range.rev(), limit)
        }
    }
}

fn take_entries<'g, I>(iter: I, limit: usize) -> Result<Vec<KeyValue>, StorageError>
where
    I: Iterator<
        Item = Result<
            (AccessGuard<'g, &'static [u8]>, AccessGuard<'g, &'static [u8]>),
            redb::StorageError,
        >,
    >,
{
    iter.take(limit)
        .map(|item| {
            let (k, v) = item.map_err(internal)?;
            Ok((k.value().to_vec(), v.value().to_vec()))
        })
        .collect()
}

/// A memory-efficient cursor for iterating over key-value pairs in Redb.
///
/// At any time the cursor holds at most `batch_size` entries in memory.
/// Entries in `batch` are stored in iteration order, so a reverse cursor's
/// batch is descending.
pub struct RedbCursor<'a> {
    /// Reference to the transaction for fetching additional batches.
    tx: &'a RedbTransaction,
    /// Iteration order.
    direction: Direction,
    /// Current batch of entries.
    batch: Vec<KeyValue>,
    /// Position within the current batch.
    position: Option<usize>,
    /// Whether redb may hold entries past the end of the current batch.
    has_more: bool,
    /// Set once iteration ran off the end of the key space.
    exhausted: bool,
    /// Maximum entries per batch.
    batch_size: usize,
}

impl<'a> RedbCursor<'a> {
    /// Create a new, unpositioned streaming cursor.
    pub fn new(tx: &'a RedbTransaction, direction: Direction, batch_size: usize) -> Self {
        Self {
            tx,
            direction,
            batch: Vec::new(),
            position: None,
            has_more: true,
            exhausted: false,
            batch_size: batch_size.max(1),
        }
    }

    /// Replace the batch with entries starting at `from` and point at its head.
    fn load(&mut self, from: Bound<&[u8]>) -> CursorResult {
        let batch = self.tx.fetch_batch(self.direction, from, self.batch_size)?;
        self.has_more = batch.len() >= self.batch_size;
        self.batch = batch;

        if self.batch.is_empty() {
            self.position = None;
            self.exhausted = true;
            return Ok(None);
        }

        self.position = Some(0);
        self.exhausted = false;
        Ok(self.batch.first().cloned())
    }

    /// Continue after the last entry of the current batch.
    fn load_next_batch(&mut self) -> CursorResult {
        let last_key = match self.batch.last() {
            Some((k, _)) if self.has_more => k.clone(),
            _ => {
                self.position = None;
                self.exhausted = true;
                return Ok(None);
            }
        };

        self.load(Bound::Excluded(last_key.as_slice()))
    }
}

impl Cursor for RedbCursor<'_> {
    fn seek(&mut self, key: &[u8]) -> CursorResult {
        self.load(Bound::Included(key))
    }

    fn next(&mut self) -> CursorResult {
        if self.exhausted {
            return Ok(None);
        }

        match self.position {
            None => self.load(Bound::Unbounded),
            Some(pos) if pos + 1 < self.batch.len() => {
                self.position = Some(pos + 1);
                Ok(self.batch.get(pos + 1).cloned())
            }
            Some(_) => self.load_next_batch(),
        }
    }

    fn current(&self) -> Option<(&[u8], &[u8])> {
        self.position
            .and_then(|pos| self.batch.get(pos))
            .map(|(k, v)| (k.as_slice(), v.as_slice()))
    }
}
