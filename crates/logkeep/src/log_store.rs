//! Log record storage.
//!
//! Log records live under the `logs` namespace keyed by their big-endian
//! index, so cursor order is index order. The lowest and highest index are
//! found by seeking a cursor rather than scanning.

use logkeep_core::encoding::keys::{decode_log_key, encode_log_key, log_keys_end, LOGS_PREFIX};
use logkeep_core::encoding::{Decoder, Encoder};
use logkeep_core::LogRecord;
use logkeep_storage::{Cursor, Direction, KeyValue, StorageEngine, Transaction};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::store::RaftStore;

/// Maximum number of keys gathered per cursor pass in [`LogStore::delete_range`].
const DELETE_BATCH_SIZE: usize = 1024;

/// Durable, index-addressable storage for replicated log records.
pub trait LogStore {
    /// The lowest stored index, or `0` if the log is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage engine fails or the first log key is malformed.
    fn first_index(&self) -> Result<u64>;

    /// The highest stored index, or `0` if the log is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage engine fails or the last log key is malformed.
    fn last_index(&self) -> Result<u64>;

    /// Fetch the record stored at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LogNotFound`] if no record exists at `index`.
    fn get_log(&self, index: u64) -> Result<LogRecord>;

    /// Store a single record, replacing any record at the same index.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the write fails. Nothing is written on error.
    fn store_log(&self, record: &LogRecord) -> Result<()>;

    /// Store a batch of records atomically.
    ///
    /// Either every record is written or none is. An empty batch succeeds
    /// without touching storage.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the write fails. Nothing is written on error.
    fn store_logs(&self, records: &[LogRecord]) -> Result<()>;

    /// Delete every record with an index in `min..=max`.
    ///
    /// A range with `min > max`, or with no stored records, succeeds and
    /// changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage engine fails. Nothing is deleted on error.
    fn delete_range(&self, min: u64, max: u64) -> Result<()>;
}

impl<E: StorageEngine> LogStore for RaftStore<E> {
    fn first_index(&self) -> Result<u64> {
        let tx = self.engine().begin_read()?;
        let mut cursor = tx.cursor(Direction::Forward)?;
        cursor.seek(LOGS_PREFIX)?;
        positioned_index(&cursor)
    }

    fn last_index(&self) -> Result<u64> {
        let tx = self.engine().begin_read()?;
        let mut cursor = tx.cursor(Direction::Reverse)?;
        cursor.seek(&log_keys_end())?;
        positioned_index(&cursor)
    }

    fn get_log(&self, index: u64) -> Result<LogRecord> {
        let tx = self.engine().begin_read()?;
        let bytes = tx.get(&encode_log_key(index))?.ok_or(Error::LogNotFound(index))?;
        Ok(LogRecord::decode(&bytes)?)
    }

    fn store_log(&self, record: &LogRecord) -> Result<()> {
        self.store_logs(std::slice::from_ref(record))
    }

    fn store_logs(&self, records: &[LogRecord]) -> Result<()> {
        let (Some(first), Some(last)) = (records.first(), records.last()) else {
            return Ok(());
        };

        let entries = records
            .iter()
            .map(|record| -> Result<KeyValue> { Ok((encode_log_key(record.index), record.encode()?)) })
            .collect::<Result<Vec<_>>>()?;

        let mut tx = self.engine().begin_write()?;
        tx.put_batch(&entries)?;
        tx.commit()?;

        debug!(count = records.len(), first = first.index, last = last.index, "stored logs");
        Ok(())
    }

    fn delete_range(&self, min: u64, max: u64) -> Result<()> {
        if min > max {
            return Ok(());
        }

        let mut tx = self.engine().begin_write()?;
        let mut removed = 0usize;
        let mut resume = Some(min);

        while let Some(from) = resume {
            let (keys, next) = gather_range(&tx, from, max)?;
            removed += tx.delete_batch(&keys)?;
            resume = next;
        }
        tx.commit()?;

        debug!(min, max, removed, "deleted log range");
        Ok(())
    }
}

/// Decode the index under a cursor, or `0` when it is not on a log key.
fn positioned_index<C: Cursor>(cursor: &C) -> Result<u64> {
    match cursor.current() {
        Some((key, _)) if key.starts_with(LOGS_PREFIX) => log_index(key),
        _ => Ok(0),
    }
}

fn log_index(key: &[u8]) -> Result<u64> {
    decode_log_key(key).map_err(|e| {
        warn!(key = ?key, error = %e, "malformed log key");
        Error::from(e)
    })
}

/// Collect up to [`DELETE_BATCH_SIZE`] log keys in `from..=max`.
///
/// Returns the keys and the index to resume from, or `None` once the range
/// is exhausted. The cursor is dropped before returning so the caller can
/// delete through the same transaction.
fn gather_range<T: Transaction>(tx: &T, from: u64, max: u64) -> Result<(Vec<Vec<u8>>, Option<u64>)> {
    let mut cursor = tx.cursor(Direction::Forward)?;
    let mut keys = Vec::new();

    cursor.seek(&encode_log_key(from))?;
    while cursor.valid_for_prefix(LOGS_PREFIX) {
        let Some((key, _)) = cursor.current() else {
            break;
        };
        let index = log_index(key)?;
        if index > max {
            return Ok((keys, None));
        }
        keys.push(key.to_vec());
        if keys.len() >= DELETE_BATCH_SIZE {
            return Ok((keys, index.checked_add(1)));
        }
        cursor.next()?;
    }

    Ok((keys, None))
}
