//! Stable key/value storage.
//!
//! Stable entries live under the `conf` namespace and never collide with log
//! records, even when a caller key matches the bytes of a log index.

use logkeep_core::encoding::keys::{decode_u64, encode_conf_key, encode_u64};
use logkeep_storage::{StorageEngine, Transaction};

use crate::error::{Error, Result};
use crate::store::RaftStore;

/// Durable storage for small facts such as the current term or last vote.
pub trait StableStore {
    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set(&self, key: &[u8], value: &[u8]) -> Result<()>;

    /// Fetch the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if nothing is stored under `key`.
    fn get(&self, key: &[u8]) -> Result<Vec<u8>>;

    /// Store a `u64` under `key` as 8 big-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set_u64(&self, key: &[u8], value: u64) -> Result<()> {
        self.set(key, &encode_u64(value))
    }

    /// Fetch a `u64` stored with [`set_u64`](Self::set_u64).
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if nothing is stored under `key`, or
    /// [`Error::Encoding`] if the stored value is not 8 bytes.
    fn get_u64(&self, key: &[u8]) -> Result<u64> {
        let bytes = self.get(key)?;
        Ok(decode_u64(&bytes)?)
    }
}

impl<E: StorageEngine> StableStore for RaftStore<E> {
    fn set(&self, key: &[u8], value: &[u8]) -> Result<()> {
        let mut tx = self.engine().begin_write()?;
        tx.put(&encode_conf_key(key), value)?;
        tx.commit()?;
        Ok(())
    }

    fn get(&self, key: &[u8]) -> Result<Vec<u8>> {
        let tx = self.engine().begin_read()?;
        tx.get(&encode_conf_key(key))?.ok_or(Error::KeyNotFound)
    }
}
