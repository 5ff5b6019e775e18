//! The store handle.

use std::fs;
use std::path::Path;

use logkeep_storage::backends::RedbEngine;
use logkeep_storage::StorageEngine;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};

/// A durable log and stable-config store.
///
/// One `RaftStore` serves both the [`LogStore`](crate::LogStore) and the
/// [`StableStore`](crate::StableStore) roles over a single database. Every
/// operation runs in its own engine transaction, so a handle can be shared
/// across threads behind an `Arc` without further locking.
///
/// # Example
///
/// ```
/// use logkeep::{LogRecord, LogStore, LogType, RaftStore, StableStore};
///
/// let store = RaftStore::in_memory()?;
///
/// store.store_log(&LogRecord::new(1, 1, LogType::Command).with_data(b"x".to_vec()))?;
/// assert_eq!(store.last_index()?, 1);
///
/// store.set_u64(b"CurrentTerm", 1)?;
/// assert_eq!(store.get_u64(b"CurrentTerm")?, 1);
/// # Ok::<(), logkeep::Error>(())
/// ```
pub struct RaftStore<E: StorageEngine = RedbEngine> {
    engine: E,
    config: Option<Config>,
}

impl RaftStore<RedbEngine> {
    /// Open or create a store in `dir` with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the directory or database cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(Config::new(dir.as_ref()))
    }

    /// Open or create a store with the given configuration.
    ///
    /// The directory is created if needed and the database lives in
    /// [`DB_FILE_NAME`](crate::DB_FILE_NAME) inside it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the directory or database cannot be created.
    pub fn open_with_config(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.path).map_err(|e| {
            Error::Open(format!("failed to create {}: {e}", config.path.display()))
        })?;

        let db_path = config.db_path();
        let engine = RedbEngine::open_with_config(&db_path, config.engine)
            .map_err(|e| Error::Open(e.to_string()))?;

        info!(path = %db_path.display(), "opened raft store");
        Ok(Self { engine, config: Some(config) })
    }

    /// Create a store backed by an in-memory database.
    ///
    /// All data is lost when the store is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the in-memory database cannot be created.
    pub fn in_memory() -> Result<Self> {
        let engine = RedbEngine::in_memory().map_err(|e| Error::Open(e.to_string()))?;
        debug!("opened in-memory raft store");
        Ok(Self { engine, config: None })
    }
}

impl<E: StorageEngine> RaftStore<E> {
    /// Wrap an already opened engine.
    ///
    /// `path` is recorded for [`path`](Self::path) only; nothing is opened.
    pub fn with_engine(engine: E, path: impl AsRef<Path>) -> Self {
        Self { engine, config: Some(Config::new(path.as_ref())) }
    }

    /// The store directory, or `None` for an in-memory store.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.config.as_ref().map(Config::path)
    }

    /// The configuration the store was opened with, or `None` for an in-memory store.
    #[must_use]
    pub const fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    /// The underlying storage engine.
    #[must_use]
    pub const fn engine(&self) -> &E {
        &self.engine
    }

    /// Flush buffered engine state to durable storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails to flush.
    pub fn flush(&self) -> Result<()> {
        self.engine.flush()?;
        Ok(())
    }

    /// Flush and close the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush fails. The store is closed either way.
    pub fn close(self) -> Result<()> {
        let result = self.flush();
        if let Some(path) = self.path() {
            debug!(path = %path.display(), "closing raft store");
        }
        drop(self);
        result
    }
}

impl<E: StorageEngine> std::fmt::Debug for RaftStore<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RaftStore").field("config", &self.config).finish_non_exhaustive()
    }
}
