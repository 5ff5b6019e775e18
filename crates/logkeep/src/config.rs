//! Store configuration.

use std::path::{Path, PathBuf};

use logkeep_storage::backends::RedbConfig;

/// Name of the database file created inside the store directory.
pub const DB_FILE_NAME: &str = "raft.redb";

/// Configuration options for opening a [`RaftStore`](crate::RaftStore).
///
/// # Example
///
/// ```
/// use logkeep::Config;
///
/// let config = Config::new("/var/lib/node-1").cache_size(64 * 1024 * 1024);
/// assert!(config.db_path().ends_with("raft.redb"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the database file. Created on open if missing.
    pub path: PathBuf,
    /// Options passed to the redb engine.
    pub engine: RedbConfig,
}

impl Config {
    /// Create a new configuration for the given directory.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), engine: RedbConfig::default() }
    }

    /// Set the engine page cache size in bytes.
    #[must_use]
    pub const fn cache_size(mut self, bytes: usize) -> Self {
        self.engine = self.engine.cache_size(bytes);
        self
    }

    /// Replace the engine options.
    #[must_use]
    pub const fn engine(mut self, engine: RedbConfig) -> Self {
        self.engine = engine;
        self
    }

    /// The store directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full path of the database file.
    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.path.join(DB_FILE_NAME)
    }
}
