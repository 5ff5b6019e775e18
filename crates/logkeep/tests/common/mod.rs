//! Shared helpers for integration tests.

#![allow(dead_code)]

use logkeep::{LogRecord, LogType, RaftStore};
use tracing_subscriber::EnvFilter;

/// Route store logs to the test harness. Set `RUST_LOG=logkeep=debug` to see them.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
}

/// Create an in-memory store for testing.
pub fn create_test_store() -> RaftStore {
    init_tracing();
    RaftStore::in_memory().expect("failed to create in-memory store")
}

/// A command record whose payload names its index.
pub fn record(index: u64) -> LogRecord {
    LogRecord::new(index, index / 10 + 1, LogType::Command)
        .with_data(format!("data-{index}").into_bytes())
}
