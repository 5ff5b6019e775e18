//! Core data types for logkeep.
//!
//! This module defines the log record persisted for the consensus layer.

mod record;

pub use record::{LogRecord, LogType};
