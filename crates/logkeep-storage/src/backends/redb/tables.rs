//! Redb table definitions.
//!
//! Every key lives in one physical table. Callers build their own namespaces
//! by prefixing keys, so the backend never needs to know about them.

use redb::TableDefinition;

/// The physical table that stores all key-value pairs.
pub const DATA_TABLE: TableDefinition<'static, &[u8], &[u8]> = TableDefinition::new("logkeep_data");

/// Number of entries a cursor pulls from redb at a time.
pub const DEFAULT_BATCH_SIZE: usize = 1000;
