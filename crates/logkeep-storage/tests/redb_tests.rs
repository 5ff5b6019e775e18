//! Tests for the Redb storage backend.
//!
//! This module runs the standard storage engine compliance tests against
//! the Redb backend, plus Redb-specific tests.


use logkeep_storage::backends::{RedbConfig, RedbEngine};
use logkeep_storage::{Cursor, Direction, StorageEngine, StorageResult, Transaction};

use engine_tests::{run_test_suite, TestHarness};

/// Test harness for the Redb in-memory backend.
struct RedbHarness;

impl TestHarness for RedbHarness {
    type Engine = RedbEngine;

    fn create_engine() -> StorageResult<Self::Engine> {
        RedbEngine::in_memory()
    }
}

/// Run the full compliance test suite for Redb.
#[test]
fn test_redb_compliance() {
    run_test_suite::<RedbHarness>();
}

/// Test Redb-specific: rollback discards changes.
#[test]
fn test_rollback_discards_changes() {
    let engine = RedbEngine::in_memory().expect("failed to create engine");

    {
        let mut tx = engine.begin_write().expect("failed to begin write");
        tx.put(b"key", b"initial").expect("failed to put");
        tx.commit().expect("failed to commit");
    }

    {
        let mut tx = engine.begin_write().expect("failed to begin write");
        tx.put(b"key", b"modified").expect("failed to put");
        tx.put(b"new_key", b"new_value").expect("failed to put");
        tx.rollback().expect("failed to rollback");
    }

    {
        let tx = engine.begin_read().expect("failed to begin read");
        assert_eq!(tx.get(b"key").expect("failed to get"), Some(b"initial".to_vec()));
        assert_eq!(tx.get(b"new_key").expect("failed to get"), None);
    }
}

/// Test Redb-specific: dropping a write transaction without commit discards it.
#[test]
fn test_drop_without_commit_discards_changes() {
    let engine = RedbEngine::in_memory().expect("failed to create engine");

    {
        let mut tx = engine.begin_write().expect("failed to begin write");
        tx.put(b"key", b"never committed").expect("failed to put");
    }

    let tx = engine.begin_read().expect("failed to begin read");
    assert_eq!(tx.get(b"key").expect("failed to get"), None);
}

/// Test Redb-specific: a write transaction sees its own uncommitted writes.
#[test]
fn test_write_transaction_reads_own_writes() {
    let engine = RedbEngine::in_memory().expect("failed to create engine");

    let mut tx = engine.begin_write().expect("failed to begin write");
    tx.put(b"k1", b"v1").expect("failed to put");
    tx.put(b"k2", b"v2").expect("failed to put");
    assert_eq!(tx.get(b"k1").expect("failed to get"), Some(b"v1".to_vec()));

    {
        let mut cursor = tx.cursor(Direction::Reverse).expect("failed to create cursor");
        let last = cursor.next().expect("failed to next");
        assert_eq!(last, Some((b"k2".to_vec(), b"v2".to_vec())));
    }

    tx.delete(b"k2").expect("failed to delete");
    assert_eq!(tx.get(b"k2").expect("failed to get"), None);
    tx.commit().expect("failed to commit");
}

/// Test Redb-specific: concurrent read transactions.
#[test]
fn test_concurrent_read_transactions() {
    let engine = RedbEngine::in_memory().expect("failed to create engine");

    {
        let mut tx = engine.begin_write().expect("failed to begin write");
        tx.put(b"key1", b"value1").expect("failed to put");
        tx.put(b"key2", b"value2").expect("failed to put");
        tx.commit().expect("failed to commit");
    }

    let tx1 = engine.begin_read().expect("failed to begin read 1");
    let tx2 = engine.begin_read().expect("failed to begin read 2");

    assert_eq!(tx1.get(b"key1").expect("failed to get"), tx2.get(b"key1").expect("failed to get"));
    assert_eq!(tx1.get(b"key2").expect("failed to get"), tx2.get(b"key2").expect("failed to get"));
}

/// Test Redb-specific: large values.
#[test]
fn test_large_values() {
    let engine = RedbEngine::in_memory().expect("failed to create engine");

    let large_value = vec![0xAB_u8; 1024 * 1024];

    {
        let mut tx = engine.begin_write().expect("failed to begin write");
        tx.put(b"large", &large_value).expect("failed to put large value");
        tx.commit().expect("failed to commit");
    }

    {
        let tx = engine.begin_read().expect("failed to begin read");
        let value = tx.get(b"large").expect("failed to get");
        assert_eq!(value, Some(large_value));
    }
}

/// Test that the streaming cursor handles datasets larger than one batch.
#[test]
fn test_streaming_cursor_large_dataset() {
    let engine = RedbEngine::in_memory().expect("failed to create engine");

    // Larger than the default batch size (1000)
    const NUM_KEYS: usize = 3500;

    {
        let mut tx = engine.begin_write().expect("failed to begin write");
        for i in 0..NUM_KEYS {
            let key = format!("key:{i:06}");
            let value = format!("value:{i:06}");
            tx.put(key.as_bytes(), value.as_bytes()).expect("failed to put");
        }
        tx.commit().expect("failed to commit");
    }

    // Forward across batches
    {
        let tx = engine.begin_read().expect("failed to begin read");
        let mut cursor = tx.cursor(Direction::Forward).expect("failed to create cursor");

        let mut count = 0;
        let mut last_key: Option<Vec<u8>> = None;
        cursor.seek(b"key:").expect("failed to seek");
        while let Some((k, _)) = cursor.current() {
            if let Some(prev) = &last_key {
                assert!(k > prev.as_slice(), "keys should be in ascending order");
            }
            last_key = Some(k.to_vec());
            count += 1;
            cursor.next().expect("failed to next");
        }
        assert_eq!(count, NUM_KEYS);
    }

    // Reverse across batches
    {
        let tx = engine.begin_read().expect("failed to begin read");
        let mut cursor = tx.cursor(Direction::Reverse).expect("failed to create cursor");

        let mut count = 0;
        let mut last_key: Option<Vec<u8>> = None;
        cursor.seek(b"key:\xff").expect("failed to seek");
        while let Some((k, _)) = cursor.current() {
            if let Some(prev) = &last_key {
                assert!(k < prev.as_slice(), "keys should be in descending order");
            }
            last_key = Some(k.to_vec());
            count += 1;
            cursor.next().expect("failed to next");
        }
        assert_eq!(count, NUM_KEYS);
    }

    // Seek into the middle, then cross a batch boundary
    {
        let tx = engine.begin_read().expect("failed to begin read");
        let mut cursor = tx.cursor(Direction::Forward).expect("failed to create cursor");

        let seek_key = format!("key:{:06}", NUM_KEYS / 2);
        let (k, _) = cursor.seek(seek_key.as_bytes()).expect("failed to seek").expect("entry");
        assert_eq!(k, seek_key.as_bytes());

        for _ in 0..1000 {
            cursor.next().expect("failed to next");
        }
        let expected = format!("key:{:06}", NUM_KEYS / 2 + 1000);
        assert_eq!(cursor.current().map(|(k, _)| k.to_vec()), Some(expected.into_bytes()));
    }
}

/// Test Redb-specific: data survives reopening a database file.
#[test]
fn test_persistence_across_reopen() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("persist.redb");

    {
        let engine = RedbEngine::open(&path).expect("failed to open");
        let mut tx = engine.begin_write().expect("failed to begin write");
        tx.put(b"durable", b"yes").expect("failed to put");
        tx.commit().expect("failed to commit");
    }

    {
        let config = RedbConfig::new().cache_size(4 * 1024 * 1024);
        let engine = RedbEngine::open_with_config(&path, config).expect("failed to reopen");
        let tx = engine.begin_read().expect("failed to begin read");
        assert_eq!(tx.get(b"durable").expect("failed to get"), Some(b"yes".to_vec()));
    }
}
