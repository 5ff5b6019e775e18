//! Key encoding for ordered storage.
//!
//! Log records and stable entries share one ordered key space. A fixed
//! four-byte prefix partitions it:
//!
//! - `logs` - Log record keys: `[b"logs"][index as big-endian u64]`
//! - `conf` - Stable entry keys: `[b"conf"][raw key bytes]`
//!
//! Log indices are encoded fixed-width and big-endian, so the byte order of
//! two log keys is the numeric order of their indices. A variable-width
//! decimal rendering would sort `"10"` before `"9"` and is never used.

use crate::error::CoreError;

/// Key prefix for log records.
pub const LOGS_PREFIX: &[u8] = b"logs";
/// Key prefix for stable entries.
pub const CONF_PREFIX: &[u8] = b"conf";

/// Length of an encoded log key.
pub const LOG_KEY_LEN: usize = LOGS_PREFIX.len() + 8;

/// Encode a log index as a storage key.
///
/// The key format is: `[LOGS_PREFIX][index as big-endian u64]`
#[inline]
#[must_use]
pub fn encode_log_key(index: u64) -> Vec<u8> {
    let mut key = Vec::with_capacity(LOG_KEY_LEN);
    key.extend_from_slice(LOGS_PREFIX);
    key.extend_from_slice(&index.to_be_bytes());
    key
}

/// Decode the log index from a storage key.
///
/// # Errors
///
/// Returns [`CoreError::InvalidKey`] if the key does not start with
/// [`LOGS_PREFIX`] or is not exactly [`LOG_KEY_LEN`] bytes long.
pub fn decode_log_key(key: &[u8]) -> Result<u64, CoreError> {
    let suffix = key
        .strip_prefix(LOGS_PREFIX)
        .ok_or_else(|| CoreError::InvalidKey("missing log prefix".to_owned()))?;
    let bytes: [u8; 8] = suffix.try_into().map_err(|_| {
        CoreError::InvalidKey(format!("log key suffix is {} bytes, expected 8", suffix.len()))
    })?;
    Ok(u64::from_be_bytes(bytes))
}

/// Encode a stable entry key.
///
/// The key format is: `[CONF_PREFIX][key]`
#[inline]
#[must_use]
pub fn encode_conf_key(key: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(CONF_PREFIX.len() + key.len());
    out.extend_from_slice(CONF_PREFIX);
    out.extend_from_slice(key);
    out
}

/// A key that sorts after every log key.
///
/// Seeking a reverse cursor here positions it on the highest log record.
#[inline]
#[must_use]
pub fn log_keys_end() -> Vec<u8> {
    let mut key = Vec::with_capacity(LOG_KEY_LEN + 1);
    key.extend_from_slice(LOGS_PREFIX);
    key.extend_from_slice(&[0xFF; 9]);
    key
}

/// Encode a `u64` stable value as 8 big-endian bytes.
#[inline]
#[must_use]
pub const fn encode_u64(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

/// Decode a `u64` stable value.
///
/// # Errors
///
/// Returns [`CoreError::Encoding`] if `bytes` is not exactly 8 bytes.
pub fn decode_u64(bytes: &[u8]) -> Result<u64, CoreError> {
    let bytes: [u8; 8] = bytes.try_into().map_err(|_| {
        CoreError::Encoding(format!("u64 value is {} bytes, expected 8", bytes.len()))
    })?;
    Ok(u64::from_be_bytes(bytes))
}
