//! Serialization for [`LogRecord`].
//!
//! # Format
//!
//! A log record is encoded as:
//! - 1 byte format version
//! - 8 bytes index (big-endian u64)
//! - 8 bytes term (big-endian u64)
//! - 1 byte log type tag
//! - 4 bytes data length + data bytes
//! - 4 bytes extensions length + extension bytes

use crate::error::CoreError;
use crate::types::{LogRecord, LogType};

use super::traits::{Decoder, Encoder, FORMAT_VERSION};

impl Encoder for LogRecord {
    fn encode(&self) -> Result<Vec<u8>, CoreError> {
        let mut buf = Vec::with_capacity(26 + self.data.len() + self.extensions.len());
        self.encode_to(&mut buf)?;
        Ok(buf)
    }

    fn encode_to(&self, buf: &mut Vec<u8>) -> Result<(), CoreError> {
        buf.push(FORMAT_VERSION);
        buf.extend_from_slice(&self.index.to_be_bytes());
        buf.extend_from_slice(&self.term.to_be_bytes());
        buf.push(self.log_type.as_u8());
        write_bytes(buf, &self.data, "data")?;
        write_bytes(buf, &self.extensions, "extensions")?;
        Ok(())
    }
}

impl Decoder for LogRecord {
    fn decode(bytes: &[u8]) -> Result<Self, CoreError> {
        let mut reader = Reader { bytes, offset: 0 };

        let version = reader.u8("format version")?;
        if version != FORMAT_VERSION {
            return Err(CoreError::Encoding(format!(
                "unsupported format version: {version}, expected {FORMAT_VERSION}"
            )));
        }

        let index = reader.u64("index")?;
        let term = reader.u64("term")?;
        let log_type = LogType::try_from(reader.u8("log type")?)?;
        let data = reader.bytes("data")?.to_vec();
        let extensions = reader.bytes("extensions")?.to_vec();

        if reader.offset != bytes.len() {
            return Err(CoreError::Encoding(format!(
                "{} trailing bytes after log record",
                bytes.len() - reader.offset
            )));
        }

        Ok(Self { index, term, log_type, data, extensions })
    }
}

fn write_bytes(buf: &mut Vec<u8>, bytes: &[u8], what: &str) -> Result<(), CoreError> {
    let len = u32::try_from(bytes.len())
        .map_err(|_| CoreError::Encoding(format!("{what} too long")))?;
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(bytes);
    Ok(())
}

struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize, what: &str) -> Result<&'a [u8], CoreError> {
        let end = self.offset.checked_add(len).ok_or_else(|| CoreError::truncated(what))?;
        let slice = self.bytes.get(self.offset..end).ok_or_else(|| CoreError::truncated(what))?;
        self.offset = end;
        Ok(slice)
    }

    fn u8(&mut self, what: &str) -> Result<u8, CoreError> {
        Ok(self.take(1, what)?[0])
    }

    fn u64(&mut self, what: &str) -> Result<u64, CoreError> {
        let raw: [u8; 8] = self
            .take(8, what)?
            .try_into()
            .map_err(|_| CoreError::Encoding(format!("failed to read {what}")))?;
        Ok(u64::from_be_bytes(raw))
    }

    fn bytes(&mut self, what: &str) -> Result<&'a [u8], CoreError> {
        let raw: [u8; 4] = self
            .take(4, what)?
            .try_into()
            .map_err(|_| CoreError::Encoding(format!("failed to read {what} length")))?;
        let len = u32::from_be_bytes(raw) as usize;
        self.take(len, what)
    }
}
