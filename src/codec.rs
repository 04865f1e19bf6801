// ABOUTME: Shared wire plumbing for the SMS PDU codec: error type, bounded byte cursor, Encodable trait
// ABOUTME: Every decode step reads through PduCursor so the remaining-length check lives in one place

use bytes::{Buf, Bytes, BytesMut};
use std::io::Cursor;
use thiserror::Error;

/// Codec errors with enough context to tell which field of the PDU failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PduError {
    /// A field declared (or needed) more bytes than the buffer still holds
    #[error("Truncated PDU: field '{field}' needs {needed} bytes, {remaining} remaining")]
    TruncatedPdu {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    /// Non-zero protocol identifier or a data coding scheme other than the default alphabet
    #[error("Unsupported encoding in '{field}': {value:#04x}")]
    UnsupportedEncoding { field: &'static str, value: u8 },

    /// An information element ran past the bound of its user data header
    #[error("Malformed user data header: {0}")]
    MalformedUdh(String),

    /// Caller-supplied value rejected before any encoding happened
    #[error("{0}")]
    InvalidArgument(String),
}

impl PduError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        PduError::InvalidArgument(message.into())
    }
}

/// Result type alias for codec operations
pub type PduResult<T> = Result<T, PduError>;

/// Read cursor over a borrowed PDU buffer.
///
/// All reads go through [`PduCursor::read_bytes`] (or one of the thin wrappers
/// around it), which refuses to hand out bytes past the end of the buffer.
#[derive(Debug, Clone)]
pub struct PduCursor<'a> {
    inner: Cursor<&'a [u8]>,
}

impl<'a> PduCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            inner: Cursor::new(data),
        }
    }

    /// Number of unread bytes
    pub fn remaining(&self) -> usize {
        self.inner.remaining()
    }

    /// Offset of the next unread byte
    pub fn position(&self) -> usize {
        self.inner.position() as usize
    }

    /// Fails with `TruncatedPdu` unless at least `needed` bytes remain
    pub fn ensure(&self, needed: usize, field: &'static str) -> PduResult<()> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(PduError::TruncatedPdu {
                field,
                needed,
                remaining,
            });
        }
        Ok(())
    }

    /// Read exactly `len` bytes or fail without moving the cursor
    pub fn read_bytes(&mut self, len: usize, field: &'static str) -> PduResult<&'a [u8]> {
        self.ensure(len, field)?;

        let data: &'a [u8] = *self.inner.get_ref();
        let start = self.position();
        let bytes = &data[start..start + len];
        self.inner.advance(len);
        Ok(bytes)
    }

    /// Decode a single byte
    pub fn read_u8(&mut self, field: &'static str) -> PduResult<u8> {
        self.ensure(1, field)?;
        Ok(self.inner.get_u8())
    }

    /// Skip `len` bytes that carry nothing we report
    pub fn skip(&mut self, len: usize, field: &'static str) -> PduResult<()> {
        self.read_bytes(len, field).map(|_| ())
    }

    /// Consume everything that is left
    pub fn read_rest(&mut self) -> &'a [u8] {
        let data: &'a [u8] = *self.inner.get_ref();
        let start = self.position();
        self.inner.advance(data.len() - start);
        &data[start..]
    }
}

/// Trait for wire types that can be written into a PDU buffer
pub trait Encodable {
    /// Encode this value to the buffer
    fn encode(&self, buf: &mut BytesMut) -> PduResult<()>;

    /// Calculate the encoded size without keeping the encoding
    fn encoded_size(&self) -> usize {
        let mut buf = BytesMut::new();
        self.encode(&mut buf).map(|_| buf.len()).unwrap_or(0)
    }

    /// Encode into a fresh buffer and freeze it
    fn to_bytes(&self) -> PduResult<Bytes> {
        let mut buf = BytesMut::new();
        self.encode(&mut buf)?;
        Ok(buf.freeze())
    }
}
