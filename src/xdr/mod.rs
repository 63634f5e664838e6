//! Minimal XDR (RFC 4506) plumbing for Soroban contract values.
//!
//! Only the subset the domains contract surface needs is implemented:
//! big-endian integers, padded opaques and strings, and the value,
//! address and transaction shapes built on top of them in the
//! submodules.

pub mod scval;
pub mod strkey;
pub mod tx;

pub use scval::{ScAddress, ScVal};
pub use tx::{Account, Transaction, TransactionBuilder};

use thiserror::Error;

/// Errors raised while encoding or decoding XDR payloads.
#[derive(Error, Debug)]
pub enum XdrError {
    #[error("unexpected end of XDR stream")]
    UnexpectedEof,

    #[error("unsupported XDR discriminant {0}")]
    UnsupportedDiscriminant(u32),

    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("length {0} out of range")]
    LengthOutOfRange(u32),

    #[error("missing map key `{0}`")]
    MissingMapKey(String),

    #[error("invalid utf-8 in XDR string")]
    InvalidUtf8,

    #[error("trailing bytes after XDR value")]
    TrailingBytes,

    #[error("transaction has no operation")]
    MissingOperation,

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid strkey: {0}")]
    Strkey(&'static str),
}

/// Bounds-checked reader over an XDR byte stream.
pub(crate) struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], XdrError> {
        let end = self.pos.checked_add(n).ok_or(XdrError::UnexpectedEof)?;
        if end > self.buf.len() {
            return Err(XdrError::UnexpectedEof);
        }
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32, XdrError> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub(crate) fn read_u64(&mut self) -> Result<u64, XdrError> {
        let b = self.take(8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(b);
        Ok(u64::from_be_bytes(raw))
    }

    pub(crate) fn read_i64(&mut self) -> Result<i64, XdrError> {
        Ok(self.read_u64()? as i64)
    }

    pub(crate) fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N], XdrError> {
        let b = self.take(N)?;
        let mut raw = [0u8; N];
        raw.copy_from_slice(b);
        Ok(raw)
    }

    /// Variable-length opaque: u32 length, data, zero padding to a
    /// 4-byte boundary.
    pub(crate) fn read_var_bytes(&mut self, max: u32) -> Result<Vec<u8>, XdrError> {
        let len = self.read_u32()?;
        if len > max {
            return Err(XdrError::LengthOutOfRange(len));
        }
        let data = self.take(len as usize)?.to_vec();
        self.take(padding(len as usize))?;
        Ok(data)
    }

    pub(crate) fn read_string(&mut self, max: u32) -> Result<String, XdrError> {
        String::from_utf8(self.read_var_bytes(max)?).map_err(|_| XdrError::InvalidUtf8)
    }

    /// Element count for a variable-length array, sanity-bounded by the
    /// bytes left in the stream.
    pub(crate) fn read_count(&mut self) -> Result<usize, XdrError> {
        let count = self.read_u32()?;
        if count as usize > self.remaining() / 4 {
            return Err(XdrError::LengthOutOfRange(count));
        }
        Ok(count as usize)
    }

    pub(crate) fn finish(self) -> Result<(), XdrError> {
        if self.pos != self.buf.len() {
            return Err(XdrError::TrailingBytes);
        }
        Ok(())
    }
}

/// Append-only writer producing an XDR byte stream.
pub(crate) struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub(crate) fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub(crate) fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    pub(crate) fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub(crate) fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub(crate) fn write_i64(&mut self, value: i64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub(crate) fn write_fixed(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    pub(crate) fn write_var_bytes(&mut self, data: &[u8]) {
        self.write_u32(data.len() as u32);
        self.buf.extend_from_slice(data);
        self.buf.extend(std::iter::repeat(0u8).take(padding(data.len())));
    }

    pub(crate) fn write_string(&mut self, value: &str) {
        self.write_var_bytes(value.as_bytes());
    }
}

fn padding(len: usize) -> usize {
    (4 - len % 4) % 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_bytes_round_trip_with_padding() {
        let mut w = Writer::new();
        w.write_var_bytes(b"hello");
        let encoded = w.into_inner();
        assert_eq!(encoded.len(), 4 + 5 + 3);

        let mut r = Reader::new(&encoded);
        assert_eq!(r.read_var_bytes(u32::MAX).unwrap(), b"hello");
        r.finish().unwrap();
    }

    #[test]
    fn test_reader_rejects_truncated_stream() {
        let mut r = Reader::new(&[0, 0]);
        assert!(matches!(r.read_u32(), Err(XdrError::UnexpectedEof)));
    }

    #[test]
    fn test_reader_rejects_trailing_bytes() {
        let mut r = Reader::new(&[0, 0, 0, 1, 9]);
        r.read_u32().unwrap();
        assert!(matches!(r.finish(), Err(XdrError::TrailingBytes)));
    }

    #[test]
    fn test_count_larger_than_stream_is_rejected() {
        let mut r = Reader::new(&[0xFF, 0xFF, 0xFF, 0xFF]);
        assert!(matches!(
            r.read_count(),
            Err(XdrError::LengthOutOfRange(_))
        ));
    }
}
