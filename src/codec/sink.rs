//! Append-only byte sink used while encoding.
//!
//! Backed by `bytes::BytesMut`, so the finished encoding can be frozen into
//! a `Bytes` without copying.
//!
//! # Example
//!
//! ```
//! use polyglot_wire::codec::ByteSink;
//!
//! let mut sink = ByteSink::new();
//! sink.push(0x05);
//! sink.extend(b"abc");
//! assert_eq!(sink.len(), 4);
//! assert_eq!(sink.as_bytes(), &[0x05, b'a', b'b', b'c']);
//! ```

use bytes::{Bytes, BytesMut};

/// Default initial capacity (512 bytes covers a typical HTTP context).
pub const DEFAULT_SINK_CAPACITY: usize = 512;

/// Growable byte buffer confined to a single encode operation.
#[derive(Debug, Default, Clone)]
pub struct ByteSink {
    buffer: BytesMut,
}

impl ByteSink {
    /// Create an empty sink with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SINK_CAPACITY)
    }

    /// Create an empty sink with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
        }
    }

    /// Append a single byte.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.buffer.extend_from_slice(&[byte]);
    }

    /// Append a run of bytes. Appending an empty slice is a no-op.
    #[inline]
    pub fn extend(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.buffer.extend_from_slice(data);
    }

    /// Everything written so far.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the sink, returning the written bytes (zero-copy).
    pub fn freeze(self) -> Bytes {
        self.buffer.freeze()
    }

    /// Consume the sink, returning the written bytes as a vector.
    pub fn into_vec(self) -> Vec<u8> {
        self.buffer.to_vec()
    }
}
