//! Receive-side byte accumulation.
use bytes::{Buf, Bytes, BytesMut};

/// Append-only, front-consumable byte store for one connection.
///
/// Fragments arrive from the transport in arbitrary sizes and are appended
/// at the back; judged bytes are consumed from the front. The remaining
/// content always starts at offset zero of [`as_slice`], in arrival order.
///
/// Owned by a single connection task, never shared.
///
/// [`as_slice`]: RecvBuffer::as_slice
#[derive(Debug, Default)]
pub struct RecvBuffer {
    bytes: BytesMut,
}

impl RecvBuffer {
    /// Create an empty buffer.
    ///
    /// This function does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self { bytes: BytesMut::new() }
    }

    /// Create an empty buffer with at least `capacity` bytes reserved.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: BytesMut::with_capacity(capacity),
        }
    }

    /// Returns the number of buffered bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if no bytes are buffered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the buffered bytes without consuming them.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Copy `chunk` onto the end of the buffered bytes, growing as needed.
    pub fn append(&mut self, chunk: &[u8]) {
        self.bytes.extend_from_slice(chunk);
    }

    /// Discard the first `n` buffered bytes.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`len`]; overconsuming is a caller bug, not a
    /// protocol error.
    ///
    /// [`len`]: RecvBuffer::len
    pub fn consume(&mut self, n: usize) {
        assert!(n <= self.bytes.len(), "consumed past buffered length");
        self.bytes.advance(n);
    }

    /// Consume the first `n` buffered bytes and return them.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`len`].
    ///
    /// [`len`]: RecvBuffer::len
    pub fn take(&mut self, n: usize) -> Bytes {
        assert!(n <= self.bytes.len(), "took past buffered length");
        self.bytes.split_to(n).freeze()
    }

    /// Backing storage, for reading from IO directly into the buffer.
    pub(crate) fn bytes_mut(&mut self) -> &mut BytesMut {
        &mut self.bytes
    }
}
