// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Deref, DerefMut};

use seqbuf_alloc::{RawRegion, SequenceBuffer, SequenceBufferError};
use seqbuf_util::{bytes_to_hex, try_hex_to_bytes};

use crate::error::ByteBufferError;
use crate::fixed_word::{FixedWord, TRACE_TARGET};

/// Growable byte buffer: a [`SequenceBuffer<u8>`] with byte-oriented conversions.
///
/// Every `SequenceBuffer` operation is reachable through `Deref`, so growth
/// follows the same doubling policy. `ByteBuffer` adds conversion to and from
/// [`FixedWord`] and hex rendering. `splice`, `split_off`, `split_at` and
/// `splice_with_self` are shadowed to hand back `ByteBuffer`s; `splice`
/// here takes a replacement. The removal-only splice of the inner buffer is
/// still reachable as `(*buf).splice(start, end)` and returns a
/// `SequenceBuffer<u8>`.
///
/// ```rust
/// use seqbuf_bytes::{ByteBuffer, FixedWord};
///
/// let mut buf = ByteBuffer::from_slice(&[0u8; 31]);
/// assert!(buf.try_into_fixed_word().is_err());
///
/// buf.push(1);
/// let word = buf.try_into_fixed_word().unwrap();
/// assert_eq!(word, FixedWord::from_u128(1));
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteBuffer(SequenceBuffer<u8>);

impl ByteBuffer {
    /// Creates an empty buffer. Does not allocate.
    pub const fn new() -> Self {
        Self(SequenceBuffer::new())
    }

    /// Creates an empty buffer with capacity for exactly `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(SequenceBuffer::with_capacity(capacity))
    }

    /// Copies `bytes` into a buffer whose capacity equals `bytes.len()`.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self(SequenceBuffer::from_slice(bytes))
    }

    /// Copies the bytes viewed by `region`. The result never aliases it.
    pub fn from_raw_region(region: RawRegion<'_, u8>) -> Self {
        Self(SequenceBuffer::from_raw_region(region))
    }

    /// Copies `len` bytes starting at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `len` bytes for the duration of the
    /// call. A null `ptr` is allowed only with `len == 0`.
    pub unsafe fn from_raw_parts(ptr: *const u8, len: usize) -> Self {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from this function's contract.
        Self(unsafe { SequenceBuffer::from_raw_parts(ptr, len) })
    }

    /// Creates a 32-byte buffer holding `word`, with capacity exactly 32.
    pub fn from_fixed_word(word: FixedWord) -> Self {
        Self::from_slice(word.as_bytes())
    }

    /// Parses a hex string (no prefix) into a buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ByteBufferError::InvalidHex`] on odd length or a non-hex digit.
    pub fn from_hex(hex: &str) -> Result<Self, ByteBufferError> {
        match try_hex_to_bytes(hex) {
            Some(bytes) => Ok(Self::from(bytes)),
            None => {
                tracing::debug!(target: TRACE_TARGET, len = hex.len(), "hex parse rejected");
                Err(ByteBufferError::InvalidHex)
            }
        }
    }

    /// Unwraps the underlying sequence buffer.
    pub fn into_inner(self) -> SequenceBuffer<u8> {
        self.0
    }

    /// Reads the buffer as a [`FixedWord`].
    ///
    /// # Errors
    ///
    /// Returns [`SequenceBufferError::ConversionFailure`] with
    /// `expected: 32` unless `len == 32`.
    pub fn try_into_fixed_word(&self) -> Result<FixedWord, SequenceBufferError> {
        FixedWord::try_from_slice(self.as_slice())
    }

    /// Appends a copy of `bytes`.
    #[track_caller]
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.0.append(bytes);
    }

    /// Replaces `[start, end)` with `replacement`, returning the removed bytes.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > len`.
    ///
    /// ```rust
    /// use seqbuf_bytes::ByteBuffer;
    ///
    /// let mut buf = ByteBuffer::from_slice(b"hello world");
    /// let removed = buf.splice(0, 5, b"howdy");
    ///
    /// assert_eq!(removed, b"hello"[..]);
    /// assert_eq!(buf, b"howdy world"[..]);
    /// ```
    #[track_caller]
    pub fn splice(&mut self, start: usize, end: usize, replacement: &[u8]) -> Self {
        Self(self.0.splice_with(start, end, replacement))
    }

    /// Fallible form of [`splice`](Self::splice).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceBufferError::InvalidRange`] if `start > end` or
    /// `end > len`, or [`SequenceBufferError::CapacityOverflow`] if growing
    /// for a longer replacement fails. The buffer is left untouched.
    pub fn try_splice(
        &mut self,
        start: usize,
        end: usize,
        replacement: &[u8],
    ) -> Result<Self, SequenceBufferError> {
        self.0.try_splice_with(start, end, replacement).map(Self)
    }

    /// Splits off `[index, len)` into a new buffer. Capacity of `self` is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn split_off(&mut self, index: usize) -> Self {
        Self(self.0.split_off(index))
    }

    /// Fallible form of [`split_off`](Self::split_off).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceBufferError::InvalidRange`] if `index > len`.
    pub fn try_split_off(&mut self, index: usize) -> Result<Self, SequenceBufferError> {
        self.0.try_split_off(index).map(Self)
    }

    /// Returns independent copies of `[0, index)` and `[index, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn split_at(&self, index: usize) -> (Self, Self) {
        let (left, right) = self.0.split_at(index);
        (Self(left), Self(right))
    }

    /// Fallible form of [`split_at`](Self::split_at).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceBufferError::InvalidRange`] if `index > len`.
    pub fn try_split_at(&self, index: usize) -> Result<(Self, Self), SequenceBufferError> {
        let (left, right) = self.0.try_split_at(index)?;
        Ok((Self(left), Self(right)))
    }

    /// Replaces `[start, end)` with the buffer's own contents as they were before the call.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > len`.
    #[track_caller]
    pub fn splice_with_self(&mut self, start: usize, end: usize) -> Self {
        Self(self.0.splice_with_self(start, end))
    }

    /// Fallible form of [`splice_with_self`](Self::splice_with_self).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceBufferError::InvalidRange`] for a bad range, or
    /// [`SequenceBufferError::CapacityOverflow`] if growing fails.
    pub fn try_splice_with_self(
        &mut self,
        start: usize,
        end: usize,
    ) -> Result<Self, SequenceBufferError> {
        self.0.try_splice_with_self(start, end).map(Self)
    }

    /// Renders the bytes as lowercase hex without prefix.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(self.as_slice())
    }
}

impl Deref for ByteBuffer {
    type Target = SequenceBuffer<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ByteBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsMut<[u8]> for ByteBuffer {
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self(SequenceBuffer::from(bytes))
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl From<SequenceBuffer<u8>> for ByteBuffer {
    fn from(inner: SequenceBuffer<u8>) -> Self {
        Self(inner)
    }
}

impl From<ByteBuffer> for SequenceBuffer<u8> {
    fn from(buf: ByteBuffer) -> Self {
        buf.0
    }
}

impl From<FixedWord> for ByteBuffer {
    fn from(word: FixedWord) -> Self {
        Self::from_fixed_word(word)
    }
}

impl TryFrom<&ByteBuffer> for FixedWord {
    type Error = SequenceBufferError;

    fn try_from(buf: &ByteBuffer) -> Result<Self, Self::Error> {
        buf.try_into_fixed_word()
    }
}

impl PartialEq<[u8]> for ByteBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<&[u8]> for ByteBuffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_slice() == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteBuffer {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl PartialEq<Vec<u8>> for ByteBuffer {
    fn eq(&self, other: &Vec<u8>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl FromIterator<u8> for ByteBuffer {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(SequenceBuffer::from_iter(iter))
    }
}

impl Extend<u8> for ByteBuffer {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl fmt::LowerHex for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }

        for byte in self.iter() {
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("hex", &format_args!("{self:x}"))
            .finish()
    }
}
