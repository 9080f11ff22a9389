// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::str::FromStr;

use seqbuf_alloc::SequenceBufferError;
use seqbuf_util::{constant_time_eq, try_hex_to_bytes};

use crate::error::ByteBufferError;

pub(crate) const TRACE_TARGET: &str = "seqbuf::bytes";

const WORD_LEN: usize = 32;

/// A 32-byte word, read big-endian: byte 0 is the most significant.
///
/// Ordering is byte-lexicographic, which for equal-length big-endian words
/// is the numeric order.
///
/// ```rust
/// use seqbuf_bytes::FixedWord;
///
/// let one = FixedWord::from_u128(1);
/// assert_eq!(one.as_bytes()[31], 1);
/// assert!(FixedWord::ZERO < one);
///
/// let parsed: FixedWord = one.to_string().parse().unwrap();
/// assert_eq!(parsed, one);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedWord([u8; WORD_LEN]);

impl FixedWord {
    /// Number of bytes in a word.
    pub const LEN: usize = WORD_LEN;

    /// The all-zero word.
    pub const ZERO: Self = Self([0u8; Self::LEN]);

    /// Wraps `bytes` as a word.
    #[inline]
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Copies `slice` into a word.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceBufferError::ConversionFailure`] unless
    /// `slice.len() == 32`.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, SequenceBufferError> {
        match <[u8; Self::LEN]>::try_from(slice) {
            Ok(bytes) => Ok(Self(bytes)),
            Err(_) => {
                let err = SequenceBufferError::ConversionFailure {
                    expected: Self::LEN,
                    actual: slice.len(),
                };
                tracing::debug!(target: TRACE_TARGET, %err, "word conversion rejected");
                Err(err)
            }
        }
    }

    /// Builds a word holding `value` in its low 16 bytes.
    pub const fn from_u128(value: u128) -> Self {
        let low = value.to_be_bytes();
        let mut bytes = [0u8; Self::LEN];
        let mut i = 0;

        while i < low.len() {
            bytes[Self::LEN - low.len() + i] = low[i];
            i += 1;
        }

        Self(bytes)
    }

    /// Returns the word as a `u128`, or `None` if any of its high 16 bytes is set.
    pub fn try_to_u128(&self) -> Option<u128> {
        let (high, low) = self.0.split_at(Self::LEN / 2);

        if high.iter().any(|&b| b != 0) {
            return None;
        }

        let mut out = [0u8; 16];
        out.copy_from_slice(low);
        Some(u128::from_be_bytes(out))
    }

    /// Borrows the word's bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Returns a copy of the word's bytes.
    #[inline]
    pub const fn to_bytes(self) -> [u8; Self::LEN] {
        self.0
    }

    /// Returns `true` for [`FixedWord::ZERO`].
    pub fn is_zero(&self) -> bool {
        self.ct_eq(&Self::ZERO)
    }

    /// Compares two words in time independent of where they differ.
    #[inline]
    pub fn ct_eq(&self, other: &Self) -> bool {
        constant_time_eq(&self.0, &other.0)
    }
}

impl From<[u8; WORD_LEN]> for FixedWord {
    fn from(bytes: [u8; WORD_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<FixedWord> for [u8; WORD_LEN] {
    fn from(word: FixedWord) -> Self {
        word.0
    }
}

impl TryFrom<&[u8]> for FixedWord {
    type Error = SequenceBufferError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_slice(slice)
    }
}

impl AsRef<[u8]> for FixedWord {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for FixedWord {
    type Err = ByteBufferError;

    /// Parses 64 hex digits, optionally prefixed with `0x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);

        let Some(bytes) = try_hex_to_bytes(digits) else {
            tracing::debug!(target: TRACE_TARGET, len = s.len(), "hex parse rejected");
            return Err(ByteBufferError::InvalidHex);
        };

        Ok(Self::try_from_slice(&bytes)?)
    }
}

impl fmt::LowerHex for FixedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }

        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

impl fmt::Display for FixedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:#x}")
    }
}

impl fmt::Debug for FixedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedWord({self:#x})")
    }
}
