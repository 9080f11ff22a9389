// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte buffers and fixed 32-byte words built on `seqbuf-alloc`.
//!
//! # Types
//!
//! ## ByteBuffer
//!
//! A `SequenceBuffer<u8>` newtype for binary data:
//! - Same doubling growth and bounds behaviour as `SequenceBuffer`
//! - Conversion to [`FixedWord`] only when the length is exactly 32
//! - Raw-region import always deep-copies
//! - Hex rendering and parsing
//!
//! ## FixedWord
//!
//! A `Copy` 32-byte value read big-endian, with hex `Display`/`FromStr`
//! and constant-time comparison.
//!
//! # Example
//!
//! ```rust
//! use seqbuf_bytes::{ByteBuffer, ByteBufferError, FixedWord};
//!
//! fn example() -> Result<(), ByteBufferError> {
//!     let word: FixedWord =
//!         "0x00000000000000000000000000000000000000000000000000000000000000ff".parse()?;
//!
//!     let mut buf = ByteBuffer::from(word);
//!     assert_eq!(buf.len(), 32);
//!     assert_eq!(buf.capacity(), 32);
//!
//!     buf.push(0);
//!     assert_eq!(buf.capacity(), 64);
//!     assert!(buf.try_into_fixed_word().is_err());
//!
//!     buf.pop();
//!     assert_eq!(buf.try_into_fixed_word()?, word);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Logging
//!
//! Rejected conversions and hex parses emit `tracing` DEBUG events under the
//! `seqbuf::bytes` target.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod byte_buffer;
mod error;
mod fixed_word;

#[cfg(test)]
mod tests;

pub use byte_buffer::ByteBuffer;
pub use error::ByteBufferError;
pub use fixed_word::FixedWord;
