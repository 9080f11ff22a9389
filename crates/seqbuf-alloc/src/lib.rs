// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable heap-backed sequence buffer with a fixed doubling growth policy.
//!
//! `SequenceBuffer<T>` owns one contiguous allocation and tracks its
//! capacity explicitly, so growth is deterministic and observable.
//!
//! # Core Guarantees
//!
//! - **Doubling growth**: an insertion that does not fit reallocates to
//!   `max(1, capacity * 2)` until it does (0 → 1 → 2 → 4 → 8 ...). `push`,
//!   `insert`, `append`, `resize`, `reserve` and `splice_with` share this rule.
//! - **Capacity never shrinks**: `clear`, `pop`, `remove`, `truncate`,
//!   `split_off` and the splice family only move the length.
//! - **Independent results**: clone, split and splice return buffers backed
//!   by their own allocation.
//! - **Explicit faults**: bounds misuse panics, and every faulting operation
//!   has a `try_` form returning [`SequenceBufferError`]. `get` and `pop`
//!   report absence with `None`.
//! - **Borrowed raw views**: [`RawRegion`] exposes `(pointer, len)` tied to
//!   the owner's lifetime.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use seqbuf_alloc::{SequenceBuffer, SequenceBufferError};
//!
//! fn example() -> Result<(), SequenceBufferError> {
//!     let mut buf = SequenceBuffer::new();
//!     for value in [5u32, 7, 9] {
//!         buf.push(value);
//!     }
//!     assert_eq!(buf.len(), 3);
//!     assert_eq!(buf.capacity(), 4);
//!
//!     buf.try_insert(1, 11)?;
//!     assert_eq!(buf, [5, 11, 7, 9]);
//!
//!     assert!(buf.try_remove(4).is_err());
//!     assert_eq!(buf.get(4), None);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Self-referential Operations
//!
//! ```rust
//! use seqbuf_alloc::SequenceBuffer;
//!
//! let mut buf = SequenceBuffer::from_slice(&[1u8, 2]);
//! buf.append_self();
//! assert_eq!(buf, [1, 2, 1, 2]);
//!
//! buf[0] = 9;
//! assert_eq!(buf, [9, 2, 1, 2]);
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to inject failures for testing error handling paths:
//!
//! ```toml
//! [dev-dependencies]
//! seqbuf-alloc = { version = "*", features = ["test-utils"] }
//! ```
//!
//! Then use [`SequenceBufferBehaviour`] to make fallible reservations fail.
//!
//! # Logging
//!
//! Reallocations emit `tracing` TRACE events and rejected `try_` calls emit
//! DEBUG events, both under the `seqbuf::alloc` target. No subscriber is
//! installed by this crate.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod bulk;
mod error;
mod raw_region;
mod sequence_buffer;
mod traits;

#[cfg(test)]
mod tests;

pub use error::SequenceBufferError;
pub use raw_region::RawRegion;
pub use sequence_buffer::SequenceBuffer;

#[cfg(any(test, feature = "test-utils"))]
pub use sequence_buffer::SequenceBufferBehaviour;
