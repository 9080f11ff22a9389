// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable sequence and byte buffers with deterministic doubling growth.
//!
//! `seqbuf` bundles the member crates:
//!
//! - [`alloc`]: `SequenceBuffer<T>`, `RawRegion` and `SequenceBufferError`
//! - [`bytes`]: `ByteBuffer`, `FixedWord` and `ByteBufferError`
//! - [`util`]: hex and constant-time helpers
//!
//! The most used types are also re-exported at the crate root.
//!
//! # Quick Start
//!
//! ```rust
//! use seqbuf::{ByteBuffer, FixedWord, SequenceBuffer};
//!
//! let mut buf = SequenceBuffer::new();
//! for value in [5u32, 7, 9] {
//!     buf.push(value);
//! }
//! assert_eq!(buf.capacity(), 4);
//!
//! buf.insert(1, 11);
//! assert_eq!(buf, [5, 11, 7, 9]);
//! assert_eq!(buf.remove(0), 5);
//!
//! let word = FixedWord::from_u128(42);
//! let bytes = ByteBuffer::from(word);
//! assert_eq!(bytes.try_into_fixed_word(), Ok(word));
//! ```
//!
//! # Growth
//!
//! Every insertion that does not fit reallocates to `max(1, capacity * 2)`
//! until the new length fits. Capacity never shrinks.
//!
//! | pushes | 1 | 2 | 3 | 4 | 5 | 9 |
//! |--------|---|---|---|---|---|---|
//! | capacity | 1 | 2 | 4 | 4 | 8 | 16 |
//!
//! # Testing
//!
//! Enable `test-utils` to get `SequenceBufferBehaviour` for failure injection:
//!
//! ```toml
//! [dev-dependencies]
//! seqbuf = { version = "0.1.0", features = ["test-utils"] }
//! ```
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub use seqbuf_alloc as alloc;
pub use seqbuf_bytes as bytes;
pub use seqbuf_util as util;

pub use seqbuf_alloc::{RawRegion, SequenceBuffer, SequenceBufferError};
pub use seqbuf_bytes::{ByteBuffer, ByteBufferError, FixedWord};
