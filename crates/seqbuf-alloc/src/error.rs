// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for seqbuf-alloc.

use thiserror::Error;

/// Error type for `SequenceBuffer` operations.
///
/// The panicking operations (`set`, `insert`, `remove`, ...) abort with the
/// `Display` of one of these variants; their `try_` counterparts return it.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum SequenceBufferError {
    /// Index not addressable for this operation.
    ///
    /// Element access requires `index < len`; insertion points allow
    /// `index <= len`.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds {
        /// Offending index.
        index: usize,
        /// Logical length at the time of the call.
        len: usize,
    },

    /// Range with `start > end` or `end > len`.
    #[error("invalid range {start}..{end} for length {len}")]
    InvalidRange {
        /// Range start (inclusive).
        start: usize,
        /// Range end (exclusive).
        end: usize,
        /// Logical length at the time of the call.
        len: usize,
    },

    /// Fixed-width conversion attempted on a buffer of the wrong length.
    #[error("conversion failure: expected length {expected}, got {actual}")]
    ConversionFailure {
        /// Length required by the target type.
        expected: usize,
        /// Length of the source buffer.
        actual: usize,
    },

    /// Required capacity exceeds `usize::MAX` or the allocator refused it.
    #[error("capacity overflow")]
    CapacityOverflow,
}
