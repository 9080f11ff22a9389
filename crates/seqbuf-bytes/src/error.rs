// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for seqbuf-bytes.

use seqbuf_alloc::SequenceBufferError;
use thiserror::Error;

/// Errors raised while parsing or converting byte data.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ByteBufferError {
    /// A sequence-level fault (bounds, ranges, length mismatch).
    #[error("SequenceBufferError: {0}")]
    Sequence(#[from] SequenceBufferError),

    /// Hex input with odd length or a character outside `0-9a-fA-F`.
    #[error("invalid hex string")]
    InvalidHex,
}
