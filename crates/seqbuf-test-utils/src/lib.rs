// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for seqbuf crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod patterns;
mod permutations;

pub use patterns::{ascending_bytes, descending_bytes, word_bytes};
pub use permutations::{apply_permutation, index_permutations};
