// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Returns `len` bytes counting up from zero (wrapping at 256).
pub fn ascending_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

/// Returns `len` bytes counting down from `len - 1` (wrapping at 256).
pub fn descending_bytes(len: usize) -> Vec<u8> {
    (0..len).rev().map(|i| i as u8).collect()
}

/// Returns a distinct 32-byte pattern seeded by `seed`.
pub fn word_bytes(seed: u8) -> [u8; 32] {
    core::array::from_fn(|i| seed.wrapping_mul(31).wrapping_add(i as u8))
}
