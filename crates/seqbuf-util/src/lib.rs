// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte helpers for hex rendering, hex parsing and constant-time comparison.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise.
/// The comparison time depends only on the length of the inputs, not on
/// where the first difference occurs.
///
/// # Example
///
/// ```
/// use seqbuf_util::constant_time_eq;
///
/// let a = [1, 2, 3, 4];
/// let b = [1, 2, 3, 4];
/// let c = [1, 2, 3, 5];
///
/// assert!(constant_time_eq(&a, &b));
/// assert!(!constant_time_eq(&a, &c));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[inline]
fn hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parses a hexadecimal string into bytes.
///
/// Returns `None` if the string has odd length or contains a character
/// outside `0-9`, `a-f`, `A-F`.
///
/// # Example
///
/// ```
/// use seqbuf_util::try_hex_to_bytes;
///
/// assert_eq!(try_hex_to_bytes("deadbeef"), Some(vec![0xde, 0xad, 0xbe, 0xef]));
/// assert_eq!(try_hex_to_bytes("abc"), None);
/// ```
pub fn try_hex_to_bytes(hex: &str) -> Option<Vec<u8>> {
    let raw = hex.as_bytes();

    if raw.len() % 2 != 0 {
        return None;
    }

    let mut out = Vec::with_capacity(raw.len() / 2);

    for pair in raw.chunks_exact(2) {
        let hi = hex_nibble(pair[0])?;
        let lo = hex_nibble(pair[1])?;
        out.push((hi << 4) | lo);
    }

    Some(out)
}

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
/// Intended for test vectors; use [`try_hex_to_bytes`] for untrusted input.
///
/// # Example
///
/// ```
/// use seqbuf_util::hex_to_bytes;
///
/// let bytes = hex_to_bytes("deadbeef");
/// assert_eq!(bytes, vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
#[inline]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    match try_hex_to_bytes(hex) {
        Some(bytes) => bytes,
        None => panic!("hex_to_bytes: invalid hex string {hex:?}"),
    }
}

/// Appends the lowercase hex rendering of `bytes` to `out`.
pub fn write_hex(out: &mut String, bytes: &[u8]) {
    out.reserve(bytes.len() * 2);

    for byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }
}

/// Renders `bytes` as a lowercase hex string without prefix.
///
/// ```
/// use seqbuf_util::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0x00, 0xab, 0xff]), "00abff");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut out = String::new();
    write_hex(&mut out, bytes);
    out
}
