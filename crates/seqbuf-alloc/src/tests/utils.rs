// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

/// Element that counts its drops, to catch leaks and double drops across reallocation.
#[derive(Debug)]
pub(crate) struct DropCounter<'a> {
    pub(crate) id: u32,
    drops: &'a Cell<usize>,
}

impl<'a> DropCounter<'a> {
    pub(crate) fn new(id: u32, drops: &'a Cell<usize>) -> Self {
        Self { id, drops }
    }
}

impl Clone for DropCounter<'_> {
    fn clone(&self) -> Self {
        Self::new(self.id, self.drops)
    }
}

impl PartialEq for DropCounter<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for DropCounter<'_> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Pushes `0..len` into a fresh buffer.
pub(crate) fn counting(len: u32) -> crate::SequenceBuffer<u32> {
    let mut buf = crate::SequenceBuffer::new();
    for i in 0..len {
        buf.push(i);
    }
    buf
}
