// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bulk operations: append, split and splice.
//!
//! Every buffer returned from here owns a fresh allocation whose capacity
//! equals its length.

use alloc::vec::Vec;

use crate::error::SequenceBufferError;
use crate::sequence_buffer::{SequenceBuffer, fault};

impl<T> SequenceBuffer<T> {
    /// Appends a deep copy of `other` to the end of the buffer.
    ///
    /// `other` is only read. To append the buffer to itself use
    /// [`append_self`](Self::append_self).
    ///
    /// ```rust
    /// use seqbuf_alloc::SequenceBuffer;
    ///
    /// let mut a = SequenceBuffer::from_slice(&[1u8, 2]);
    /// let b = SequenceBuffer::from_slice(&[3u8, 4, 5]);
    ///
    /// a.append(&b);
    /// assert_eq!(a, [1, 2, 3, 4, 5]);
    /// assert_eq!(b, [3, 4, 5]);
    /// ```
    #[track_caller]
    pub fn append(&mut self, other: &[T])
    where
        T: Clone,
    {
        self.maybe_grow_for(other.len());
        self.inner_mut().extend_from_slice(other);
    }

    /// Appends a copy of the buffer's own contents, doubling its length.
    ///
    /// The source length is captured before any reallocation happens.
    ///
    /// ```rust
    /// use seqbuf_alloc::SequenceBuffer;
    ///
    /// let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);
    /// buf.append_self();
    /// assert_eq!(buf, [1, 2, 3, 1, 2, 3]);
    /// ```
    #[track_caller]
    pub fn append_self(&mut self)
    where
        T: Clone,
    {
        let len = self.len();
        self.maybe_grow_for(len);
        self.inner_mut().extend_from_within(..len);
    }

    /// Returns independent deep copies of `[0, index)` and `[index, len)`.
    ///
    /// `self` is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn split_at(&self, index: usize) -> (Self, Self)
    where
        T: Clone,
    {
        match self.try_split_at(index) {
            Ok(halves) => halves,
            Err(err) => fault(err),
        }
    }

    /// Fallible form of [`split_at`](Self::split_at).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceBufferError::InvalidRange`] if `index > len`.
    pub fn try_split_at(&self, index: usize) -> Result<(Self, Self), SequenceBufferError>
    where
        T: Clone,
    {
        self.check_range(index, self.len())?;

        let (left, right) = self.as_slice().split_at(index);
        Ok((Self::from_slice(left), Self::from_slice(right)))
    }

    /// Splits the buffer in two at `index`.
    ///
    /// `self` keeps `[0, index)` with its capacity unchanged; the returned
    /// buffer holds `[index, len)` in a fresh allocation.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// ```rust
    /// use seqbuf_alloc::SequenceBuffer;
    ///
    /// let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3, 4]);
    /// let tail = buf.split_off(1);
    ///
    /// assert_eq!(buf, [1]);
    /// assert_eq!(buf.capacity(), 4);
    /// assert_eq!(tail, [2, 3, 4]);
    /// ```
    #[track_caller]
    pub fn split_off(&mut self, index: usize) -> Self {
        match self.try_split_off(index) {
            Ok(tail) => tail,
            Err(err) => fault(err),
        }
    }

    /// Fallible form of [`split_off`](Self::split_off).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceBufferError::InvalidRange`] if `index > len`.
    pub fn try_split_off(&mut self, index: usize) -> Result<Self, SequenceBufferError> {
        let len = self.len();
        self.check_range(index, len)?;

        Ok(self.take_range(index, len))
    }

    /// Removes `[start, end)` and returns it as an independent buffer.
    ///
    /// Elements after `end` shift left. Capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > len`.
    ///
    /// ```rust
    /// use seqbuf_alloc::SequenceBuffer;
    ///
    /// let mut buf = SequenceBuffer::from_slice(&[5u8, 7, 9, 11, 13]);
    /// let removed = buf.splice(1, 4);
    ///
    /// assert_eq!(removed, [7, 9, 11]);
    /// assert_eq!(buf, [5, 13]);
    /// ```
    #[track_caller]
    pub fn splice(&mut self, start: usize, end: usize) -> Self {
        match self.try_splice(start, end) {
            Ok(removed) => removed,
            Err(err) => fault(err),
        }
    }

    /// Fallible form of [`splice`](Self::splice).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceBufferError::InvalidRange`] if `start > end` or
    /// `end > len`. The buffer is left untouched.
    pub fn try_splice(&mut self, start: usize, end: usize) -> Result<Self, SequenceBufferError> {
        self.check_range(start, end)?;

        Ok(self.take_range(start, end))
    }

    /// Replaces `[start, end)` with a copy of `replacement`, returning the removed elements.
    ///
    /// The buffer grows through the doubling policy when the replacement is
    /// longer than the removed range; it never shrinks.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > len`.
    ///
    /// ```rust
    /// use seqbuf_alloc::SequenceBuffer;
    ///
    /// let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3, 4]);
    /// let removed = buf.splice_with(1, 3, &[9, 9, 9]);
    ///
    /// assert_eq!(removed, [2, 3]);
    /// assert_eq!(buf, [1, 9, 9, 9, 4]);
    /// ```
    #[track_caller]
    pub fn splice_with(&mut self, start: usize, end: usize, replacement: &[T]) -> Self
    where
        T: Clone,
    {
        match self.try_splice_with(start, end, replacement) {
            Ok(removed) => removed,
            Err(err) => fault(err),
        }
    }

    /// Fallible form of [`splice_with`](Self::splice_with).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceBufferError::InvalidRange`] if `start > end` or
    /// `end > len`, or [`SequenceBufferError::CapacityOverflow`] if growing
    /// for a longer replacement fails. The buffer is left untouched.
    pub fn try_splice_with(
        &mut self,
        start: usize,
        end: usize,
        replacement: &[T],
    ) -> Result<Self, SequenceBufferError>
    where
        T: Clone,
    {
        self.check_range(start, end)?;

        let removed_len = end - start;
        if replacement.len() > removed_len {
            self.try_maybe_grow_for(replacement.len() - removed_len)?;
        }

        // Capacity already covers the final length, so `Vec::splice` never reallocates.
        let removed: Vec<T> = self
            .inner_mut()
            .splice(start..end, replacement.iter().cloned())
            .collect();

        debug_assert!(self.len() <= self.capacity());

        Ok(Self::from_vec_exact(removed))
    }

    /// Replaces `[start, end)` with a copy of the buffer's contents as they were before the call.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > len`.
    ///
    /// ```rust
    /// use seqbuf_alloc::SequenceBuffer;
    ///
    /// let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);
    /// let removed = buf.splice_with_self(1, 2);
    ///
    /// assert_eq!(removed, [2]);
    /// assert_eq!(buf, [1, 1, 2, 3, 3]);
    /// ```
    #[track_caller]
    pub fn splice_with_self(&mut self, start: usize, end: usize) -> Self
    where
        T: Clone,
    {
        match self.try_splice_with_self(start, end) {
            Ok(removed) => removed,
            Err(err) => fault(err),
        }
    }

    /// Fallible form of [`splice_with_self`](Self::splice_with_self).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceBufferError::InvalidRange`] if `start > end` or
    /// `end > len`, or [`SequenceBufferError::CapacityOverflow`] if growing
    /// fails. The buffer is left untouched.
    pub fn try_splice_with_self(
        &mut self,
        start: usize,
        end: usize,
    ) -> Result<Self, SequenceBufferError>
    where
        T: Clone,
    {
        self.check_range(start, end)?;

        let snapshot = self.as_slice().to_vec();
        self.try_splice_with(start, end, &snapshot)
    }

    /// Moves `[start, end)` out into a new exact-capacity buffer. Range must be checked.
    fn take_range(&mut self, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= self.len());

        let taken: Vec<T> = self.inner_mut().drain(start..end).collect();
        Self::from_vec_exact(taken)
    }
}
