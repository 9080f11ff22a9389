// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use crate::error::SequenceBufferError;
use crate::raw_region::RawRegion;

pub(crate) const TRACE_TARGET: &str = "seqbuf::alloc";

/// Test behaviour for injecting failures in `SequenceBuffer` operations.
///
/// This is only available with the `test-utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
/// Clones always start with [`SequenceBufferBehaviour::None`].
///
/// # Example
///
/// ```rust
/// // test-utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use seqbuf_alloc::{SequenceBuffer, SequenceBufferBehaviour, SequenceBufferError};
///
///     #[test]
///     fn test_handles_reserve_failure() {
///         let mut buf = SequenceBuffer::<u8>::new();
///         buf.change_behaviour(SequenceBufferBehaviour::FailAtReserve);
///
///         assert_eq!(buf.try_reserve(1), Err(SequenceBufferError::CapacityOverflow));
///     }
/// }
/// ```
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequenceBufferBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every fallible reservation fails with `CapacityOverflow`, including
    /// the growth step of `try_insert`, `try_splice_with` and
    /// `try_splice_with_self`.
    FailAtReserve,
}

/// Growable, heap-backed sequence of `T`.
///
/// `SequenceBuffer` owns one contiguous allocation and tracks its logical
/// capacity explicitly. Whenever an insertion would exceed that capacity the
/// buffer reallocates to `max(1, capacity * 2)`, repeating until the new
/// length fits (0 → 1 → 2 → 4 → 8 ...). Capacity never shrinks: `clear`,
/// `pop`, `remove`, `truncate` and the splice family only move `len`.
///
/// Every operation producing a second buffer (clone, split, splice) hands
/// back an independently owned allocation.
///
/// Index misuse on `set`, `insert`, `remove`, `swap` and the range-based
/// operations panics; each of them has a `try_` form returning
/// [`SequenceBufferError`] instead. `get` and `pop` report absence with
/// `None`.
///
/// # Example
///
/// ```rust
/// use seqbuf_alloc::SequenceBuffer;
///
/// let mut buf = SequenceBuffer::new();
/// buf.push(5);
/// buf.push(7);
/// buf.push(9);
/// assert_eq!(buf.capacity(), 4);
///
/// buf.insert(1, 11);
/// assert_eq!(buf, [5, 11, 7, 9]);
///
/// assert_eq!(buf.remove(0), 5);
/// assert_eq!(buf, [11, 7, 9]);
/// assert_eq!(buf.capacity(), 4);
/// ```
pub struct SequenceBuffer<T> {
    // Allocation handle. `inner.len()` is the logical length and
    // `inner.capacity() >= capacity` at all times.
    inner: Vec<T>,
    capacity: usize,
    #[cfg(any(test, feature = "test-utils"))]
    behaviour: SequenceBufferBehaviour,
}

#[cold]
#[track_caller]
pub(crate) fn fault(err: SequenceBufferError) -> ! {
    panic!("SequenceBuffer: {err}")
}

#[inline]
pub(crate) fn reject(err: SequenceBufferError) -> SequenceBufferError {
    tracing::debug!(target: TRACE_TARGET, %err, "operation rejected");
    err
}

/// Capacity reached by doubling `current` until it holds `required` slots.
///
/// Doubling past `usize::MAX` settles on `required` itself.
#[inline]
pub(crate) fn doubled_capacity(current: usize, required: usize) -> usize {
    let mut capacity = current;

    while capacity < required {
        capacity = match capacity.checked_mul(2) {
            Some(0) => 1,
            Some(doubled) => doubled,
            None => required,
        };
    }

    capacity
}

impl<T> SequenceBuffer<T> {
    #[inline]
    pub(crate) fn from_parts(inner: Vec<T>, capacity: usize) -> Self {
        debug_assert!(inner.len() <= capacity);
        debug_assert!(inner.capacity() >= capacity);

        Self {
            inner,
            capacity,
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: SequenceBufferBehaviour::default(),
        }
    }

    /// Wraps a `Vec` whose logical capacity is its length.
    #[inline]
    pub(crate) fn from_vec_exact(inner: Vec<T>) -> Self {
        let capacity = inner.len();
        Self::from_parts(inner, capacity)
    }

    /// Creates a new empty `SequenceBuffer` with zero capacity.
    ///
    /// Does not allocate.
    pub const fn new() -> Self {
        Self {
            inner: Vec::new(),
            capacity: 0,
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: SequenceBufferBehaviour::None,
        }
    }

    /// Creates a new empty `SequenceBuffer` with capacity for exactly `capacity` elements.
    ///
    /// ```rust
    /// use seqbuf_alloc::SequenceBuffer;
    ///
    /// let buf: SequenceBuffer<u8> = SequenceBuffer::with_capacity(10);
    /// assert_eq!(buf.len(), 0);
    /// assert_eq!(buf.capacity(), 10);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(Vec::with_capacity(capacity), capacity)
    }

    /// Creates a buffer holding a deep copy of `slice`, with capacity equal to its length.
    pub fn from_slice(slice: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec_exact(slice.to_vec())
    }

    /// Creates a buffer holding a deep copy of the elements viewed by `region`.
    ///
    /// The returned buffer never aliases the region's memory.
    pub fn from_raw_region(region: RawRegion<'_, T>) -> Self
    where
        T: Clone,
    {
        Self::from_slice(region.as_slice())
    }

    /// Creates a buffer holding a deep copy of `len` elements starting at `ptr`.
    ///
    /// The source memory may be freed or reused as soon as this returns.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `len` initialized, properly aligned
    /// elements of `T` for the duration of the call. A null `ptr` is allowed
    /// only with `len == 0`.
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Self
    where
        T: Clone,
    {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from this function's contract.
        let region = unsafe { RawRegion::from_raw_parts(ptr, len) };
        Self::from_raw_region(region)
    }

    /// Returns the number of elements in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the buffer contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of element slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns an immutable slice of the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Returns a mutable slice of the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner
    }

    /// Returns a raw pointer to the buffer's storage.
    ///
    /// The pointer is invalidated by any operation that grows the buffer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.inner.as_ptr()
    }

    /// Returns a raw mutable pointer to the buffer's storage.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.inner.as_mut_ptr()
    }

    /// Returns a zero-copy, read-only view of the live elements.
    ///
    /// The view borrows `self`, so the buffer can be neither mutated nor
    /// moved while the view exists.
    #[inline]
    pub fn as_raw_region(&self) -> RawRegion<'_, T> {
        RawRegion::from_slice(&self.inner)
    }

    /// Consumes the buffer, returning its elements as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.inner
    }

    /// Changes the test behaviour for this buffer.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn change_behaviour(&mut self, behaviour: SequenceBufferBehaviour) {
        self.behaviour = behaviour;
    }

    // =========================================================================
    // Growth
    // =========================================================================

    /// Moves the live elements into a fresh allocation of `new_capacity` slots.
    #[cold]
    #[inline(never)]
    fn grow_to(&mut self, new_capacity: usize) {
        let mut fresh = Vec::with_capacity(new_capacity);
        self.relocate(&mut fresh, new_capacity);
    }

    #[cold]
    #[inline(never)]
    fn try_grow_to(&mut self, new_capacity: usize) -> Result<(), SequenceBufferError> {
        let mut fresh = Vec::new();
        fresh
            .try_reserve_exact(new_capacity)
            .map_err(|_| reject(SequenceBufferError::CapacityOverflow))?;

        self.relocate(&mut fresh, new_capacity);
        Ok(())
    }

    fn relocate(&mut self, fresh: &mut Vec<T>, new_capacity: usize) {
        tracing::trace!(
            target: TRACE_TARGET,
            old_capacity = self.capacity,
            new_capacity,
            len = self.len(),
            "reallocating"
        );

        // Moves [0, len) bitwise. After the swap `fresh` holds the old,
        // emptied allocation, released when the caller drops it.
        fresh.append(&mut self.inner);
        core::mem::swap(&mut self.inner, fresh);
        self.capacity = new_capacity;
    }

    #[inline]
    fn required_len(&self, additional: usize) -> Result<usize, SequenceBufferError> {
        self.len()
            .checked_add(additional)
            .ok_or_else(|| reject(SequenceBufferError::CapacityOverflow))
    }

    /// Ensures room for `additional` more elements using the doubling policy.
    #[inline(always)]
    #[track_caller]
    pub(crate) fn maybe_grow_for(&mut self, additional: usize) {
        let required = match self.required_len(additional) {
            Ok(required) => required,
            Err(err) => fault(err),
        };

        if required <= self.capacity {
            return;
        }

        self.grow_to(doubled_capacity(self.capacity, required));
    }

    /// Fallible form of [`maybe_grow_for`](Self::maybe_grow_for), used by the `try_` operations.
    #[inline]
    pub(crate) fn try_maybe_grow_for(
        &mut self,
        additional: usize,
    ) -> Result<(), SequenceBufferError> {
        self.try_reserve(additional)
    }

    /// Reserves room for at least `additional` more elements.
    ///
    /// Applies the same doubling policy as `push`, so after
    /// `reserve(n)` the capacity is the first value of the doubling sequence
    /// starting at the current capacity that holds `len + n`.
    ///
    /// # Panics
    ///
    /// Panics if the required length overflows `usize`.
    ///
    /// ```rust
    /// use seqbuf_alloc::SequenceBuffer;
    ///
    /// let mut buf = SequenceBuffer::<u8>::new();
    /// buf.reserve(5);
    /// assert_eq!(buf.capacity(), 8);
    /// ```
    #[track_caller]
    pub fn reserve(&mut self, additional: usize) {
        self.maybe_grow_for(additional);
    }

    /// Fallible form of [`reserve`](Self::reserve).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceBufferError::CapacityOverflow`] if the required
    /// length overflows `usize` or the allocator rejects the request.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), SequenceBufferError> {
        #[cfg(any(test, feature = "test-utils"))]
        if matches!(self.behaviour, SequenceBufferBehaviour::FailAtReserve) {
            return Err(reject(SequenceBufferError::CapacityOverflow));
        }

        let required = self.required_len(additional)?;

        if required <= self.capacity {
            return Ok(());
        }

        self.try_grow_to(doubled_capacity(self.capacity, required))
    }

    // =========================================================================
    // Index-based operations
    // =========================================================================

    #[inline]
    fn check_element(&self, index: usize) -> Result<(), SequenceBufferError> {
        if index >= self.len() {
            return Err(reject(SequenceBufferError::OutOfBounds {
                index,
                len: self.len(),
            }));
        }

        Ok(())
    }

    #[inline]
    pub(crate) fn check_range(&self, start: usize, end: usize) -> Result<(), SequenceBufferError> {
        if start > end || end > self.len() {
            return Err(reject(SequenceBufferError::InvalidRange {
                start,
                end,
                len: self.len(),
            }));
        }

        Ok(())
    }

    /// Returns a reference to the element at `index`, or `None` if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.inner.get_mut(index)
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.inner.first()
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.inner.last()
    }

    /// Overwrites the element at `index`, returning the previous value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn set(&mut self, index: usize, value: T) -> T {
        match self.try_set(index, value) {
            Ok(previous) => previous,
            Err(err) => fault(err),
        }
    }

    /// Fallible form of [`set`](Self::set).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceBufferError::OutOfBounds`] if `index >= len`.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, SequenceBufferError> {
        self.check_element(index)?;
        Ok(core::mem::replace(&mut self.inner[index], value))
    }

    /// Appends `value`, growing the allocation if it is full.
    ///
    /// ```rust
    /// use seqbuf_alloc::SequenceBuffer;
    ///
    /// let mut buf = SequenceBuffer::new();
    /// let mut seen = Vec::new();
    /// for i in 0u8..5 {
    ///     buf.push(i);
    ///     seen.push(buf.capacity());
    /// }
    /// assert_eq!(seen, [1, 2, 4, 4, 8]);
    /// ```
    #[track_caller]
    pub fn push(&mut self, value: T) {
        self.maybe_grow_for(1);
        self.inner.push(value);
    }

    /// Removes and returns the last element, or `None` if empty.
    ///
    /// Capacity is unchanged.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        if let Err(err) = self.try_insert(index, value) {
            fault(err);
        }
    }

    /// Fallible form of [`insert`](Self::insert).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceBufferError::OutOfBounds`] if `index > len`, or
    /// [`SequenceBufferError::CapacityOverflow`] if growing fails. The
    /// buffer is left untouched in both cases.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), SequenceBufferError> {
        if index > self.len() {
            return Err(reject(SequenceBufferError::OutOfBounds {
                index,
                len: self.len(),
            }));
        }

        self.try_maybe_grow_for(1)?;
        self.inner.insert(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting `[index + 1, len)` left.
    ///
    /// Capacity is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        match self.try_remove(index) {
            Ok(value) => value,
            Err(err) => fault(err),
        }
    }

    /// Fallible form of [`remove`](Self::remove).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceBufferError::OutOfBounds`] if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, SequenceBufferError> {
        self.check_element(index)?;
        Ok(self.inner.remove(index))
    }

    /// Exchanges the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= len`.
    #[track_caller]
    pub fn swap(&mut self, a: usize, b: usize) {
        if let Err(err) = self.try_swap(a, b) {
            fault(err);
        }
    }

    /// Fallible form of [`swap`](Self::swap).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceBufferError::OutOfBounds`] naming the first
    /// offending index.
    pub fn try_swap(&mut self, a: usize, b: usize) -> Result<(), SequenceBufferError> {
        self.check_element(a)?;
        self.check_element(b)?;
        self.inner.swap(a, b);
        Ok(())
    }

    /// Drops every element. Capacity is unchanged and nothing is deallocated.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Shortens the buffer to `new_len` elements, dropping the rest.
    ///
    /// No-op if `new_len >= len`. Capacity is unchanged.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        self.inner.truncate(new_len);
    }

    /// Reverses the order of the live elements in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.inner.reverse();
    }

    /// Overwrites every live element with a clone of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.inner.fill(value);
    }

    /// Resizes the buffer to `new_len`.
    ///
    /// Growing fills the new slots with clones of `value`, reallocating
    /// through the doubling policy when `new_len > capacity`. Shrinking only
    /// moves `len`; capacity is unchanged.
    ///
    /// ```rust
    /// use seqbuf_alloc::SequenceBuffer;
    ///
    /// let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);
    /// buf.resize(5, 0);
    /// assert_eq!(buf, [1, 2, 3, 0, 0]);
    /// assert_eq!(buf.capacity(), 6);
    ///
    /// buf.resize(1, 0);
    /// assert_eq!(buf, [1]);
    /// assert_eq!(buf.capacity(), 6);
    /// ```
    #[track_caller]
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        let len = self.len();

        if new_len <= len {
            self.inner.truncate(new_len);
            return;
        }

        self.maybe_grow_for(new_len - len);
        self.inner.resize(new_len, value);
    }

    /// Returns `true` if the buffer holds an element equal to `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.inner.contains(value)
    }

    /// Sorts the live elements in ascending order.
    ///
    /// The sort is stable, so sorting an already sorted buffer leaves it unchanged.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.inner.sort();
    }

    /// Returns `true` if every element is `<=` its successor.
    pub fn is_sorted(&self) -> bool
    where
        T: Ord,
    {
        self.inner.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Returns an iterator over the live elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Returns an iterator yielding mutable references to the live elements.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.inner.iter_mut()
    }

    #[inline]
    pub(crate) fn inner_mut(&mut self) -> &mut Vec<T> {
        &mut self.inner
    }
}

impl<T> Default for SequenceBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}
