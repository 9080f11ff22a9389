// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::marker::PhantomData;

/// Non-owning, read-only `(pointer, length)` view over memory owned elsewhere.
///
/// A `RawRegion` borrows its owner for `'a`: while it is alive the owner can
/// be neither mutated nor moved, so the pointer stays valid for reads of
/// `len` elements.
///
/// # Example
///
/// ```rust
/// use seqbuf_alloc::SequenceBuffer;
///
/// let buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);
/// let region = buf.as_raw_region();
///
/// assert_eq!(region.len(), 3);
/// assert_eq!(region.as_ptr(), buf.as_ptr());
/// assert_eq!(region.as_slice(), &[1, 2, 3]);
/// ```
pub struct RawRegion<'a, T> {
    ptr: *const T,
    len: usize,
    _owner: PhantomData<&'a [T]>,
}

impl<'a, T> RawRegion<'a, T> {
    /// Creates a region viewing `slice`.
    #[inline]
    pub fn from_slice(slice: &'a [T]) -> Self {
        Self {
            ptr: slice.as_ptr(),
            len: slice.len(),
            _owner: PhantomData,
        }
    }

    /// Creates a region from a raw pointer and an element count.
    ///
    /// A null `ptr` is accepted only together with `len == 0`.
    ///
    /// # Safety
    ///
    /// For the whole of `'a`, `ptr` must be valid for reads of `len`
    /// initialized, properly aligned elements of `T`, and the memory must not
    /// be mutated through any other handle.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Self {
        debug_assert!(len == 0 || !ptr.is_null(), "RawRegion: null pointer");

        Self {
            ptr,
            len,
            _owner: PhantomData,
        }
    }

    /// Returns the start pointer of the region.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }

    /// Returns the number of elements in the region.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the region holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the region as a slice with the owner's lifetime.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        if self.len == 0 {
            return &[];
        }

        // SAFETY: built either from a live slice borrowed for 'a, or through
        // `from_raw_parts`, whose contract guarantees `len` readable elements for 'a.
        unsafe { core::slice::from_raw_parts(self.ptr, self.len) }
    }
}

impl<T> Clone for RawRegion<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawRegion<'_, T> {}

impl<T> core::fmt::Debug for RawRegion<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawRegion")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}

impl<'a, T> From<&'a [T]> for RawRegion<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        Self::from_slice(slice)
    }
}
