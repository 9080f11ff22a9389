// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Standard trait impls for `SequenceBuffer`.
//!
//! Equality, ordering and hashing look only at the live elements, never at
//! capacity.

use alloc::vec::Vec;
use core::borrow::{Borrow, BorrowMut};
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};

use crate::sequence_buffer::SequenceBuffer;

impl<T: Clone> Clone for SequenceBuffer<T> {
    /// Deep copy into a fresh allocation with capacity equal to `len`.
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for SequenceBuffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SequenceBuffer")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<T: Hash> Hash for SequenceBuffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, U> PartialEq<SequenceBuffer<U>> for SequenceBuffer<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &SequenceBuffer<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SequenceBuffer<T> {}

impl<T, U> PartialEq<[U]> for SequenceBuffer<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for SequenceBuffer<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for SequenceBuffer<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T, U> PartialEq<Vec<U>> for SequenceBuffer<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd> PartialOrd for SequenceBuffer<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SequenceBuffer<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T> Deref for SequenceBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for SequenceBuffer<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SequenceBuffer<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SequenceBuffer<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SequenceBuffer<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SequenceBuffer<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> From<Vec<T>> for SequenceBuffer<T> {
    /// Adopts the vector's elements without copying; logical capacity is `vec.len()`.
    fn from(vec: Vec<T>) -> Self {
        Self::from_vec_exact(vec)
    }
}

impl<T: Clone> From<&[T]> for SequenceBuffer<T> {
    fn from(slice: &[T]) -> Self {
        Self::from_slice(slice)
    }
}

impl<T, const N: usize> From<[T; N]> for SequenceBuffer<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_vec_exact(Vec::from(array))
    }
}

impl<T> From<SequenceBuffer<T>> for Vec<T> {
    fn from(buf: SequenceBuffer<T>) -> Self {
        buf.into_vec()
    }
}

impl<T> FromIterator<T> for SequenceBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_exact(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for SequenceBuffer<T> {
    /// Pushes every item, reserving the iterator's lower size bound up front.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);

        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SequenceBuffer<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        <Self as Extend<T>>::extend(self, iter.into_iter().copied());
    }
}

impl<T> IntoIterator for SequenceBuffer<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SequenceBuffer<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SequenceBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
