// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use seqbuf_test_utils::{apply_permutation, index_permutations};

use super::utils::{DropCounter, counting};
use crate::{SequenceBuffer, SequenceBufferError};

// =============================================================================
// new()
// =============================================================================

#[test]
fn test_new() {
    let buf: SequenceBuffer<u8> = SequenceBuffer::new();

    assert_eq!(buf.len(), 0);
    assert_eq!(buf.capacity(), 0);
    assert!(buf.is_empty());
}

#[test]
fn test_default_equals_new() {
    let buf: SequenceBuffer<u8> = SequenceBuffer::default();

    assert_eq!(buf.capacity(), 0);
    assert_eq!(buf, SequenceBuffer::<u8>::new());
}

// =============================================================================
// with_capacity()
// =============================================================================

#[test]
fn test_with_capacity() {
    let buf: SequenceBuffer<u8> = SequenceBuffer::with_capacity(10);

    assert_eq!(buf.len(), 0);
    assert_eq!(buf.capacity(), 10);
}

#[test]
fn test_with_capacity_zero() {
    let buf: SequenceBuffer<u64> = SequenceBuffer::with_capacity(0);

    assert_eq!(buf.capacity(), 0);
    assert!(buf.is_empty());
}

#[test]
fn test_with_capacity_does_not_grow_until_full() {
    let mut buf = SequenceBuffer::with_capacity(3);

    buf.push(1u8);
    buf.push(2);
    buf.push(3);
    assert_eq!(buf.capacity(), 3);

    // 3 → 6
    buf.push(4);
    assert_eq!(buf.capacity(), 6);
}

// =============================================================================
// from_slice(), from_raw_parts()
// =============================================================================

#[test]
fn test_from_slice_capacity_equals_len() {
    let buf = SequenceBuffer::from_slice(&[1u8, 2, 3, 4, 5]);

    assert_eq!(buf, [1, 2, 3, 4, 5]);
    assert_eq!(buf.capacity(), 5);
}

#[test]
fn test_from_raw_parts_deep_copies() {
    let mut source = vec![10u16, 20, 30];

    // SAFETY: `source` is a live Vec with 3 initialized elements.
    let buf = unsafe { SequenceBuffer::from_raw_parts(source.as_ptr(), source.len()) };

    assert_ne!(buf.as_ptr(), source.as_ptr());

    source[0] = 99;
    drop(source);

    assert_eq!(buf, [10, 20, 30]);
    assert_eq!(buf.capacity(), 3);
}

#[test]
fn test_from_raw_parts_null_empty() {
    // SAFETY: null is allowed with len == 0.
    let buf: SequenceBuffer<u8> = unsafe { SequenceBuffer::from_raw_parts(core::ptr::null(), 0) };

    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), 0);
}

// =============================================================================
// push(): growth policy
// =============================================================================

#[test]
fn test_push_capacity_doubles() {
    let mut buf = SequenceBuffer::new();
    let mut capacities = vec![buf.capacity()];

    for i in 0u8..9 {
        buf.push(i);
        capacities.push(buf.capacity());
    }

    assert_eq!(capacities, [0, 1, 2, 4, 4, 8, 8, 8, 8, 16]);
}

#[test]
fn test_push_capacity_is_next_power_of_two() {
    let mut buf = SequenceBuffer::new();

    for i in 1usize..=200 {
        buf.push(i);
        assert_eq!(buf.capacity(), i.next_power_of_two());
    }
}

#[test]
fn test_push_preserves_elements_across_reallocation() {
    let buf = counting(100);

    for (i, value) in buf.iter().enumerate() {
        assert_eq!(*value, i as u32);
    }
}

#[test]
fn test_push_reallocation_moves_without_dropping() {
    let drops = Cell::new(0);

    {
        let mut buf = SequenceBuffer::new();
        for id in 0..17 {
            buf.push(DropCounter::new(id, &drops));
        }

        // Five reallocations happened; none may drop a live element.
        assert_eq!(drops.get(), 0);
        assert_eq!(buf.capacity(), 32);
    }

    assert_eq!(drops.get(), 17);
}

#[test]
fn test_push_zero_sized() {
    let mut buf = SequenceBuffer::new();

    for _ in 0..5 {
        buf.push(());
    }

    assert_eq!(buf.len(), 5);
    assert_eq!(buf.capacity(), 8);
}

// =============================================================================
// reserve()
// =============================================================================

#[test]
fn test_reserve_follows_doubling() {
    let mut buf = SequenceBuffer::<u8>::new();

    buf.reserve(5);
    assert_eq!(buf.capacity(), 8);

    // Already sufficient.
    buf.reserve(8);
    assert_eq!(buf.capacity(), 8);

    buf.reserve(9);
    assert_eq!(buf.capacity(), 16);
}

#[test]
fn test_try_reserve_overflow() {
    let mut buf = SequenceBuffer::from_slice(&[1u8]);

    assert_eq!(
        buf.try_reserve(usize::MAX),
        Err(SequenceBufferError::CapacityOverflow)
    );
    assert_eq!(buf, [1]);
    assert_eq!(buf.capacity(), 1);
}

#[test]
fn test_try_reserve_allocator_refusal() {
    let mut buf = SequenceBuffer::<u64>::new();

    // Fits in usize but not in isize::MAX bytes.
    assert_eq!(
        buf.try_reserve(usize::MAX / 4),
        Err(SequenceBufferError::CapacityOverflow)
    );
    assert_eq!(buf.capacity(), 0);
}

#[test]
#[should_panic(expected = "capacity overflow")]
fn test_reserve_overflow_panics() {
    let mut buf = SequenceBuffer::from_slice(&[1u8]);
    buf.reserve(usize::MAX);
}

// =============================================================================
// get(), get_mut(), first(), last()
// =============================================================================

#[test]
fn test_get() {
    let buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);

    assert_eq!(buf.get(0), Some(&1));
    assert_eq!(buf.get(2), Some(&3));
    assert_eq!(buf.get(3), None);
    assert_eq!(buf.get(usize::MAX), None);
}

#[test]
fn test_get_on_empty() {
    let buf: SequenceBuffer<u8> = SequenceBuffer::new();

    assert_eq!(buf.get(0), None);
    assert_eq!(buf.first(), None);
    assert_eq!(buf.last(), None);
}

#[test]
fn test_get_past_len_within_capacity() {
    let mut buf = SequenceBuffer::with_capacity(8);
    buf.push(1u8);

    assert_eq!(buf.get(1), None);
    assert_eq!(buf.get(7), None);
}

#[test]
fn test_get_mut() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);

    if let Some(value) = buf.get_mut(1) {
        *value = 42;
    }

    assert_eq!(buf, [1, 42, 3]);
    assert!(buf.get_mut(3).is_none());
}

#[test]
fn test_first_last() {
    let buf = SequenceBuffer::from_slice(&[4u8, 5, 6]);

    assert_eq!(buf.first(), Some(&4));
    assert_eq!(buf.last(), Some(&6));
}

// =============================================================================
// set()
// =============================================================================

#[test]
fn test_set_returns_previous() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);

    assert_eq!(buf.set(1, 20), 2);
    assert_eq!(buf, [1, 20, 3]);
}

#[test]
fn test_try_set_out_of_bounds() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);

    assert_eq!(
        buf.try_set(3, 9),
        Err(SequenceBufferError::OutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(buf, [1, 2, 3]);
}

#[test]
#[should_panic(expected = "index 3 out of bounds for length 3")]
fn test_set_out_of_bounds_panics() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);
    buf.set(3, 9);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_set_on_empty_panics() {
    let mut buf: SequenceBuffer<u8> = SequenceBuffer::with_capacity(4);
    buf.set(0, 1);
}

// =============================================================================
// pop()
// =============================================================================

#[test]
fn test_pop() {
    let mut buf = counting(5);
    let capacity = buf.capacity();

    assert_eq!(buf.pop(), Some(4));
    assert_eq!(buf.pop(), Some(3));
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.capacity(), capacity);
}

#[test]
fn test_pop_on_empty() {
    let mut buf: SequenceBuffer<u8> = SequenceBuffer::new();

    assert_eq!(buf.pop(), None);
    assert_eq!(buf.len(), 0);
}

#[test]
fn test_pop_until_empty() {
    let mut buf = counting(3);

    assert_eq!(buf.pop(), Some(2));
    assert_eq!(buf.pop(), Some(1));
    assert_eq!(buf.pop(), Some(0));
    assert_eq!(buf.pop(), None);
    assert_eq!(buf.capacity(), 4);
}

// =============================================================================
// insert()
// =============================================================================

#[test]
fn test_insert_scenario() {
    let mut buf = SequenceBuffer::new();
    buf.push(5u32);
    buf.push(7);
    buf.push(9);
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.capacity(), 4);

    buf.insert(1, 11);
    assert_eq!(buf, [5, 11, 7, 9]);
    assert_eq!(buf.len(), 4);
    assert_eq!(buf.capacity(), 4);

    assert_eq!(buf.remove(0), 5);
    assert_eq!(buf, [11, 7, 9]);
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.capacity(), 4);
}

#[test]
fn test_insert_at_front_and_end() {
    let mut buf = SequenceBuffer::from_slice(&[2u8, 3]);

    buf.insert(0, 1);
    buf.insert(3, 4);

    assert_eq!(buf, [1, 2, 3, 4]);
}

#[test]
fn test_insert_into_empty() {
    let mut buf = SequenceBuffer::new();
    buf.insert(0, 7u8);

    assert_eq!(buf, [7]);
    assert_eq!(buf.capacity(), 1);
}

#[test]
fn test_insert_grows_when_full() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3, 4]);
    assert_eq!(buf.capacity(), 4);

    buf.insert(2, 9);

    assert_eq!(buf, [1, 2, 9, 3, 4]);
    assert_eq!(buf.capacity(), 8);
}

#[test]
fn test_try_insert_out_of_bounds_leaves_buffer() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2]);

    assert_eq!(
        buf.try_insert(3, 9),
        Err(SequenceBufferError::OutOfBounds { index: 3, len: 2 })
    );
    assert_eq!(buf, [1, 2]);
    assert_eq!(buf.capacity(), 2);
}

#[test]
#[should_panic(expected = "index 1 out of bounds for length 0")]
fn test_insert_out_of_bounds_panics() {
    let mut buf: SequenceBuffer<u8> = SequenceBuffer::new();
    buf.insert(1, 0);
}

// =============================================================================
// remove()
// =============================================================================

#[test]
fn test_remove_shifts_left() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3, 4]);

    assert_eq!(buf.remove(1), 2);
    assert_eq!(buf, [1, 3, 4]);
    assert_eq!(buf.remove(2), 4);
    assert_eq!(buf, [1, 3]);
    assert_eq!(buf.capacity(), 4);
}

#[test]
fn test_remove_last_element() {
    let mut buf = SequenceBuffer::from_slice(&[9u8]);

    assert_eq!(buf.remove(0), 9);
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), 1);
}

#[test]
fn test_try_remove_out_of_bounds() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2]);

    assert_eq!(
        buf.try_remove(2),
        Err(SequenceBufferError::OutOfBounds { index: 2, len: 2 })
    );
    assert_eq!(buf, [1, 2]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_remove_on_empty_panics() {
    let mut buf: SequenceBuffer<u8> = SequenceBuffer::new();
    buf.remove(0);
}

// =============================================================================
// swap()
// =============================================================================

#[test]
fn test_swap() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);

    buf.swap(0, 2);
    assert_eq!(buf, [3, 2, 1]);

    buf.swap(1, 1);
    assert_eq!(buf, [3, 2, 1]);
}

#[test]
fn test_try_swap_reports_first_bad_index() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);

    assert_eq!(
        buf.try_swap(0, 3),
        Err(SequenceBufferError::OutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(
        buf.try_swap(5, 3),
        Err(SequenceBufferError::OutOfBounds { index: 5, len: 3 })
    );
    assert_eq!(buf, [1, 2, 3]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_swap_out_of_bounds_panics() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);
    buf.swap(3, 0);
}

#[test]
fn test_swap_sequences_reach_every_permutation() {
    let original = [10u8, 20, 30, 40];

    for perm in index_permutations(original.len()) {
        let expected = apply_permutation(&original, &perm);
        let mut buf = SequenceBuffer::from_slice(&original);

        // Selection by swaps: place expected[i] at position i.
        for (i, target) in expected.iter().enumerate() {
            let j = (i..buf.len())
                .find(|&j| buf[j] == *target)
                .expect("target must be in the unsorted tail");
            buf.swap(i, j);
        }

        assert_eq!(buf, expected);
    }
}

// =============================================================================
// clear(), truncate()
// =============================================================================

#[test]
fn test_clear_keeps_capacity() {
    let mut buf = counting(9);
    assert_eq!(buf.capacity(), 16);

    buf.clear();

    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), 16);
    assert_eq!(buf.get(0), None);
}

#[test]
fn test_clear_drops_elements() {
    let drops = Cell::new(0);
    let mut buf = SequenceBuffer::new();
    for id in 0..3 {
        buf.push(DropCounter::new(id, &drops));
    }

    buf.clear();

    assert_eq!(drops.get(), 3);
    assert_eq!(buf.capacity(), 4);
}

#[test]
fn test_push_after_clear_reuses_capacity() {
    let mut buf = counting(8);
    buf.clear();

    for i in 0..8 {
        buf.push(i);
    }

    assert_eq!(buf.capacity(), 8);
}

#[test]
fn test_truncate() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3, 4]);

    buf.truncate(10);
    assert_eq!(buf.len(), 4);

    buf.truncate(1);
    assert_eq!(buf, [1]);
    assert_eq!(buf.capacity(), 4);
}

// =============================================================================
// reverse(), fill()
// =============================================================================

#[test]
fn test_reverse() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3, 4, 5]);

    buf.reverse();
    assert_eq!(buf, [5, 4, 3, 2, 1]);

    buf.reverse();
    assert_eq!(buf, [1, 2, 3, 4, 5]);
}

#[test]
fn test_reverse_empty_and_single() {
    let mut empty: SequenceBuffer<u8> = SequenceBuffer::new();
    empty.reverse();
    assert!(empty.is_empty());

    let mut single = SequenceBuffer::from_slice(&[1u8]);
    single.reverse();
    assert_eq!(single, [1]);
}

#[test]
fn test_fill_only_touches_live_elements() {
    let mut buf = SequenceBuffer::with_capacity(8);
    buf.push(1u8);
    buf.push(2);

    buf.fill(7);

    assert_eq!(buf, [7, 7]);
    assert_eq!(buf.capacity(), 8);
}

#[test]
fn test_fill_clones_value() {
    let mut buf = SequenceBuffer::from_slice(&[String::from("a"), String::from("b")]);

    buf.fill(String::from("z"));

    assert_eq!(buf, ["z", "z"]);
}

// =============================================================================
// resize()
// =============================================================================

#[test]
fn test_resize_grow_within_capacity() {
    let mut buf = SequenceBuffer::with_capacity(8);
    buf.push(1u8);

    buf.resize(4, 0);

    assert_eq!(buf, [1, 0, 0, 0]);
    assert_eq!(buf.capacity(), 8);
}

#[test]
fn test_resize_grow_beyond_capacity_doubles() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);

    buf.resize(5, 9);
    assert_eq!(buf, [1, 2, 3, 9, 9]);
    assert_eq!(buf.capacity(), 6);

    buf.resize(13, 0);
    assert_eq!(buf.len(), 13);
    assert_eq!(buf.capacity(), 24);
}

#[test]
fn test_resize_shrink_keeps_capacity() {
    let mut buf = counting(6);
    assert_eq!(buf.capacity(), 8);

    buf.resize(2, 0);

    assert_eq!(buf, [0, 1]);
    assert_eq!(buf.capacity(), 8);
}

#[test]
fn test_resize_shrink_then_grow_uses_default() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3, 4]);

    buf.resize(1, 0);
    buf.resize(4, 5);

    // Stale values beyond the old length must not reappear.
    assert_eq!(buf, [1, 5, 5, 5]);
}

#[test]
fn test_resize_same_len_is_noop() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2]);

    buf.resize(2, 9);

    assert_eq!(buf, [1, 2]);
    assert_eq!(buf.capacity(), 2);
}

// =============================================================================
// contains()
// =============================================================================

#[test]
fn test_contains() {
    let buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);

    assert!(buf.contains(&2));
    assert!(!buf.contains(&4));
}

#[test]
fn test_contains_ignores_stale_slots() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);
    buf.truncate(1);

    assert!(!buf.contains(&3));
}

// =============================================================================
// sort(), is_sorted()
// =============================================================================

#[test]
fn test_sort() {
    let mut buf = SequenceBuffer::from_slice(&[5u8, 1, 4, 2, 3]);

    assert!(!buf.is_sorted());
    buf.sort();

    assert_eq!(buf, [1, 2, 3, 4, 5]);
    assert!(buf.is_sorted());
}

#[test]
fn test_sort_is_idempotent() {
    let mut buf = SequenceBuffer::from_slice(&[3u8, 3, 1, 2, 1]);

    buf.sort();
    let once = buf.clone();
    buf.sort();

    assert_eq!(buf, once);
}

#[test]
fn test_sort_every_permutation() {
    let sorted = [1u8, 2, 3, 4, 5];

    for perm in index_permutations(sorted.len()) {
        let mut buf = SequenceBuffer::from(apply_permutation(&sorted, &perm));
        buf.sort();
        assert_eq!(buf, sorted);
    }
}

#[test]
fn test_is_sorted_edge_cases() {
    assert!(SequenceBuffer::<u8>::new().is_sorted());
    assert!(SequenceBuffer::from_slice(&[1u8]).is_sorted());
    assert!(SequenceBuffer::from_slice(&[1u8, 1, 1]).is_sorted());
    assert!(!SequenceBuffer::from_slice(&[2u8, 1]).is_sorted());
}

// =============================================================================
// as_slice(), as_mut_slice(), iter(), into_vec()
// =============================================================================

#[test]
fn test_as_mut_slice() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);

    buf.as_mut_slice()[1] = 42;

    assert_eq!(buf.as_slice(), &[1, 42, 3]);
}

#[test]
fn test_iter_mut() {
    let mut buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);

    for value in buf.iter_mut() {
        *value *= 2;
    }

    assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [2, 4, 6]);
}

#[test]
fn test_into_vec() {
    let buf = SequenceBuffer::from_slice(&[1u8, 2, 3]);

    assert_eq!(buf.into_vec(), vec![1, 2, 3]);
}

#[test]
fn test_drop_releases_all_elements() {
    let drops = Cell::new(0);

    {
        let mut buf = SequenceBuffer::with_capacity(10);
        for id in 0..4 {
            buf.push(DropCounter::new(id, &drops));
        }
        let removed = buf.remove(1);
        assert_eq!(removed.id, 1);
    }

    assert_eq!(drops.get(), 4);
}
