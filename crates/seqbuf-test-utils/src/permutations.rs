// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Returns every permutation of `0..n` in lexicographic order.
///
/// The output has `n!` entries, so keep `n` small (≤ 7).
///
/// ```
/// use seqbuf_test_utils::index_permutations;
///
/// assert_eq!(
///     index_permutations(3),
///     vec![
///         vec![0, 1, 2],
///         vec![0, 2, 1],
///         vec![1, 0, 2],
///         vec![1, 2, 0],
///         vec![2, 0, 1],
///         vec![2, 1, 0],
///     ]
/// );
/// ```
pub fn index_permutations(n: usize) -> Vec<Vec<usize>> {
    let mut current: Vec<usize> = (0..n).collect();
    let mut out = vec![current.clone()];

    // Narayana: next lexicographic permutation until the sequence is descending.
    loop {
        let Some(pivot) = (1..current.len())
            .rev()
            .find(|&i| current[i - 1] < current[i])
            .map(|i| i - 1)
        else {
            break;
        };

        let successor = (pivot + 1..current.len())
            .rev()
            .find(|&j| current[j] > current[pivot])
            .expect("a larger element exists right of the pivot");

        current.swap(pivot, successor);
        current[pivot + 1..].reverse();
        out.push(current.clone());
    }

    out
}

/// Reorders `items` so that position `i` holds the element previously at `perm[i]`.
///
/// # Panics
///
/// Panics if `perm.len() != items.len()` or `perm` is not a permutation.
pub fn apply_permutation<T: Clone>(items: &[T], perm: &[usize]) -> Vec<T> {
    assert_eq!(items.len(), perm.len(), "permutation length mismatch");

    let mut seen = vec![false; perm.len()];
    for &idx in perm {
        assert!(!seen[idx], "index {idx} repeated in permutation");
        seen[idx] = true;
    }

    perm.iter().map(|&idx| items[idx].clone()).collect()
}
