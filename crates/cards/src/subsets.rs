// Copyright (C) 2025 Showdown Developers
// SPDX-License-Identifier: Apache-2.0

//! Lexicographic k-subset iteration.

/// The largest subset size supported by [for_each_ksubset].
pub const MAX_K: usize = 7;

/// Returns the binomial coefficient for n choose k.
pub const fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    let mut result = 1;
    let mut i = 0;
    while i < k {
        // Exact at every step, result * (n - i) is divisible by (i + 1).
        result = result * (n - i) / (i + 1);
        i += 1;
    }

    result
}

/// Calls the `f` closure with the indices of each k-subset of `0..n`.
///
/// Subsets are visited in lexicographic order, for n = 4 and k = 2 the order
/// is `[0, 1]`, `[0, 2]`, `[0, 3]`, `[1, 2]`, `[1, 3]`, `[2, 3]`. Indices in
/// each subset are increasing.
///
/// Panics if k is not 1 <= k <= [MAX_K].
pub fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    assert!((1..=MAX_K).contains(&k), "1 <= k <= {MAX_K}");

    if k > n {
        return;
    }

    let mut c = [0usize; MAX_K];
    for (i, slot) in c.iter_mut().enumerate().take(k) {
        *slot = i;
    }

    loop {
        f(&c[..k]);

        // Find the rightmost index that can still move right.
        let Some(i) = (0..k).rev().find(|&i| c[i] < n - k + i) else {
            return;
        };

        c[i] += 1;
        for j in (i + 1)..k {
            c[j] = c[j - 1] + 1;
        }
    }
}
