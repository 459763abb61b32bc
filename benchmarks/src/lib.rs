//! Shared input builders for primer benchmark suites.
//!
//! Inputs are deterministic (no RNG) so runs are comparable across machines.

/// Ascending, strictly increasing sequence of even numbers: `0, 2, 4, ...`.
///
/// Every odd target is absent, every even target below `2 * len` is present.
#[must_use]
pub fn ascending_evens(len: usize) -> Vec<i64> {
    (0..len).map(|i| to_i64(i) * 2).collect()
}

/// Targets spread across the sequence range, alternating hits and misses.
#[must_use]
pub fn probe_targets(len: usize, count: usize) -> Vec<i64> {
    let span = to_i64(len.max(1)) * 2;
    (0..count)
        .map(|i| (to_i64(i) * 7919) % (span + 2) - 1)
        .collect()
}

/// A scrambled permutation of `0..len` (multiplicative hash, stable across runs).
#[must_use]
pub fn scrambled(len: usize) -> Vec<i64> {
    let n = to_i64(len.max(1));
    // 7919 is prime; coprime with n unless n is a multiple of it.
    let step = if n % 7919 == 0 { 1 } else { 7919 };
    (0..n).map(|i| (i * step) % n).take(len).collect()
}

fn to_i64(v: usize) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}
