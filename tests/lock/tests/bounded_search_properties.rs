//! Bounded search property locks, checked exhaustively over small domains.
//!
//! - Present targets resolve to a matching index.
//! - Absent targets (including out-of-range ones) resolve to `None`.
//! - Comparisons never exceed `probe_budget(len)`.
//! - Traced and untraced searches agree, and repeated calls agree.
//! - Slices of length `usize::MAX` bisect without index overflow.

use std::cmp::Ordering;
use std::ptr::NonNull;

use lock_tests::ascending_sequences;
use primer_search::bounded::{probe_budget, search, search_checked};
use primer_search::trace::search_traced;

#[test]
fn present_targets_resolve_to_matching_index() {
    for seq in ascending_sequences(6, 4) {
        for target in &seq {
            let i = search(&seq, target)
                .unwrap_or_else(|| panic!("{target} missing from {seq:?}"));
            assert_eq!(seq[i], *target, "seq={seq:?}");
        }
    }
}

#[test]
fn absent_targets_resolve_to_none() {
    for seq in ascending_sequences(6, 4) {
        for target in -1..=4 {
            if !seq.contains(&target) {
                assert_eq!(search(&seq, &target), None, "seq={seq:?} target={target}");
            }
        }
    }
}

#[test]
fn comparisons_stay_within_budget() {
    for seq in ascending_sequences(6, 4) {
        let budget = probe_budget(seq.len()) as usize;
        for target in -1..=4 {
            let traced = search_traced(&seq, &target);
            assert!(
                traced.trace.probe_count() <= budget,
                "seq={seq:?} target={target}: {} probes > {budget}",
                traced.trace.probe_count()
            );
        }
    }
}

#[test]
fn traced_and_untraced_agree() {
    for seq in ascending_sequences(6, 4) {
        for target in -1..=4 {
            assert_eq!(
                search_traced(&seq, &target).outcome,
                search(&seq, &target),
                "seq={seq:?} target={target}"
            );
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    let seq: Vec<i64> = (0..257).map(|i| i * 5 - 600).collect();
    for target in [-600, -1, 0, 5, 680, 681, 10_000] {
        let first = search_traced(&seq, &target);
        for run in 1..=10 {
            let again = search_traced(&seq, &target);
            assert_eq!(again, first, "run {run}: target {target}");
            assert_eq!(search(&seq, &target), first.outcome, "run {run}");
        }
    }
}

#[test]
fn checked_search_agrees_on_sorted_input() {
    for seq in ascending_sequences(5, 3) {
        for target in -1..=3 {
            assert_eq!(search_checked(&seq, &target), Ok(search(&seq, &target)));
        }
    }
}

#[test]
fn singleton_contract() {
    for v in [i64::MIN, -1, 0, 1, i64::MAX] {
        assert_eq!(search(&[v], &v), Some(0));
        let other = if v == i64::MAX { v - 1 } else { v + 1 };
        assert_eq!(search(&[v], &other), None);
    }
}

/// Zero-sized element that sorts below every target.
#[derive(Debug, PartialEq, Eq)]
struct AlwaysLess;

impl PartialOrd for AlwaysLess {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AlwaysLess {
    fn cmp(&self, _other: &Self) -> Ordering {
        Ordering::Less
    }
}

/// Zero-sized element that sorts above every target.
#[derive(Debug, PartialEq, Eq)]
struct AlwaysGreater;

impl PartialOrd for AlwaysGreater {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AlwaysGreater {
    fn cmp(&self, _other: &Self) -> Ordering {
        Ordering::Greater
    }
}

/// A slice of `usize::MAX` zero-sized elements, without allocating.
fn max_len_slice<T>() -> &'static [T] {
    assert_eq!(std::mem::size_of::<T>(), 0, "only zero-sized elements");
    // SAFETY: `T` is zero-sized, so any non-null aligned pointer is valid for
    // reads of any length and the slice occupies zero bytes.
    unsafe { std::slice::from_raw_parts(NonNull::<T>::dangling().as_ptr(), usize::MAX) }
}

#[test]
fn max_length_slice_walks_right_without_overflow() {
    let huge = max_len_slice::<AlwaysLess>();
    assert_eq!(search(huge, &AlwaysLess), None);

    let traced = search_traced(huge, &AlwaysLess);
    assert_eq!(traced.outcome, None);
    assert!(traced.trace.probe_count() <= probe_budget(usize::MAX) as usize);
    let last = traced.trace.probes.last().expect("non-empty slice probes");
    assert_eq!(last.high, usize::MAX - 1);
    assert_eq!(last.mid, usize::MAX - 1);
    for p in &traced.trace.probes {
        assert_eq!(p.mid, p.low + (p.high - p.low) / 2);
    }
}

#[test]
fn max_length_slice_walks_left_without_underflow() {
    let huge = max_len_slice::<AlwaysGreater>();
    assert_eq!(search(huge, &AlwaysGreater), None);

    let traced = search_traced(huge, &AlwaysGreater);
    assert_eq!(traced.outcome, None);
    assert!(traced.trace.probe_count() <= probe_budget(usize::MAX) as usize);
    let last = traced.trace.probes.last().expect("non-empty slice probes");
    assert_eq!(last.mid, 0);
}
