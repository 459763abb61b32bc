//! Bounded search: bisection over a closed index interval.
//!
//! The interval `[low, high]` starts as the whole slice and halves on every
//! probe. The midpoint is always `low + (high - low) / 2`; the naive
//! `(low + high) / 2` can overflow fixed-width indices.
//!
//! The routine never validates ordering. On unsorted input the result is
//! unspecified but the call still terminates without panicking.

use std::cmp::Ordering;

use primer_kernel::order::first_descent;

use crate::error::SearchError;

/// One midpoint comparison, as seen by the bisection loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Probe {
    pub low: usize,
    pub high: usize,
    pub mid: usize,
    /// `sequence[mid].cmp(target)`.
    pub ordering: Ordering,
}

/// The single bisection loop. `on_probe` observes each comparison in order.
pub(crate) fn bisect<T, F>(sequence: &[T], target: &T, mut on_probe: F) -> Option<usize>
where
    T: Ord,
    F: FnMut(Probe),
{
    if sequence.is_empty() {
        return None;
    }
    let mut low = 0;
    let mut high = sequence.len() - 1;
    while low <= high {
        let mid = low + (high - low) / 2;
        let ordering = sequence[mid].cmp(target);
        on_probe(Probe {
            low,
            high,
            mid,
            ordering,
        });
        match ordering {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                // high would drop below zero: the interval is empty.
                if mid == 0 {
                    return None;
                }
                high = mid - 1;
            }
        }
    }
    None
}

/// Find the index of `target` in the ascending slice `sequence`.
///
/// Returns `Some(i)` with `sequence[i] == *target`, or `None` when no element
/// equals `target`. With duplicates, which matching index is returned is
/// decided by the bisection path and is not otherwise specified.
///
/// At most [`probe_budget`]`(sequence.len())` comparisons, O(1) extra space.
///
/// # Examples
///
/// ```
/// use primer_search::bounded::search;
///
/// let s = [1, 2, 3, 4, 5, 6];
/// assert_eq!(search(&s, &3), Some(2));
/// assert_eq!(search(&s, &7), None);
/// ```
#[must_use]
pub fn search<T: Ord>(sequence: &[T], target: &T) -> Option<usize> {
    bisect(sequence, target, |_| {})
}

/// Like [`search`], but first verifies that `sequence` is ascending.
///
/// The check is O(n), so this is for callers that cannot vouch for their input.
///
/// # Errors
///
/// Returns [`SearchError::UnsortedInput`] naming the first out-of-order element.
pub fn search_checked<T: Ord>(sequence: &[T], target: &T) -> Result<Option<usize>, SearchError> {
    if let Some(position) = first_descent(sequence) {
        return Err(SearchError::UnsortedInput { position });
    }
    Ok(search(sequence, target))
}

/// Upper bound on comparisons for a slice of length `len`.
///
/// `0` for an empty slice, otherwise `floor(log2(len)) + 1`.
#[must_use]
pub fn probe_budget(len: usize) -> u32 {
    usize::BITS - len.leading_zeros()
}
