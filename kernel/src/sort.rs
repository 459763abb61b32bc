//! In-place selection sort.
//!
//! For each position `i`, the minimum of the unsorted suffix `slice[i..]` is
//! selected and swapped into place. O(n²) comparisons, at most `n - 1` swaps.
//! Not stable: a swap can carry an element past equal elements.

/// Index of the first minimum element, or `None` for an empty slice.
///
/// Ties resolve to the lowest index (strict `<` comparison).
#[must_use]
pub fn min_index<T: Ord>(slice: &[T]) -> Option<usize> {
    if slice.is_empty() {
        return None;
    }
    let mut best = 0;
    for (i, item) in slice.iter().enumerate().skip(1) {
        if *item < slice[best] {
            best = i;
        }
    }
    Some(best)
}

/// Sort `slice` ascending in place by repeated minimum selection.
///
/// Slices of length 0 or 1 are left untouched.
pub fn selection_sort<T: Ord>(slice: &mut [T]) {
    let len = slice.len();
    if len < 2 {
        return;
    }
    for i in 0..len - 1 {
        // The suffix is non-empty, so a minimum always exists.
        if let Some(offset) = min_index(&slice[i..]) {
            if offset != 0 {
                slice.swap(i, i + offset);
            }
        }
    }
}
