//! Ascending-order checks over borrowed slices.
//!
//! "Ascending" here means non-decreasing: each element is less than or equal
//! to its successor. Empty and single-element slices are ascending.

/// Index of the first element that is smaller than its predecessor.
///
/// Returns `None` when the slice is ascending. The returned index is always
/// `>= 1`, since the first element has no predecessor.
#[must_use]
pub fn first_descent<T: Ord>(slice: &[T]) -> Option<usize> {
    slice
        .windows(2)
        .position(|pair| pair[1] < pair[0])
        .map(|i| i + 1)
}

/// Whether `slice` is sorted in non-decreasing order.
#[must_use]
pub fn is_ascending<T: Ord>(slice: &[T]) -> bool {
    first_descent(slice).is_none()
}
