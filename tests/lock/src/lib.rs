//! Shared helpers for lock tests.

/// Every non-decreasing sequence of length `0..=max_len` whose elements are
/// drawn from `0..alphabet`.
///
/// Exhaustive over a small domain: lengths up to 6 with 4 symbols yield
/// 210 sequences, enough to cover every bisection shape and duplicate run.
#[must_use]
pub fn ascending_sequences(max_len: usize, alphabet: i64) -> Vec<Vec<i64>> {
    let mut out = vec![Vec::new()];
    let mut frontier: Vec<Vec<i64>> = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for seq in &frontier {
            let floor = seq.last().copied().unwrap_or(0);
            for value in floor..alphabet {
                let mut extended = seq.clone();
                extended.push(value);
                next.push(extended);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_multiset_formula() {
        // Non-decreasing sequences of length k over n symbols: C(n + k - 1, k).
        // n = 4: k=0..=3 → 1 + 4 + 10 + 20.
        assert_eq!(ascending_sequences(3, 4).len(), 35);
    }

    #[test]
    fn all_sequences_are_ascending() {
        for seq in ascending_sequences(5, 3) {
            assert!(seq.windows(2).all(|w| w[0] <= w[1]), "{seq:?}");
        }
    }
}
