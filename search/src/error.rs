//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. The search itself
//! cannot fail: a missing target is the ordinary `None` outcome.

/// Typed failure for pre-flight search validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The input is not ascending; `position` is the first element smaller
    /// than its predecessor.
    UnsortedInput { position: usize },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsortedInput { position } => {
                write!(
                    f,
                    "sequence is not ascending: element {position} is smaller than its predecessor"
                )
            }
        }
    }
}

impl std::error::Error for SearchError {}
