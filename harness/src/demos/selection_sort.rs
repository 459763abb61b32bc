//! `SelectionSortDemo`: sorts a fixed input and prints the result.
//!
//! Default input `[4 1 10 3 2 5 0]` prints `[0 1 2 3 4 5 10]`.

use primer_kernel::sort::selection_sort;

use super::render_slice;
use crate::contract::{DemoError, DemoOutputV1, DemoV1};

/// Selection sort walkthrough over a fixed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSortDemo {
    pub input: Vec<i64>,
}

impl Default for SelectionSortDemo {
    fn default() -> Self {
        Self {
            input: vec![4, 1, 10, 3, 2, 5, 0],
        }
    }
}

impl DemoV1 for SelectionSortDemo {
    #[allow(clippy::unnecessary_literal_bound)]
    fn demo_id(&self) -> &str {
        "selection_sort"
    }

    fn run(&self) -> Result<DemoOutputV1, DemoError> {
        let mut sorted = self.input.clone();
        selection_sort(&mut sorted);

        Ok(DemoOutputV1 {
            lines: vec![render_slice(&sorted)],
            records: vec![serde_json::json!({
                "input": self.input,
                "sorted": sorted,
            })],
        })
    }
}
