//! `BinarySearchDemo`: looks up a list of targets in an ascending sequence.
//!
//! Prints one line per target: the found index, or `-1` when the target is
//! absent. Defaults reproduce the classic walkthrough: sequence `[1..=6]`,
//! targets `3, 1, 6, 7` print `2, 0, 5, -1`.

use primer_kernel::order::first_descent;
use primer_search::trace::search_traced;

use crate::contract::{DemoError, DemoOutputV1, DemoV1};

/// Printed in place of an index when the target is absent.
pub const ABSENT_MARKER: i64 = -1;

/// Binary search walkthrough over a fixed sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinarySearchDemo {
    pub sequence: Vec<i64>,
    pub targets: Vec<i64>,
}

impl Default for BinarySearchDemo {
    fn default() -> Self {
        Self {
            sequence: vec![1, 2, 3, 4, 5, 6],
            targets: vec![3, 1, 6, 7],
        }
    }
}

impl DemoV1 for BinarySearchDemo {
    #[allow(clippy::unnecessary_literal_bound)]
    fn demo_id(&self) -> &str {
        "binary_search"
    }

    fn run(&self) -> Result<DemoOutputV1, DemoError> {
        if let Some(position) = first_descent(&self.sequence) {
            return Err(DemoError::UnsortedSequence { position });
        }

        let mut lines = Vec::with_capacity(self.targets.len());
        let mut records = Vec::with_capacity(self.targets.len());
        for target in &self.targets {
            let traced = search_traced(&self.sequence, target);
            let digest = traced
                .trace
                .digest()
                .map_err(|e| DemoError::TraceFailed {
                    detail: e.to_string(),
                })?;

            let printed = match traced.outcome {
                Some(i) => i.to_string(),
                None => ABSENT_MARKER.to_string(),
            };
            lines.push(printed);
            records.push(serde_json::json!({
                "index": traced.outcome,
                "probes": traced.trace.probe_count(),
                "target": target,
                "trace_digest": digest.as_str(),
            }));
        }

        Ok(DemoOutputV1 { lines, records })
    }
}
