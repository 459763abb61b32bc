//! Demo contract: the minimal trait a demonstration must implement.
//!
//! Demos provide inputs and call the library. Demos may NOT hash, serialize
//! reports, or log run summaries (those are runner concerns).

/// What a demo produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOutputV1 {
    /// Human-readable output, one entry per printed line.
    pub lines: Vec<String>,
    /// Structured per-step records for the JSON report. Integers and
    /// strings only, so the report stays canonicalizable.
    pub records: Vec<serde_json::Value>,
}

/// Typed failure for demo execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    /// The search demo was given a sequence that is not ascending.
    UnsortedSequence { position: usize },
    /// Trace serialization or hashing failed.
    TraceFailed { detail: String },
}

impl std::fmt::Display for DemoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsortedSequence { position } => write!(
                f,
                "search sequence must be ascending (element {position} breaks the order)"
            ),
            Self::TraceFailed { detail } => write!(f, "probe trace failed: {detail}"),
        }
    }
}

impl std::error::Error for DemoError {}

/// The contract a demo must implement to be run by the harness runner.
pub trait DemoV1 {
    /// Unique demo identifier (e.g., `"binary_search"`).
    fn demo_id(&self) -> &str;

    /// Run the demo against the library.
    ///
    /// # Errors
    ///
    /// Returns [`DemoError`] if the demo's inputs violate a precondition.
    fn run(&self) -> Result<DemoOutputV1, DemoError>;
}
