//! Harness runner: executes demos and packages their output as reports.
//!
//! # Pipeline
//!
//! ```text
//! demo.run() → lines + records
//!   → report JSON → canonical_json_bytes() → canonical_hash(DemoReport)
//! ```
//!
//! The runner uses only kernel proof APIs for canonicalization and hashing.

use primer_kernel::proof::canon::canonical_json_bytes;
use primer_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::contract::{DemoError, DemoV1};

/// Domain for demo report digests.
pub const DOMAIN_DEMO_REPORT: HashDomain = HashDomain::DemoReport;

/// Schema tag embedded in every report.
pub const REPORT_SCHEMA_VERSION: &str = "demo_report.v1";

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The demo itself failed.
    DemoFailed { demo_id: String, source: DemoError },
    /// Canonical JSON serialization failed.
    CanonFailed { demo_id: String, detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DemoFailed { demo_id, source } => write!(f, "demo {demo_id} failed: {source}"),
            Self::CanonFailed { demo_id, detail } => {
                write!(f, "report for {demo_id} is not canonicalizable: {detail}")
            }
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DemoFailed { source, .. } => Some(source),
            Self::CanonFailed { .. } => None,
        }
    }
}

/// A finished demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReportV1 {
    pub demo_id: String,
    /// Text output, one entry per line.
    pub lines: Vec<String>,
    /// Canonical JSON bytes of the full report.
    pub canonical_bytes: Vec<u8>,
    /// `canonical_hash(DOMAIN_DEMO_REPORT, canonical_bytes)`.
    pub digest: ContentHash,
}

/// Run a single demo and build its report.
///
/// # Errors
///
/// Returns [`RunError::DemoFailed`] if the demo rejects its inputs, or
/// [`RunError::CanonFailed`] if a record holds a non-integer number.
pub fn run_demo(demo: &dyn DemoV1) -> Result<DemoReportV1, RunError> {
    let demo_id = demo.demo_id().to_string();
    let _span = tracing::debug_span!("run_demo", demo_id = %demo_id).entered();

    let output = demo.run().map_err(|source| {
        tracing::warn!(%source, "demo rejected its inputs");
        RunError::DemoFailed {
            demo_id: demo_id.clone(),
            source,
        }
    })?;

    let report = serde_json::json!({
        "demo_id": demo_id,
        "lines": output.lines,
        "records": output.records,
        "schema_version": REPORT_SCHEMA_VERSION,
    });
    let canonical_bytes = canonical_json_bytes(&report).map_err(|e| RunError::CanonFailed {
        demo_id: demo_id.clone(),
        detail: e.to_string(),
    })?;
    let digest = canonical_hash(DOMAIN_DEMO_REPORT, &canonical_bytes);

    tracing::info!(
        lines = output.lines.len(),
        digest = digest.as_str(),
        "demo finished"
    );

    Ok(DemoReportV1 {
        demo_id,
        lines: output.lines,
        canonical_bytes,
        digest,
    })
}

/// Run demos in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first [`RunError`] encountered.
pub fn run_all(demos: &[Box<dyn DemoV1>]) -> Result<Vec<DemoReportV1>, RunError> {
    demos.iter().map(|demo| run_demo(demo.as_ref())).collect()
}
