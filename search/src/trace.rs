//! `ProbeTraceV1`: the recorded bisection trajectory.
//!
//! The trace is produced by the same loop as [`crate::bounded::search`], so a
//! traced call always returns the same outcome as an untraced one. The
//! ordered probe list is the normative surface; the digest commits to it
//! together with the sequence length.

use std::cmp::Ordering;

use primer_kernel::proof::canon::{canonical_json_bytes, CanonError};
use primer_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::bounded::{bisect, Probe};

/// Domain for probe trace digests.
pub const DOMAIN_PROBE_TRACE: HashDomain = HashDomain::ProbeTrace;

/// How the midpoint element compared against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOrderingV1 {
    /// Midpoint element is smaller; the interval moves right.
    Less,
    /// Match found.
    Equal,
    /// Midpoint element is larger; the interval moves left.
    Greater,
}

impl ProbeOrderingV1 {
    /// Lowercase name used in the canonical JSON form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Less => "less",
            Self::Equal => "equal",
            Self::Greater => "greater",
        }
    }
}

impl From<Ordering> for ProbeOrderingV1 {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

/// A single recorded comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeV1 {
    /// Zero-based position in the trace.
    pub order: u32,
    /// Interval bounds (inclusive) at the time of the probe.
    pub low: usize,
    pub high: usize,
    /// `low + (high - low) / 2`.
    pub mid: usize,
    pub ordering: ProbeOrderingV1,
}

/// The complete trajectory of one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTraceV1 {
    pub sequence_len: usize,
    pub probes: Vec<ProbeV1>,
}

impl ProbeTraceV1 {
    /// Number of comparisons performed.
    #[must_use]
    pub fn probe_count(&self) -> usize {
        self.probes.len()
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails (not expected: the
    /// trace contains only integers and strings).
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json())
    }

    /// Content hash of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from [`Self::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_PROBE_TRACE, &bytes))
    }

    /// JSON form used for canonical bytes and reports.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let probes: Vec<serde_json::Value> = self
            .probes
            .iter()
            .map(|p| {
                serde_json::json!({
                    "high": p.high,
                    "low": p.low,
                    "mid": p.mid,
                    "order": p.order,
                    "ordering": p.ordering.as_str(),
                })
            })
            .collect();
        serde_json::json!({
            "probes": probes,
            "schema_version": "probe_trace.v1",
            "sequence_len": self.sequence_len,
        })
    }
}

/// Outcome plus trajectory of a traced search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedSearch {
    pub outcome: Option<usize>,
    pub trace: ProbeTraceV1,
}

/// Run [`crate::bounded::search`] and record every probe.
#[must_use]
pub fn search_traced<T: Ord>(sequence: &[T], target: &T) -> TracedSearch {
    let mut probes: Vec<ProbeV1> = Vec::new();
    let mut order: u32 = 0;
    let outcome = bisect(sequence, target, |probe: Probe| {
        probes.push(ProbeV1 {
            order,
            low: probe.low,
            high: probe.high,
            mid: probe.mid,
            ordering: probe.ordering.into(),
        });
        order += 1;
    });

    tracing::trace!(
        sequence_len = sequence.len(),
        probes = probes.len(),
        found = outcome.is_some(),
        "bisection finished"
    );

    TracedSearch {
        outcome,
        trace: ProbeTraceV1 {
            sequence_len: sequence.len(),
            probes,
        },
    }
}
