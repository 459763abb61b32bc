//! Proof module: canonical JSON bytes and domain-separated content hashing.
//!
//! `hash` depends on nothing internal; `canon` depends on nothing internal.
//! Callers produce bytes with `canon` and commit to them with `hash`.

pub mod canon;
pub mod hash;
