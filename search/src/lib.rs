//! Primer Search: bounded (binary) search over ascending slices.
//!
//! This crate depends only on `primer_kernel` — it does NOT depend on
//! `primer_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! primer_kernel  ←  primer_search  ←  primer_harness
//! (order, sort)     (bisection,        (demos, runner, CLI)
//!                    probe trace)
//! ```
//!
//! # Entry points
//!
//! - [`bounded::search`] — the bisection routine; `None` means absent
//! - [`bounded::search_checked`] — validates the ascending precondition first
//! - [`trace::search_traced`] — same trajectory, recorded as a [`trace::ProbeTraceV1`]
//! - [`bounded::probe_budget`] — comparison bound for a given length

#![forbid(unsafe_code)]

pub mod bounded;
pub mod error;
pub mod trace;
