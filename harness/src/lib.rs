//! Primer Harness: demonstration programs for the kernel and search crates.
//!
//! The harness is an external caller of the algorithms. It constructs
//! inputs, calls the library, and renders results as text lines plus a
//! canonical JSON report with a content digest.
//!
//! Demos do NOT implement searching or sorting themselves — they delegate to
//! `primer_search` and `primer_kernel`. The runner owns rendering and hashing.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod demos;
pub mod logging;
pub mod runner;
pub mod scenario;
