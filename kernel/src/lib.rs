//! Primer Kernel: ordering primitives, selection sort, and the canonical
//! proof surface shared by the search and harness crates.
//!
//! # Module Dependency Direction
//!
//! `order` ← `sort`, and `proof` stands alone.
//!
//! `order` and `sort` are pure slice routines with no allocation.
//! `proof` owns canonical JSON bytes and domain-separated hashing; nothing
//! else in the workspace hashes or canonicalizes on its own.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod order;
pub mod proof;
pub mod sort;
