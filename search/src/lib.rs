//! Bisect Search: deterministic bisection search with auditable probe trace.
//!
//! This crate provides the search layer of the workspace. It depends only
//! on `bisect_kernel` — it does NOT depend on `bisect_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! bisect_kernel  ←  bisect_search  ←  bisect_harness
//! (runs, windows)    (engines, trace)    (datasets, runner)
//! ```
//!
//! # Key types
//!
//! - [`engine::SearchReportV1`] — outcome plus complete probe trace
//! - [`engine::StrategyV1`] — iterative or recursive control flow
//! - [`trace::ProbeTraceV1`] — append-only probe audit log
//! - [`policy::ProbePolicyV1`] — probe budget configuration
//! - [`linear::linear_scan`] — the O(n) membership baseline

#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod linear;
pub mod policy;
pub mod trace;
