//! Bisect Harness: dataset-level orchestration for the search engines.
//!
//! The harness runs a dataset's probe targets through both engines and
//! the linear baseline, enforces strategy agreement, and packages the
//! result as a canonical JSON report artifact.
//!
//! The harness does NOT implement search logic — it delegates to
//! `bisect_search`. Datasets provide domain data only; the harness owns
//! orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod casegen;
pub mod contract;
pub mod datasets;
pub mod runner;
