//! Bisect Kernel: the deterministic data layer of the bisect workspace.
//!
//! # API Surface
//!
//! The kernel exposes the types every other crate builds on:
//!
//! - [`run::SortedRunV1`] -- a validated, strictly-ascending key run
//! - [`window::ProbeWindowV1`] -- the inclusive candidate subrange and its narrowing rules
//! - [`fingerprint::canonical_hash`] -- SHA-256 fingerprinting with domain separation
//! - [`canon::canonical_json_bytes`] -- the single canonical JSON serializer
//!
//! # Module Dependency Direction
//!
//! `error` ← `run`; `canon` and `fingerprint` depend on nothing internal;
//! `window` depends on nothing internal. One-way only. No cycles.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod error;
pub mod fingerprint;
pub mod run;
pub mod window;
