//! Dataset contract: the minimal trait a dataset must implement.
//!
//! Datasets provide domain data only — keys and the targets worth
//! probing. They may NOT run searches, compute digests, or enforce
//! agreement; that is the runner's job.
//!
//! # Contract
//!
//! - `keys` must be deterministic: same dataset, same keys, same order.
//! - `probe_targets` must be deterministic and should mix present and
//!   absent targets so every termination path is exercised.

/// A single target worth probing, with its expected membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeTargetV1 {
    /// The key to search for.
    pub target: i64,
    /// Whether the dataset contains the key.
    pub expect_found: bool,
}

/// Trait for datasets the runner can exercise.
pub trait DatasetV1 {
    /// Unique dataset identifier, stable across runs.
    fn dataset_id(&self) -> &str;

    /// The dataset's keys, strictly ascending.
    fn keys(&self) -> Vec<i64>;

    /// The targets to probe, each with its expected membership.
    fn probe_targets(&self) -> Vec<ProbeTargetV1>;
}
