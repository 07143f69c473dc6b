//! Harness runner: orchestrates the search engines over a dataset.
//!
//! The runner uses ONLY search-crate APIs: both engines, the linear
//! baseline, and the trace artifacts. It enforces, fail-closed:
//!
//! - **strategy agreement** — the iterative and recursive engines must
//!   return identical reports for every target;
//! - **baseline agreement** — the linear scan must agree on membership
//!   and, on a hit, on the index;
//! - **dataset honesty** — the dataset's `expect_found` must match what
//!   the engines observed.
//!
//! Any violation aborts the dataset run with a typed error; a report is
//! only produced for a fully consistent run.

use std::fs;
use std::path::Path;

use bisect_kernel::canon::canonical_json_bytes;
use bisect_kernel::fingerprint::{canonical_hash, RunDigest, DOMAIN_DATASET_REPORT};
use bisect_kernel::run::SortedRunV1;
use bisect_search::engine::{search_iterative, search_recursive, SearchOutcomeV1};
use bisect_search::linear::linear_scan;
use bisect_search::policy::ProbePolicyV1;

use crate::contract::DatasetV1;

/// File name of the report artifact inside a report directory.
pub const REPORT_FILE: &str = "report.json";

/// File name of the digest sidecar inside a report directory.
pub const REPORT_DIGEST_FILE: &str = "report.digest";

/// Typed failure for a dataset run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// The dataset produced keys that violate the sorted-run invariant.
    InvalidDatasetKeys { detail: String },
    /// A search rejected the policy pre-flight.
    PolicyRejected { detail: String },
    /// The iterative and recursive engines disagreed on a target.
    StrategyDivergence { target: i64 },
    /// The linear baseline disagreed with the engines on a target.
    BaselineDisagreement { target: i64 },
    /// The dataset's `expect_found` did not match the observed outcome.
    MembershipMismatch { target: i64 },
    /// An artifact failed to encode.
    ReportEncode { detail: String },
    /// An artifact failed to reach disk.
    ReportIo { detail: String },
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDatasetKeys { detail } => {
                write!(f, "dataset keys violate run invariant: {detail}")
            }
            Self::PolicyRejected { detail } => write!(f, "policy rejected pre-flight: {detail}"),
            Self::StrategyDivergence { target } => {
                write!(f, "iterative and recursive engines diverged on target {target}")
            }
            Self::BaselineDisagreement { target } => {
                write!(f, "linear baseline disagreed with engines on target {target}")
            }
            Self::MembershipMismatch { target } => {
                write!(f, "dataset expectation wrong for target {target}")
            }
            Self::ReportEncode { detail } => write!(f, "report encode failure: {detail}"),
            Self::ReportIo { detail } => write!(f, "report io failure: {detail}"),
        }
    }
}

impl std::error::Error for HarnessError {}

/// Per-target record in a dataset report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReportV1 {
    /// The probed target.
    pub target: i64,
    /// Whether the engines found it.
    pub found: bool,
    /// Index of the hit, if any.
    pub found_index: Option<usize>,
    /// Midpoint comparisons made (identical across both engines).
    pub probes: u32,
    /// Comparisons the linear baseline made for the same target.
    pub linear_comparisons: u64,
    /// Termination tag from the probe trace.
    pub termination: &'static str,
    /// Digest of the canonical probe trace.
    pub trace_digest: RunDigest,
}

/// Report for one dataset run: the normative comparison artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetReportV1 {
    /// The dataset identifier.
    pub dataset_id: String,
    /// Fingerprint of the run that was searched.
    pub run_fingerprint: RunDigest,
    /// The probe budget every search ran under.
    pub probe_budget: u32,
    /// One record per probe target, in dataset order.
    pub cases: Vec<CaseReportV1>,
}

impl DatasetReportV1 {
    /// Canonical JSON bytes of the report.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::ReportEncode`] if canonicalization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, HarnessError> {
        let cases: Vec<serde_json::Value> = self
            .cases
            .iter()
            .map(|c| {
                serde_json::json!({
                    "target": c.target,
                    "found": c.found,
                    "found_index": c.found_index,
                    "probes": c.probes,
                    "linear_comparisons": c.linear_comparisons,
                    "termination": c.termination,
                    "trace_digest": c.trace_digest.as_str(),
                })
            })
            .collect();
        let value = serde_json::json!({
            "dataset_id": self.dataset_id,
            "run_fingerprint": self.run_fingerprint.as_str(),
            "probe_budget": self.probe_budget,
            "cases": cases,
        });
        canonical_json_bytes(&value).map_err(|e| HarnessError::ReportEncode {
            detail: e.to_string(),
        })
    }

    /// Digest of the canonical report bytes under [`DOMAIN_DATASET_REPORT`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`DatasetReportV1::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<RunDigest, HarnessError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_DATASET_REPORT, &bytes))
    }

    /// Write `report.json` and its digest sidecar into `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::ReportEncode`] or [`HarnessError::ReportIo`].
    pub fn write_report_dir(&self, dir: &Path) -> Result<(), HarnessError> {
        let bytes = self.to_canonical_json_bytes()?;
        let digest = self.digest()?;
        let io_err = |e: std::io::Error| HarnessError::ReportIo {
            detail: e.to_string(),
        };
        fs::create_dir_all(dir).map_err(io_err)?;
        fs::write(dir.join(REPORT_FILE), &bytes).map_err(io_err)?;
        fs::write(dir.join(REPORT_DIGEST_FILE), format!("{}\n", digest.as_str()))
            .map_err(io_err)?;
        Ok(())
    }
}

/// Run both engines and the baseline over every probe target of a dataset.
///
/// # Errors
///
/// Fail-closed on any inconsistency; see [`HarnessError`].
pub fn run_dataset(
    dataset: &dyn DatasetV1,
    policy: &ProbePolicyV1,
) -> Result<DatasetReportV1, HarnessError> {
    let run =
        SortedRunV1::new(dataset.keys()).map_err(|e| HarnessError::InvalidDatasetKeys {
            detail: e.to_string(),
        })?;

    let mut cases = Vec::new();
    for probe in dataset.probe_targets() {
        let iterative = search_iterative(&run, probe.target, policy).map_err(|e| {
            HarnessError::PolicyRejected {
                detail: e.to_string(),
            }
        })?;
        let recursive = search_recursive(&run, probe.target, policy).map_err(|e| {
            HarnessError::PolicyRejected {
                detail: e.to_string(),
            }
        })?;
        if iterative != recursive {
            return Err(HarnessError::StrategyDivergence {
                target: probe.target,
            });
        }

        let baseline = linear_scan(&run, probe.target);
        let found_index = match iterative.outcome {
            SearchOutcomeV1::Found { index, .. } => Some(index),
            SearchOutcomeV1::NotFound { .. } => None,
        };
        if baseline.found_at != found_index {
            return Err(HarnessError::BaselineDisagreement {
                target: probe.target,
            });
        }
        if probe.expect_found != iterative.is_found() {
            return Err(HarnessError::MembershipMismatch {
                target: probe.target,
            });
        }

        let Some(termination) = iterative.trace.termination() else {
            return Err(HarnessError::ReportEncode {
                detail: "engine returned an unterminated trace".into(),
            });
        };
        let trace_digest = iterative.trace.digest().map_err(|e| {
            HarnessError::ReportEncode {
                detail: e.to_string(),
            }
        })?;

        cases.push(CaseReportV1 {
            target: probe.target,
            found: iterative.is_found(),
            found_index,
            probes: iterative.probes_used(),
            linear_comparisons: baseline.comparisons,
            termination: termination.tag(),
            trace_digest,
        });
    }

    Ok(DatasetReportV1 {
        dataset_id: dataset.dataset_id().to_string(),
        run_fingerprint: run.fingerprint(),
        probe_budget: policy.max_probes,
        cases,
    })
}
