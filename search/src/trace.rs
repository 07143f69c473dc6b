//! `ProbeTraceV1`: the append-only probe audit log.
//!
//! Every engine records one event per midpoint comparison and closes the
//! trace with exactly one termination reason. The trace — not the return
//! value — is the normative record of how a search ran: the canonical
//! JSON bytes are deterministic for a given input, and the digest binds
//! them under [`DOMAIN_PROBE_TRACE`].
//!
//! # Invariants
//!
//! - `probe_order` values are sequential from 0.
//! - Each event's window is contained in the previous event's window
//!   (equal only via the retained-probe narrowing).
//! - Termination is recorded exactly once, after the final event.

use bisect_kernel::canon::{canonical_json_bytes, CanonError};
use bisect_kernel::fingerprint::{canonical_hash, RunDigest, DOMAIN_PROBE_TRACE};
use bisect_kernel::window::ProbeWindowV1;

/// Verdict of a single midpoint comparison, from the probed key's side:
/// `KeyBelowTarget` means the probed key was less than the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeVerdictV1 {
    /// Probed key < target: the lower half and the probe are discarded.
    KeyBelowTarget,
    /// Probed key > target: the upper half beyond the probe is discarded.
    KeyAboveTarget,
    /// Probed key == target: the search terminates successfully.
    KeyMatched,
}

impl ProbeVerdictV1 {
    /// Stable string tag used in the canonical JSON artifact.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::KeyBelowTarget => "key_below_target",
            Self::KeyAboveTarget => "key_above_target",
            Self::KeyMatched => "key_matched",
        }
    }
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// The target was found at `index`.
    TargetFound { index: usize },
    /// The candidate window became empty; the target is absent.
    WindowExhausted,
    /// The probe budget was consumed without a match. A defined outcome,
    /// not a fatal error.
    ProbeBudgetExhausted,
}

impl TerminationReasonV1 {
    /// Stable string tag used in canonical JSON artifacts.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::TargetFound { .. } => "target_found",
            Self::WindowExhausted => "window_exhausted",
            Self::ProbeBudgetExhausted => "probe_budget_exhausted",
        }
    }
}

/// One recorded midpoint comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeEventV1 {
    /// Sequential probe counter, from 0.
    pub probe_order: u32,
    /// The window probed (inclusive bounds).
    pub window_lo: usize,
    /// Upper inclusive bound of the window probed.
    pub window_hi: usize,
    /// The midpoint index that was compared.
    pub midpoint: usize,
    /// The comparison verdict.
    pub verdict: ProbeVerdictV1,
}

/// Errors when encoding a trace artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEncodeError {
    /// The trace has no termination; only finished traces are artifacts.
    NotTerminated,
    /// Canonical JSON serialization failed.
    Canon(CanonError),
}

impl std::fmt::Display for TraceEncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotTerminated => write!(f, "trace has no termination record"),
            Self::Canon(e) => write!(f, "canonical JSON error: {e}"),
        }
    }
}

impl std::error::Error for TraceEncodeError {}

/// The append-only probe log for one search invocation.
///
/// Mutation is crate-private: only the engines drive a trace. Everyone
/// else reads events, the termination, or the canonical artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTraceV1 {
    budget: u32,
    events: Vec<ProbeEventV1>,
    termination: Option<TerminationReasonV1>,
}

impl ProbeTraceV1 {
    /// A fresh trace for a search with the given probe budget.
    #[must_use]
    pub(crate) fn new(budget: u32) -> Self {
        Self {
            budget,
            events: Vec::new(),
            termination: None,
        }
    }

    /// Record a probe of `window` at `midpoint` with `verdict`.
    pub(crate) fn record(
        &mut self,
        window: ProbeWindowV1,
        midpoint: usize,
        verdict: ProbeVerdictV1,
    ) {
        #[allow(clippy::cast_possible_truncation)]
        let probe_order = self.events.len() as u32;
        self.events.push(ProbeEventV1 {
            probe_order,
            window_lo: window.lo(),
            window_hi: window.hi(),
            midpoint,
            verdict,
        });
    }

    /// Close the trace. The engines call this exactly once per search.
    pub(crate) fn terminate(&mut self, reason: TerminationReasonV1) {
        debug_assert!(self.termination.is_none(), "trace terminated twice");
        self.termination = Some(reason);
    }

    /// The probe budget this trace was recorded under.
    #[must_use]
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Number of probes recorded so far.
    #[must_use]
    pub fn probes_used(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let n = self.events.len() as u32;
        n
    }

    /// All recorded probe events, in probe order.
    #[must_use]
    pub fn events(&self) -> &[ProbeEventV1] {
        &self.events
    }

    /// The termination reason, once the search has finished.
    #[must_use]
    pub fn termination(&self) -> Option<TerminationReasonV1> {
        self.termination
    }

    /// Canonical JSON bytes of the finished trace.
    ///
    /// # Errors
    ///
    /// Returns [`TraceEncodeError::NotTerminated`] for an in-flight trace,
    /// or a wrapped [`CanonError`] from the kernel canonicalizer.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, TraceEncodeError> {
        let Some(termination) = self.termination else {
            return Err(TraceEncodeError::NotTerminated);
        };

        let events: Vec<serde_json::Value> = self
            .events
            .iter()
            .map(|e| {
                serde_json::json!({
                    "probe_order": e.probe_order,
                    "window_lo": e.window_lo,
                    "window_hi": e.window_hi,
                    "midpoint": e.midpoint,
                    "verdict": e.verdict.tag(),
                })
            })
            .collect();

        let termination = match termination {
            TerminationReasonV1::TargetFound { index } => serde_json::json!({
                "kind": termination.tag(),
                "index": index,
            }),
            TerminationReasonV1::WindowExhausted | TerminationReasonV1::ProbeBudgetExhausted => {
                serde_json::json!({ "kind": termination.tag() })
            }
        };

        let value = serde_json::json!({
            "budget": self.budget,
            "events": events,
            "termination": termination,
        });
        canonical_json_bytes(&value).map_err(TraceEncodeError::Canon)
    }

    /// Digest of the canonical trace bytes under [`DOMAIN_PROBE_TRACE`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`ProbeTraceV1::to_canonical_json_bytes`].
    pub fn digest(&self) -> Result<RunDigest, TraceEncodeError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_PROBE_TRACE, &bytes))
    }
}
