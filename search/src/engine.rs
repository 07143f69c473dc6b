//! Search entry points: the iterative and recursive bisection engines.
//!
//! Both engines implement the same contract — midpoint probing with the
//! kernel's narrowing rules, under a probe budget — and share one probe
//! step, so identical inputs produce identical outcomes AND identical
//! probe traces. The iterative form is the preferred one at scale: the
//! recursive form's call depth grows with the probe count, bounded only
//! by the budget.

use bisect_kernel::run::SortedRunV1;
use bisect_kernel::window::ProbeWindowV1;

use crate::error::SearchError;
use crate::policy::ProbePolicyV1;
use crate::trace::{ProbeTraceV1, ProbeVerdictV1, TerminationReasonV1};

/// Which control-flow realization to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyV1 {
    /// Explicit loop with mutable window state.
    Iterative,
    /// Self-recursive calls carrying the shrinking window as an argument.
    Recursive,
}

impl StrategyV1 {
    /// Stable string tag used in report artifacts.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Iterative => "iterative",
            Self::Recursive => "recursive",
        }
    }
}

/// The caller-facing result of a search.
///
/// `NotFound` is a defined outcome, not an error: the reason mirrors the
/// trace's termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcomeV1<K> {
    /// The target is present at `index`; `key` equals the target.
    Found { index: usize, key: K },
    /// The target was not located.
    NotFound { reason: NotFoundReasonV1 },
}

/// Why a search came back empty-handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReasonV1 {
    /// The candidate window became empty.
    WindowExhausted,
    /// The probe budget was consumed without a match.
    ProbeBudgetExhausted,
}

impl From<NotFoundReasonV1> for TerminationReasonV1 {
    fn from(reason: NotFoundReasonV1) -> Self {
        match reason {
            NotFoundReasonV1::WindowExhausted => Self::WindowExhausted,
            NotFoundReasonV1::ProbeBudgetExhausted => Self::ProbeBudgetExhausted,
        }
    }
}

/// Result of a search execution: the outcome plus the complete trace.
///
/// The trace is always present and always terminated, regardless of how
/// the search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReportV1<K> {
    /// The caller-facing outcome.
    pub outcome: SearchOutcomeV1<K>,
    /// The complete probe audit trail.
    pub trace: ProbeTraceV1,
}

impl<K> SearchReportV1<K> {
    /// Returns `true` if the search terminated on a match.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, SearchOutcomeV1::Found { .. })
    }

    /// Number of midpoint comparisons the search made.
    #[must_use]
    pub fn probes_used(&self) -> u32 {
        self.trace.probes_used()
    }
}

/// One midpoint comparison: probe, classify, record.
fn probe_step<K: Ord + Copy>(
    run: &SortedRunV1<K>,
    target: K,
    window: ProbeWindowV1,
    trace: &mut ProbeTraceV1,
) -> ProbeVerdictV1 {
    let mid = window.midpoint();
    // Window indices are in-bounds by construction: windows originate
    // from ProbeWindowV1::full(run.len()) and only ever narrow.
    let key = run.as_slice()[mid];
    let verdict = match key.cmp(&target) {
        std::cmp::Ordering::Less => ProbeVerdictV1::KeyBelowTarget,
        std::cmp::Ordering::Greater => ProbeVerdictV1::KeyAboveTarget,
        std::cmp::Ordering::Equal => ProbeVerdictV1::KeyMatched,
    };
    trace.record(window, mid, verdict);
    verdict
}

fn not_found<K>(trace: &mut ProbeTraceV1, reason: NotFoundReasonV1) -> SearchOutcomeV1<K> {
    trace.terminate(reason.into());
    SearchOutcomeV1::NotFound { reason }
}

fn found<K>(trace: &mut ProbeTraceV1, index: usize, key: K) -> SearchOutcomeV1<K> {
    trace.terminate(TerminationReasonV1::TargetFound { index });
    SearchOutcomeV1::Found { index, key }
}

/// Run bisection search with an explicit loop and mutable window state.
///
/// # Errors
///
/// Returns [`SearchError::ZeroProbeBudget`] only for pre-flight policy
/// validation failures. No trace is produced in this case because no
/// probe was made.
pub fn search_iterative<K: Ord + Copy>(
    run: &SortedRunV1<K>,
    target: K,
    policy: &ProbePolicyV1,
) -> Result<SearchReportV1<K>, SearchError> {
    policy.validate()?;
    let mut trace = ProbeTraceV1::new(policy.max_probes);

    let Some(mut window) = ProbeWindowV1::full(run.len()) else {
        let outcome = not_found(&mut trace, NotFoundReasonV1::WindowExhausted);
        return Ok(SearchReportV1 { outcome, trace });
    };

    let outcome = loop {
        if trace.probes_used() >= policy.max_probes {
            break not_found(&mut trace, NotFoundReasonV1::ProbeBudgetExhausted);
        }
        match probe_step(run, target, window, &mut trace) {
            ProbeVerdictV1::KeyMatched => {
                let index = window.midpoint();
                break found(&mut trace, index, target);
            }
            ProbeVerdictV1::KeyBelowTarget => match window.discard_through_midpoint() {
                Some(next) => window = next,
                None => break not_found(&mut trace, NotFoundReasonV1::WindowExhausted),
            },
            ProbeVerdictV1::KeyAboveTarget => {
                window = window.discard_above_midpoint();
            }
        }
    };

    Ok(SearchReportV1 { outcome, trace })
}

/// Run bisection search as self-recursion, the window threaded through
/// each call and the probe count carried by the shared trace.
///
/// Produces a report identical to [`search_iterative`] for the same
/// input. Call depth is bounded by the probe budget.
///
/// # Errors
///
/// Returns [`SearchError::ZeroProbeBudget`] only for pre-flight policy
/// validation failures.
pub fn search_recursive<K: Ord + Copy>(
    run: &SortedRunV1<K>,
    target: K,
    policy: &ProbePolicyV1,
) -> Result<SearchReportV1<K>, SearchError> {
    policy.validate()?;
    let mut trace = ProbeTraceV1::new(policy.max_probes);

    let outcome = match ProbeWindowV1::full(run.len()) {
        Some(window) => recurse(run, target, window, policy.max_probes, &mut trace),
        None => not_found(&mut trace, NotFoundReasonV1::WindowExhausted),
    };

    Ok(SearchReportV1 { outcome, trace })
}

fn recurse<K: Ord + Copy>(
    run: &SortedRunV1<K>,
    target: K,
    window: ProbeWindowV1,
    max_probes: u32,
    trace: &mut ProbeTraceV1,
) -> SearchOutcomeV1<K> {
    if trace.probes_used() >= max_probes {
        return not_found(trace, NotFoundReasonV1::ProbeBudgetExhausted);
    }
    match probe_step(run, target, window, trace) {
        ProbeVerdictV1::KeyMatched => found(trace, window.midpoint(), target),
        ProbeVerdictV1::KeyBelowTarget => match window.discard_through_midpoint() {
            Some(next) => recurse(run, target, next, max_probes, trace),
            None => not_found(trace, NotFoundReasonV1::WindowExhausted),
        },
        ProbeVerdictV1::KeyAboveTarget => {
            recurse(run, target, window.discard_above_midpoint(), max_probes, trace)
        }
    }
}

/// Dispatch to the engine selected by `strategy`.
///
/// # Errors
///
/// Same conditions as the individual engines.
pub fn search_with<K: Ord + Copy>(
    strategy: StrategyV1,
    run: &SortedRunV1<K>,
    target: K,
    policy: &ProbePolicyV1,
) -> Result<SearchReportV1<K>, SearchError> {
    match strategy {
        StrategyV1::Iterative => search_iterative(run, target, policy),
        StrategyV1::Recursive => search_recursive(run, target, policy),
    }
}
