//! Boundary locks: first/last keys, empty runs, and both not-found paths.

use bisect_search::engine::{
    search_iterative, search_recursive, search_with, NotFoundReasonV1, SearchOutcomeV1,
    StrategyV1,
};
use bisect_search::policy::ProbePolicyV1;
use bisect_search::trace::TerminationReasonV1;
use lock_tests::{classroom_run, default_policy};

// ---------------------------------------------------------------------------
// ACCEPTANCE: boundary targets on the classroom run
// ---------------------------------------------------------------------------

#[test]
fn first_key_resolves_on_both_engines() {
    let run = classroom_run();
    for strategy in [StrategyV1::Iterative, StrategyV1::Recursive] {
        let report = search_with(strategy, &run, 1, &default_policy()).unwrap();
        assert_eq!(
            report.outcome,
            SearchOutcomeV1::Found { index: 0, key: 1 },
            "{} engine lost the first key",
            strategy.tag()
        );
    }
}

#[test]
fn last_key_resolves_on_both_engines() {
    let run = classroom_run();
    for strategy in [StrategyV1::Iterative, StrategyV1::Recursive] {
        let report = search_with(strategy, &run, 10, &default_policy()).unwrap();
        assert_eq!(
            report.outcome,
            SearchOutcomeV1::Found { index: 9, key: 10 },
            "{} engine lost the last key",
            strategy.tag()
        );
    }
}

#[test]
fn every_present_key_resolves() {
    let run = classroom_run();
    for target in 1i64..=10 {
        let report = search_iterative(&run, target, &default_policy()).unwrap();
        match report.outcome {
            SearchOutcomeV1::Found { key, .. } => assert_eq!(key, target),
            SearchOutcomeV1::NotFound { reason } => {
                panic!("present target {target} reported {reason:?}")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: defined not-found outcomes, never hangs, never panics
// ---------------------------------------------------------------------------

#[test]
fn above_maximum_target_exhausts_window() {
    let run = classroom_run();
    let report = search_iterative(&run, 11, &default_policy()).unwrap();
    assert_eq!(
        report.outcome,
        SearchOutcomeV1::NotFound {
            reason: NotFoundReasonV1::WindowExhausted
        }
    );
    assert_eq!(
        report.trace.termination(),
        Some(TerminationReasonV1::WindowExhausted)
    );
}

#[test]
fn below_minimum_target_terminates_at_budget() {
    let run = classroom_run();
    let policy = ProbePolicyV1 { max_probes: 12 };
    for strategy in [StrategyV1::Iterative, StrategyV1::Recursive] {
        let report = search_with(strategy, &run, 0, &policy).unwrap();
        assert_eq!(
            report.outcome,
            SearchOutcomeV1::NotFound {
                reason: NotFoundReasonV1::ProbeBudgetExhausted
            }
        );
        assert_eq!(report.probes_used(), 12, "budget is the terminator");
    }
}

#[test]
fn interior_absent_target_terminates_at_budget() {
    // Gapped keys: 2, 4, ..., 20. Target 7 sits in an interior gap.
    let run = bisect_kernel::run::SortedRunV1::strided(2, 2, 10).unwrap();
    let report = search_iterative(&run, 7, &default_policy()).unwrap();
    assert_eq!(
        report.outcome,
        SearchOutcomeV1::NotFound {
            reason: NotFoundReasonV1::ProbeBudgetExhausted
        }
    );
    assert!(u64::from(report.probes_used()) <= u64::from(default_policy().max_probes));
}

#[test]
fn empty_run_signals_not_found_without_probing() {
    let run = bisect_kernel::run::SortedRunV1::<i64>::new(vec![]).unwrap();
    for strategy in [StrategyV1::Iterative, StrategyV1::Recursive] {
        let report = search_with(strategy, &run, 5, &default_policy()).unwrap();
        assert_eq!(
            report.outcome,
            SearchOutcomeV1::NotFound {
                reason: NotFoundReasonV1::WindowExhausted
            }
        );
        assert_eq!(report.probes_used(), 0);
        assert!(report.trace.events().is_empty());
    }
}

#[test]
fn singleton_run_resolves_and_rejects() {
    let run = bisect_kernel::run::SortedRunV1::new(vec![42i64]).unwrap();
    let hit = search_recursive(&run, 42, &default_policy()).unwrap();
    assert_eq!(hit.outcome, SearchOutcomeV1::Found { index: 0, key: 42 });
    assert_eq!(hit.probes_used(), 1);

    let above = search_recursive(&run, 43, &default_policy()).unwrap();
    assert_eq!(
        above.outcome,
        SearchOutcomeV1::NotFound {
            reason: NotFoundReasonV1::WindowExhausted
        }
    );

    let below = search_recursive(&run, 41, &default_policy()).unwrap();
    assert_eq!(
        below.outcome,
        SearchOutcomeV1::NotFound {
            reason: NotFoundReasonV1::ProbeBudgetExhausted
        }
    );
}
