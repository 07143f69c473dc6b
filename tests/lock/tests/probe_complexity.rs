//! Complexity locks: probe counts grow logarithmically for present
//! targets, while the linear baseline stays linear.

use bisect_kernel::run::SortedRunV1;
use bisect_search::engine::search_iterative;
use bisect_search::linear::linear_scan;
use lock_tests::{ceil_log2, default_policy};

/// Worst-case probe count over every present target of a run.
fn worst_case_probes(run: &SortedRunV1<i64>) -> u32 {
    let policy = default_policy();
    run.as_slice()
        .iter()
        .map(|&target| {
            let report = search_iterative(run, target, &policy).unwrap();
            assert!(report.is_found(), "present target {target} not found");
            report.probes_used()
        })
        .max()
        .unwrap_or(0)
}

#[test]
fn probe_count_is_logarithmic_exhaustive_small_runs() {
    for n in [5i64, 6, 7, 8, 16, 33, 64, 100, 512] {
        let run = SortedRunV1::contiguous(1, n);
        let worst = worst_case_probes(&run);
        #[allow(clippy::cast_sign_loss)]
        let bound = ceil_log2(n as u64) + 1;
        assert!(
            worst <= bound,
            "n={n}: worst case {worst} probes exceeds log bound {bound}"
        );
        assert!(
            u64::from(worst) < n as u64,
            "n={n}: bisection must beat the linear bound for n > 4"
        );
    }
}

#[test]
fn probe_count_grows_with_halvings_not_keys() {
    // Doubling the run adds roughly one probe to the worst case.
    let small = worst_case_probes(&SortedRunV1::contiguous(1, 64));
    let large = worst_case_probes(&SortedRunV1::contiguous(1, 4096));
    assert!(large <= small + 6, "64 -> 4096 adds six halvings at most");
    assert!(large >= small, "worst case cannot shrink as the run grows");
}

#[test]
fn ten_million_keys_resolve_within_24_probes() {
    let run = SortedRunV1::contiguous(1, 10_000_000);
    let report = search_iterative(&run, 9_999_999, &default_policy()).unwrap();
    assert!(report.is_found());
    assert!(
        report.probes_used() <= 24,
        "10^7 keys need at most ceil(log2) = 24 probes, used {}",
        report.probes_used()
    );
}

#[test]
fn linear_baseline_pays_full_price_on_the_same_run() {
    let run = SortedRunV1::contiguous(1, 10_000_000);
    // Absent target: the scan has no early exit.
    let miss = linear_scan(&run, 10_000_001);
    assert_eq!(miss.comparisons, 10_000_000);

    // The near-top hit the bisection engine resolved in <= 24 probes.
    let hit = linear_scan(&run, 9_999_999);
    assert_eq!(hit.comparisons, 9_999_999);
}

#[test]
fn sampled_targets_stay_logarithmic_on_large_runs() {
    let n = 1_048_576i64; // 2^20
    let run = SortedRunV1::contiguous(1, n);
    let policy = default_policy();
    for target in (1..=n).step_by(65_536) {
        let report = search_iterative(&run, target, &policy).unwrap();
        assert!(report.is_found());
        assert!(
            report.probes_used() <= 21,
            "target {target}: {} probes on a 2^20 run",
            report.probes_used()
        );
    }
}
