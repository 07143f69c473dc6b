//! Shared helpers for bisect benchmark suites.

use bisect_kernel::run::SortedRunV1;

/// Contiguous benchmark run `1..=n`.
#[must_use]
pub fn bench_run(n: i64) -> SortedRunV1<i64> {
    SortedRunV1::contiguous(1, n)
}

/// A near-top present target: the deep end of the probe path.
#[must_use]
pub fn near_top_target(n: i64) -> i64 {
    n - 1
}
