//! Shared helpers for the lock-test suites.

use bisect_kernel::run::SortedRunV1;
use bisect_search::policy::ProbePolicyV1;

/// The classroom run `1..=10` most boundary locks probe.
#[must_use]
pub fn classroom_run() -> SortedRunV1<i64> {
    SortedRunV1::contiguous(1, 10)
}

/// The default policy every lock uses unless it is testing the budget.
#[must_use]
pub fn default_policy() -> ProbePolicyV1 {
    ProbePolicyV1::default()
}

/// Ceiling of log2 for a positive count, by bit width.
#[must_use]
pub fn ceil_log2(n: u64) -> u32 {
    assert!(n > 0, "log2 of zero requested");
    if n == 1 {
        0
    } else {
        64 - (n - 1).leading_zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_log2_reference_values() {
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(3), 2);
        assert_eq!(ceil_log2(1024), 10);
        assert_eq!(ceil_log2(10_000_000), 24);
    }
}
