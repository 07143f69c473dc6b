//! Linear-scan membership baseline.
//!
//! The O(n) contrast case for the bisection engines: walk the run front
//! to back, counting comparisons. Exists so the complexity claims are
//! measured against a real implementation rather than asserted.

use bisect_kernel::run::SortedRunV1;

/// Result of a linear membership scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearScanReportV1 {
    /// Index of the target, if present.
    pub found_at: Option<usize>,
    /// Number of key comparisons performed. Equals `index + 1` on a hit
    /// and the run length on a miss.
    pub comparisons: u64,
}

impl LinearScanReportV1 {
    /// Returns `true` if the scan located the target.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.found_at.is_some()
    }
}

/// Scan the run front to back for `target`.
///
/// The run is sorted, but the scan deliberately ignores that: it is the
/// brute-force baseline, terminating early only on a hit.
#[must_use]
pub fn linear_scan<K: Ord + Copy>(run: &SortedRunV1<K>, target: K) -> LinearScanReportV1 {
    let mut comparisons = 0u64;
    for (index, key) in run.as_slice().iter().enumerate() {
        comparisons += 1;
        if *key == target {
            return LinearScanReportV1 {
                found_at: Some(index),
                comparisons,
            };
        }
    }
    LinearScanReportV1 {
        found_at: None,
        comparisons,
    }
}
