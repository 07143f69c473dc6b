//! `GappedEvens`: even keys with interior gaps.
//!
//! Keys are `start, start+2, ..., start+2(n-1)`. Odd targets between
//! the bounds are interior-absent: the above-target narrowing retains
//! its probe, the window pins on a singleton, and only the probe budget
//! terminates the search. This dataset keeps that path permanently
//! exercised.

use crate::contract::{DatasetV1, ProbeTargetV1};

/// Even integers starting at `start` (rounded up to even), `n` keys.
pub struct GappedEvens {
    start: i64,
    n: i64,
}

impl GappedEvens {
    /// A gapped run of `n` even keys from `start` (rounded up to even).
    #[must_use]
    pub fn new(start: i64, n: i64) -> Self {
        Self {
            start: start + start.rem_euclid(2),
            n: n.max(1),
        }
    }

    fn last_key(&self) -> i64 {
        self.start + 2 * (self.n - 1)
    }
}

impl DatasetV1 for GappedEvens {
    fn dataset_id(&self) -> &str {
        "gapped_evens"
    }

    fn keys(&self) -> Vec<i64> {
        (0..self.n).map(|i| self.start + 2 * i).collect()
    }

    fn probe_targets(&self) -> Vec<ProbeTargetV1> {
        vec![
            ProbeTargetV1 {
                target: self.start,
                expect_found: true,
            },
            ProbeTargetV1 {
                target: self.last_key(),
                expect_found: true,
            },
            // Interior-absent odd target: the stall path.
            ProbeTargetV1 {
                target: self.start + 1,
                expect_found: false,
            },
            // Another interior gap, near the top.
            ProbeTargetV1 {
                target: self.last_key() - 1,
                expect_found: false,
            },
            // Outside both bounds.
            ProbeTargetV1 {
                target: self.start - 2,
                expect_found: false,
            },
            ProbeTargetV1 {
                target: self.last_key() + 2,
                expect_found: false,
            },
        ]
    }
}
