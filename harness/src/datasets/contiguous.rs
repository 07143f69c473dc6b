//! `ContiguousRange`: the classroom guess-the-number dataset.
//!
//! Keys are the contiguous integers `1..=n`. Every interior value is
//! present, so absent targets fall outside the run: below-minimum
//! targets exercise the stationary-window budget path, above-maximum
//! targets exhaust the window.

use crate::contract::{DatasetV1, ProbeTargetV1};

/// Contiguous integer range `1..=n`.
pub struct ContiguousRange {
    n: i64,
}

impl ContiguousRange {
    /// A range with `n` keys. `n` of zero yields the empty dataset.
    #[must_use]
    pub fn new(n: i64) -> Self {
        Self { n: n.max(0) }
    }
}

impl DatasetV1 for ContiguousRange {
    fn dataset_id(&self) -> &str {
        "contiguous_range"
    }

    fn keys(&self) -> Vec<i64> {
        (1..=self.n).collect()
    }

    fn probe_targets(&self) -> Vec<ProbeTargetV1> {
        if self.n == 0 {
            return vec![ProbeTargetV1 {
                target: 1,
                expect_found: false,
            }];
        }
        vec![
            // Both boundaries, the lower median, and a mid-range key.
            ProbeTargetV1 {
                target: 1,
                expect_found: true,
            },
            ProbeTargetV1 {
                target: self.n,
                expect_found: true,
            },
            ProbeTargetV1 {
                target: (self.n + 1) / 2,
                expect_found: true,
            },
            // Below-minimum: the window pins at the first key.
            ProbeTargetV1 {
                target: 0,
                expect_found: false,
            },
            // Above-maximum: the window empties.
            ProbeTargetV1 {
                target: self.n + 1,
                expect_found: false,
            },
        ]
    }
}
