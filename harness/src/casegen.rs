//! `CaseStreamV1`: reproducible search cases from a SHA-256 counter stream.
//!
//! Randomized coverage without a random source: every case is derived
//! from `raw_hash(DOMAIN_CASE_STREAM, counter)`, so the stream is
//! bit-identical across processes and machines. Case shapes round-robin
//! through run strides (contiguous and gapped) and target kinds
//! (present, interior-absent, below-minimum, above-maximum), keeping
//! every termination path exercised in any window of a few dozen cases.

use bisect_kernel::fingerprint::{raw_hash, DOMAIN_CASE_STREAM};
use bisect_kernel::run::SortedRunV1;

/// Upper bound on generated run lengths.
const MAX_RUN_LEN: u64 = 512;

/// Bound on generated start keys (kept modest so arithmetic stays far
/// from the `i64` edges).
const START_SPAN: u64 = 20_001;

/// One generated search case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseV1 {
    /// Position in the stream this case was derived from.
    pub case_index: u64,
    /// The run to search.
    pub run: SortedRunV1<i64>,
    /// The target to search for.
    pub target: i64,
    /// Whether the run contains the target.
    pub expect_found: bool,
}

/// An infinite, deterministic stream of search cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStreamV1 {
    counter: u64,
}

impl CaseStreamV1 {
    /// A stream positioned at case 0.
    #[must_use]
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    /// Derive the next case and advance the stream.
    #[must_use]
    pub fn next_case(&mut self) -> CaseV1 {
        let case_index = self.counter;
        self.counter += 1;

        let bytes = raw_hash(DOMAIN_CASE_STREAM, &case_index.to_le_bytes());

        let len = 1 + le_u64(&bytes, 0) % MAX_RUN_LEN;
        let start = i64::try_from(le_u64(&bytes, 8) % START_SPAN).unwrap_or(0) - 10_000;
        let stride: i64 = if (bytes[16] & 1) == 0 { 1 } else { 2 };
        let pick = le_u64(&bytes, 17) % len;

        #[allow(clippy::cast_possible_truncation)]
        let count = len as usize;
        let run = SortedRunV1::strided(start, stride, count)
            .expect("case stream stride is always 1 or 2");

        let picked_key = start + stride * i64::try_from(pick).unwrap_or(0);
        let last_key = start + stride * i64::try_from(len - 1).unwrap_or(0);

        let (target, expect_found) = match bytes[25] % 4 {
            0 => (picked_key, true),
            // Interior gap; contiguous runs have none, so the offset key
            // is only absent on the gapped stride.
            1 if stride == 2 => (picked_key + 1, false),
            1 => (picked_key, true),
            2 => (start - stride, false),
            _ => (last_key + stride, false),
        };

        CaseV1 {
            case_index,
            run,
            target,
            expect_found,
        }
    }
}

impl Default for CaseStreamV1 {
    fn default() -> Self {
        Self::new()
    }
}

fn le_u64(bytes: &[u8; 32], offset: usize) -> u64 {
    let mut out = [0u8; 8];
    out.copy_from_slice(&bytes[offset..offset + 8]);
    u64::from_le_bytes(out)
}
