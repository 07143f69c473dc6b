//! `SortedRunV1`: a validated, strictly-ascending key run.
//!
//! The run is the immutable search substrate: an ordered collection of
//! unique comparable keys. Validation happens exactly once, at
//! construction; every search borrows the run read-only.
//!
//! # Equality semantics
//!
//! Two runs are equal when their key sequences are equal. For artifact
//! binding, `i64` runs additionally expose [`SortedRunV1::identity_bytes`]
//! (little-endian key concatenation) and
//! [`SortedRunV1::fingerprint`] under [`DOMAIN_RUN_IDENTITY`].

use crate::error::RunError;
use crate::fingerprint::{canonical_hash, RunDigest, DOMAIN_RUN_IDENTITY};

/// A validated sorted run of unique keys.
///
/// Invariant: keys are strictly ascending (`keys[i] < keys[i + 1]` for
/// every adjacent pair). Enforced by [`SortedRunV1::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedRunV1<K> {
    keys: Vec<K>,
}

impl<K: Ord + Copy> SortedRunV1<K> {
    /// Construct a run from a key vector, validating strict ascent.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::DuplicateKey`] if an adjacent pair is equal, or
    /// [`RunError::UnsortedKeys`] if an adjacent pair descends. The index
    /// in the error is the position of the second element of the pair.
    pub fn new(keys: Vec<K>) -> Result<Self, RunError> {
        for (i, pair) in keys.windows(2).enumerate() {
            match pair[0].cmp(&pair[1]) {
                std::cmp::Ordering::Less => {}
                std::cmp::Ordering::Equal => {
                    return Err(RunError::DuplicateKey { index: i + 1 });
                }
                std::cmp::Ordering::Greater => {
                    return Err(RunError::UnsortedKeys { index: i + 1 });
                }
            }
        }
        Ok(Self { keys })
    }

    /// Number of keys in the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the run holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The key at `index`.
    ///
    /// Search engines only probe indices inside a validated window, so the
    /// checked accessor is the boundary for everyone else.
    #[must_use]
    pub fn key_at(&self, index: usize) -> Option<K> {
        self.keys.get(index).copied()
    }

    /// The full key slice.
    #[must_use]
    pub fn as_slice(&self) -> &[K] {
        &self.keys
    }

    /// The smallest key, if any.
    #[must_use]
    pub fn first(&self) -> Option<K> {
        self.keys.first().copied()
    }

    /// The largest key, if any.
    #[must_use]
    pub fn last(&self) -> Option<K> {
        self.keys.last().copied()
    }
}

impl SortedRunV1<i64> {
    /// Construct the contiguous run `lo, lo+1, ..., hi` (inclusive).
    ///
    /// Returns the empty run when `lo > hi`. Ascent holds by construction,
    /// so no validation pass is needed.
    #[must_use]
    pub fn contiguous(lo: i64, hi: i64) -> Self {
        Self {
            keys: (lo..=hi).collect(),
        }
    }

    /// Construct the strided run `start, start+stride, ...` with `count` keys.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::DuplicateKey`] when `stride` is zero and
    /// `count > 1` (the only way a strided run can violate ascent; a
    /// negative stride is normalized by reversing).
    pub fn strided(start: i64, stride: i64, count: usize) -> Result<Self, RunError> {
        if stride == 0 && count > 1 {
            return Err(RunError::DuplicateKey { index: 1 });
        }
        let mut keys: Vec<i64> = (0..count)
            .map(|i| {
                let offset = i64::try_from(i).unwrap_or(i64::MAX).saturating_mul(stride);
                start.saturating_add(offset)
            })
            .collect();
        if stride < 0 {
            keys.reverse();
        }
        Self::new(keys)
    }

    /// Little-endian concatenation of all keys: the identity bytes that
    /// fingerprints and reports bind to.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.keys.len() * 8);
        for key in &self.keys {
            out.extend_from_slice(&key.to_le_bytes());
        }
        out
    }

    /// Canonical fingerprint of the run under [`DOMAIN_RUN_IDENTITY`].
    #[must_use]
    pub fn fingerprint(&self) -> RunDigest {
        canonical_hash(DOMAIN_RUN_IDENTITY, &self.identity_bytes())
    }
}
