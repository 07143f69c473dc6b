//! Canonical hashing: digest type and domain separation constants.
//!
//! **Exactly one place defines canonical hashing.** Every digest in the
//! workspace — run fingerprints, trace digests, the test case stream —
//! routes through [`canonical_hash`] or [`raw_hash`] with one of the
//! domain constants below. Each prefix is null-terminated.
//!
//! Algorithm: SHA-256 for all V1 artifacts.

use sha2::{Digest as _, Sha256};

/// Domain prefix for sorted-run identity fingerprints.
pub const DOMAIN_RUN_IDENTITY: &[u8] = b"BISECT::RUN_IDENTITY::V1\0";

/// Domain prefix for probe trace digests.
pub const DOMAIN_PROBE_TRACE: &[u8] = b"BISECT::PROBE_TRACE::V1\0";

/// Domain prefix for dataset report digests.
pub const DOMAIN_DATASET_REPORT: &[u8] = b"BISECT::DATASET_REPORT::V1\0";

/// Domain prefix for the deterministic test case stream.
/// Distinct from the artifact domains to prevent cross-domain collisions.
pub const DOMAIN_CASE_STREAM: &[u8] = b"BISECT::CASE_STREAM::V1\0";

/// A content-addressed digest with algorithm identifier.
///
/// Format: `"sha256:<lowercase_hex>"`.
///
/// Invariant: the inner string always contains exactly one `:` separator
/// with non-empty substrings on both sides (enforced by [`RunDigest::parse`];
/// digests produced by [`canonical_hash`] satisfy it by construction).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunDigest {
    /// Full string in `"algorithm:hex_digest"` format.
    full: String,
    /// Byte offset of the `:` separator (cached from parse).
    colon: usize,
}

impl RunDigest {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the format is invalid (missing colon,
    /// empty algorithm, or empty digest).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (always `"sha256"` for digests produced here).
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full string representation (`"algorithm:hex_digest"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

/// SHA-256 with domain prefix, returning raw 32 bytes.
///
/// Used where raw bytes feed further derivation (the case stream) instead
/// of an artifact digest string.
#[must_use]
pub fn raw_hash(domain: &[u8], data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let result = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&result);
    out
}

/// Compute the canonical digest of a byte slice with domain separation.
///
/// Result format: `"sha256:<lowercase_hex>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> RunDigest {
    let raw = raw_hash(domain, data);
    let hex = hex::encode(raw);
    RunDigest {
        colon: "sha256".len(),
        full: format!("sha256:{hex}"),
    }
}
