//! Report artifact locks: the dataset report round-trips through disk
//! and its digest sidecar matches recomputation.

use bisect_harness::datasets::contiguous::ContiguousRange;
use bisect_harness::datasets::gapped::GappedEvens;
use bisect_harness::runner::{run_dataset, REPORT_DIGEST_FILE, REPORT_FILE};
use bisect_kernel::fingerprint::{canonical_hash, RunDigest, DOMAIN_DATASET_REPORT};
use lock_tests::default_policy;

#[test]
fn report_dir_artifacts_are_complete() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_dataset(&ContiguousRange::new(100), &default_policy()).unwrap();
    report.write_report_dir(dir.path()).unwrap();

    assert!(dir.path().join(REPORT_FILE).is_file());
    assert!(dir.path().join(REPORT_DIGEST_FILE).is_file());
}

#[test]
fn stored_digest_matches_recomputation_from_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_dataset(&GappedEvens::new(2, 50), &default_policy()).unwrap();
    report.write_report_dir(dir.path()).unwrap();

    let bytes = std::fs::read(dir.path().join(REPORT_FILE)).unwrap();
    let recomputed = canonical_hash(DOMAIN_DATASET_REPORT, &bytes);

    let stored = std::fs::read_to_string(dir.path().join(REPORT_DIGEST_FILE)).unwrap();
    let stored = RunDigest::parse(stored.trim()).expect("sidecar holds a parseable digest");

    assert_eq!(stored, recomputed, "sidecar digest must match report bytes");
}

#[test]
fn report_json_carries_the_comparison_evidence() {
    let report = run_dataset(&ContiguousRange::new(1000), &default_policy()).unwrap();
    let bytes = report.to_canonical_json_bytes().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(json["dataset_id"], "contiguous_range");
    assert_eq!(json["probe_budget"], 64);
    assert!(json["run_fingerprint"]
        .as_str()
        .unwrap()
        .starts_with("sha256:"));

    let cases = json["cases"].as_array().unwrap();
    assert!(!cases.is_empty());
    for case in cases {
        assert!(case["trace_digest"].as_str().unwrap().starts_with("sha256:"));
        let probes = case["probes"].as_u64().unwrap();
        let linear = case["linear_comparisons"].as_u64().unwrap();
        if case["found"] == true {
            assert!(
                probes <= 11,
                "1000 keys resolve within ceil(log2)+1 probes, saw {probes}"
            );
        }
        assert!(linear <= 1000);
    }
}

#[test]
fn rewriting_a_report_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_dataset(&ContiguousRange::new(25), &default_policy()).unwrap();
    report.write_report_dir(dir.path()).unwrap();
    let first = std::fs::read(dir.path().join(REPORT_FILE)).unwrap();
    report.write_report_dir(dir.path()).unwrap();
    let second = std::fs::read(dir.path().join(REPORT_FILE)).unwrap();
    assert_eq!(first, second);
}
