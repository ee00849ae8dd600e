// encverify-core/tests/validation_tests.rs
//
// Pair verification against real files on disk, with durations supplied by
// MockProbe so no mediainfo binary is needed.

use encverify_core::{
    CoreError, MockProbe, Verdict, VerifyConfig, VerifyConfigBuilder, check_file_size, verify_pair,
};
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

fn write_pair(original_len: usize, candidate_len: usize) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempdir().unwrap();
    let original = dir.path().join("original.mkv");
    let candidate = dir.path().join("candidate.mkv");
    fs::write(&original, vec![1u8; original_len]).unwrap();
    fs::write(&candidate, vec![2u8; candidate_len]).unwrap();
    (dir, original, candidate)
}

#[test]
fn test_mixed_duration_formats_and_smaller_file_are_accepted() {
    let (_dir, original, candidate) = write_pair(3 * 1024 * 1024, 1024 * 1024);
    let probe = MockProbe::new()
        .with_file(&original, Some("01:30:05.120"), "x264 core 164")
        .with_file(&candidate, Some("01:30:05;12"), "x265 - 3.5");

    let report = verify_pair(&probe, &VerifyConfig::default(), &original, &candidate).unwrap();

    assert_eq!(report.duration.flags(), (true, false));
    assert_eq!(report.size.flags(), (true, false));
    assert!(report.size.message().contains("2 MiB smaller"));
    assert_eq!(report.verdict, Verdict::Accept);
}

#[test]
fn test_duration_gap_needs_review() {
    let (_dir, original, candidate) = write_pair(2048, 1024);
    let probe = MockProbe::new()
        .with_duration(&original, "00:10:00")
        .with_duration(&candidate, "00:10:03");

    let report = verify_pair(&probe, &VerifyConfig::default(), &original, &candidate).unwrap();

    assert_eq!(report.duration.flags(), (false, true));
    assert_eq!(report.verdict, Verdict::Review);
}

#[test]
fn test_absent_candidate_duration_is_undetermined() {
    let (_dir, original, candidate) = write_pair(2048, 1024);
    let probe = MockProbe::new()
        .with_duration(&original, "00:42:00.000")
        .with_file(&candidate, None, "x265");

    let report = verify_pair(&probe, &VerifyConfig::default(), &original, &candidate).unwrap();

    assert_eq!(report.duration.flags(), (false, false));
    assert!(report.size.passed());
    assert_eq!(report.verdict, Verdict::Undetermined);
}

#[test]
fn test_grown_candidate_needs_review() {
    let (_dir, original, candidate) = write_pair(1024, 1025);

    let outcome = check_file_size(&original, &candidate).unwrap();
    assert_eq!(outcome.flags(), (false, true));
}

#[test]
fn test_tolerance_boundary() {
    let (_dir, original, candidate) = write_pair(10, 10);
    let probe = MockProbe::new()
        .with_duration(&original, "00:00:10")
        .with_duration(&candidate, "00:00:15");

    for (tolerance, expected) in [(4, Verdict::Review), (5, Verdict::Accept), (6, Verdict::Accept)] {
        let config = VerifyConfigBuilder::new().duration_tolerance_secs(tolerance).build();
        let report = verify_pair(&probe, &config, &original, &candidate).unwrap();
        assert_eq!(report.verdict, expected, "tolerance {tolerance}");
    }
}

#[test]
fn test_missing_candidate_is_hard_error() {
    let (dir, original, _candidate) = write_pair(10, 10);
    let missing = dir.path().join("never_written.mkv");
    let probe = MockProbe::new().with_duration(&original, "00:00:10");

    let err = verify_pair(&probe, &VerifyConfig::default(), &original, &missing).unwrap_err();
    assert!(matches!(err, CoreError::FileAccess { ref path, .. } if path == &missing));
}
