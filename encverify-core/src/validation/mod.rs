//! Verification of a re-encoded file against its original
//!
//! Responsibilities:
//! - Compare playback durations within a tolerance
//! - Flag re-encodes that grew in size
//! - Combine both checks into a single verdict
//!
//! Soft failures (mismatch, undetermined) are returned as data. Only I/O
//! failures while reading file sizes surface as errors.

use std::path::Path;

use crate::config::VerifyConfig;
use crate::error::CoreResult;
use crate::external::{FileMetadataProvider, MediaProbe, StdFsMetadataProvider};

pub mod duration;
pub mod outcome;
pub mod report;
pub mod size;

pub use duration::{check_duration, compare_durations};
pub use outcome::VerificationOutcome;
pub use report::{Verdict, VerificationReport};
pub use size::{SizeComparison, check_file_size, check_file_size_with, compare_sizes};

/// Runs the size and duration checks for one pair of files.
///
/// Size goes first: it is the only check that can fail hard, and there is no
/// point probing durations for a file that does not exist.
pub fn verify_pair<P: MediaProbe + ?Sized>(
    probe: &P,
    config: &VerifyConfig,
    original: &Path,
    candidate: &Path,
) -> CoreResult<VerificationReport> {
    verify_pair_with(probe, &StdFsMetadataProvider, config, original, candidate)
}

/// Like [`verify_pair`] with an explicit metadata source.
pub fn verify_pair_with<P, M>(
    probe: &P,
    metadata: &M,
    config: &VerifyConfig,
    original: &Path,
    candidate: &Path,
) -> CoreResult<VerificationReport>
where
    P: MediaProbe + ?Sized,
    M: FileMetadataProvider + ?Sized,
{
    log::info!(
        "Verifying {} against {}",
        candidate.display(),
        original.display()
    );

    let size = check_file_size_with(metadata, original, candidate)?;
    let duration = check_duration(probe, original, candidate, config.duration_tolerance_secs);

    let report = VerificationReport::new(
        original.to_path_buf(),
        candidate.to_path_buf(),
        duration,
        size,
    );
    log::info!("Verdict for {}: {}", candidate.display(), report.verdict);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VerifyConfigBuilder;
    use crate::external::{MockMetadataProvider, MockProbe};

    #[test]
    fn test_verify_pair_accepts_clean_reencode() {
        let probe = MockProbe::new()
            .with_duration("orig.mkv", "01:30:05.120")
            .with_duration("new.mkv", "01:30:05;12");
        let metadata = MockMetadataProvider::new()
            .with_size("orig.mkv", 8_000_000_000)
            .with_size("new.mkv", 3_000_000_000);

        let report = verify_pair_with(
            &probe,
            &metadata,
            &VerifyConfig::default(),
            Path::new("orig.mkv"),
            Path::new("new.mkv"),
        )
        .unwrap();

        assert!(report.duration.passed());
        assert!(report.size.passed());
        assert_eq!(report.verdict, Verdict::Accept);
    }

    #[test]
    fn test_verify_pair_uses_configured_tolerance() {
        let probe = MockProbe::new()
            .with_duration("orig.mkv", "00:10:00")
            .with_duration("new.mkv", "00:10:03");
        let metadata = MockMetadataProvider::new()
            .with_size("orig.mkv", 2_000)
            .with_size("new.mkv", 1_000);

        let strict = verify_pair_with(
            &probe,
            &metadata,
            &VerifyConfig::default(),
            Path::new("orig.mkv"),
            Path::new("new.mkv"),
        )
        .unwrap();
        assert_eq!(strict.verdict, Verdict::Review);

        let lenient_config = VerifyConfigBuilder::new().duration_tolerance_secs(5).build();
        let lenient = verify_pair_with(
            &probe,
            &metadata,
            &lenient_config,
            Path::new("orig.mkv"),
            Path::new("new.mkv"),
        )
        .unwrap();
        assert_eq!(lenient.verdict, Verdict::Accept);
    }

    #[test]
    fn test_verify_pair_missing_file_is_error() {
        let probe = MockProbe::new();
        let metadata = MockMetadataProvider::new().with_size("orig.mkv", 2_000);

        let result = verify_pair_with(
            &probe,
            &metadata,
            &VerifyConfig::default(),
            Path::new("orig.mkv"),
            Path::new("new.mkv"),
        );
        assert!(result.is_err());
    }
}
