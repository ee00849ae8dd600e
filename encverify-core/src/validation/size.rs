//! File size policy: a re-encode must not be larger than its original

use std::path::Path;

use serde::Serialize;

use super::outcome::VerificationOutcome;
use crate::error::CoreResult;
use crate::external::{FileMetadataProvider, StdFsMetadataProvider};
use crate::utils::{bytes_to_mib, format_bytes};

/// Byte lengths of an original and its candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeComparison {
    pub original_bytes: u64,
    pub candidate_bytes: u64,
}

impl SizeComparison {
    pub fn new(original_bytes: u64, candidate_bytes: u64) -> Self {
        Self {
            original_bytes,
            candidate_bytes,
        }
    }

    /// True when the candidate is strictly larger.
    pub fn grew(&self) -> bool {
        self.candidate_bytes > self.original_bytes
    }

    pub fn saved_bytes(&self) -> u64 {
        self.original_bytes.saturating_sub(self.candidate_bytes)
    }

    /// Savings in whole mebibytes, rounded down.
    pub fn saved_mib(&self) -> u64 {
        bytes_to_mib(self.saved_bytes())
    }

    pub fn outcome(&self) -> VerificationOutcome {
        if self.grew() {
            VerificationOutcome::needs_review(format!(
                "Encoded file is bigger than the original ({} vs {}).",
                format_bytes(self.candidate_bytes),
                format_bytes(self.original_bytes)
            ))
        } else {
            VerificationOutcome::pass(format!(
                "The new file is {} MiB smaller than the original.",
                self.saved_mib()
            ))
        }
    }
}

/// Decides on two known sizes.
pub fn compare_sizes(original_bytes: u64, candidate_bytes: u64) -> VerificationOutcome {
    SizeComparison::new(original_bytes, candidate_bytes).outcome()
}

/// Stats both files and applies the size policy.
///
/// # Errors
///
/// Returns `CoreError::FileAccess` when either file cannot be stat'ed; size
/// is never undetermined.
pub fn check_file_size(original: &Path, candidate: &Path) -> CoreResult<VerificationOutcome> {
    check_file_size_with(&StdFsMetadataProvider, original, candidate)
}

/// Like [`check_file_size`] with an explicit metadata source.
pub fn check_file_size_with<M: FileMetadataProvider + ?Sized>(
    metadata: &M,
    original: &Path,
    candidate: &Path,
) -> CoreResult<VerificationOutcome> {
    let comparison = SizeComparison::new(metadata.get_size(original)?, metadata.get_size(candidate)?);
    let outcome = comparison.outcome();
    outcome.log("Size");
    Ok(outcome)
}
