//! Core library for deciding whether a re-encoded media file can replace its
//! original.
//!
//! Two checks run per pair of files: playback duration (probed with
//! mediainfo, compared within a tolerance) and file size (the re-encode must
//! not grow). Each check yields a [`VerificationOutcome`] and the pair gets a
//! [`Verdict`]. Content digests for identity tracking are computed
//! separately with [`content_digest`].
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use encverify_core::{MediainfoProbe, VerifyConfig, Verdict, verify_pair};
//! use std::path::Path;
//!
//! let config = VerifyConfig::default();
//! let probe = MediainfoProbe::new(&config.mediainfo_path);
//!
//! let report = verify_pair(
//!     &probe,
//!     &config,
//!     Path::new("/media/original.mkv"),
//!     Path::new("/media/reencoded.mkv"),
//! )
//! .unwrap();
//!
//! if report.verdict == Verdict::Accept {
//!     println!("{}", report.size.message());
//! }
//! ```

pub mod config;
pub mod duration;
pub mod error;
pub mod external;
pub mod hash;
pub mod utils;
pub mod validation;

// Re-exports for public API
pub use config::{VerifyConfig, VerifyConfigBuilder};
pub use duration::{DurationReading, MediaDuration, parse_duration, read_duration};
pub use error::{CoreError, CoreResult};
pub use external::{
    FileMetadataProvider, MediaProbe, MediainfoProbe, MockMetadataProvider, MockProbe,
    ProbeResult, StdFsMetadataProvider, UNKNOWN_ENCODER, check_dependency,
};
pub use hash::{ContentDigest, content_digest, digest_reader};
pub use utils::{bytes_to_mib, format_bytes};
pub use validation::{
    SizeComparison, Verdict, VerificationOutcome, VerificationReport, check_duration,
    check_file_size, compare_durations, compare_sizes, verify_pair, verify_pair_with,
};
