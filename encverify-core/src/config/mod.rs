//! Configuration structures and constants for the encverify-core library.
//!
//! This module holds the knobs of the verification policy: how far apart two
//! durations may be before a re-encode is flagged, and which mediainfo binary
//! the probe runs.

mod builder;

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

pub use builder::VerifyConfigBuilder;

// Default constants

/// Default maximum duration difference, in seconds, that still counts as a match.
pub const DEFAULT_DURATION_TOLERANCE_SECS: u64 = 1;

/// Default name of the media inspection binary, resolved through `PATH`.
pub const DEFAULT_MEDIAINFO_BINARY: &str = "mediainfo";

/// Main configuration structure for the encverify-core library.
///
/// Created by the consumer of the library (e.g., encverify-cli) and passed to
/// [`crate::validation::verify_pair`]. All fields have defaults.
///
/// # Examples
///
/// ```rust
/// use encverify_core::config::VerifyConfigBuilder;
///
/// let config = VerifyConfigBuilder::new()
///     .duration_tolerance_secs(2)
///     .mediainfo_path("/usr/local/bin/mediainfo")
///     .build();
/// assert_eq!(config.duration_tolerance_secs, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyConfig {
    /// Maximum allowed difference between original and candidate duration
    pub duration_tolerance_secs: u64,

    /// Path or command name of the mediainfo executable
    pub mediainfo_path: PathBuf,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            duration_tolerance_secs: DEFAULT_DURATION_TOLERANCE_SECS,
            mediainfo_path: PathBuf::from(DEFAULT_MEDIAINFO_BINARY),
        }
    }
}

impl VerifyConfig {
    /// Checks the configuration for values the probe cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.mediainfo_path.as_os_str().is_empty() {
            return Err(CoreError::Config(
                "mediainfo path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VerifyConfig::default();
        assert_eq!(config.duration_tolerance_secs, 1);
        assert_eq!(config.mediainfo_path, PathBuf::from("mediainfo"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_mediainfo_path_is_rejected() {
        let config = VerifyConfig {
            mediainfo_path: PathBuf::new(),
            ..VerifyConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }
}
