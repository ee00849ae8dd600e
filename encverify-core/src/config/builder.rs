// ============================================================================
// encverify-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for VerifyConfig
//
// Fluent construction of VerifyConfig. Every field has a default, so build()
// never fails; call VerifyConfig::validate() on the result before use.

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::VerifyConfig;

/// Builder for creating VerifyConfig instances.
#[derive(Debug, Clone)]
pub struct VerifyConfigBuilder {
    duration_tolerance_secs: u64,
    mediainfo_path: PathBuf,
}

impl Default for VerifyConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VerifyConfigBuilder {
    /// Creates a new VerifyConfigBuilder with default values.
    pub fn new() -> Self {
        Self {
            duration_tolerance_secs: super::DEFAULT_DURATION_TOLERANCE_SECS,
            mediainfo_path: PathBuf::from(super::DEFAULT_MEDIAINFO_BINARY),
        }
    }

    /// Sets the allowed duration difference.
    ///
    /// # Arguments
    ///
    /// * `seconds` - Largest difference, in whole seconds, that still passes
    ///
    /// # Returns
    ///
    /// * Self for method chaining
    pub fn duration_tolerance_secs(mut self, seconds: u64) -> Self {
        self.duration_tolerance_secs = seconds;
        self
    }

    /// Sets the mediainfo executable.
    ///
    /// # Arguments
    ///
    /// * `path` - Absolute path or a command name looked up in `PATH`
    ///
    /// # Returns
    ///
    /// * Self for method chaining
    pub fn mediainfo_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.mediainfo_path = path.into();
        self
    }

    /// Builds a VerifyConfig instance from the builder.
    pub fn build(self) -> VerifyConfig {
        VerifyConfig {
            duration_tolerance_secs: self.duration_tolerance_secs,
            mediainfo_path: self.mediainfo_path,
        }
    }
}
