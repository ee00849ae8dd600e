// ============================================================================
// encverify-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with mediainfo and the File System
//
// The verification policy never talks to mediainfo or the file system
// directly. It goes through the traits defined here so that tests can supply
// fixed durations and sizes.
//
// KEY COMPONENTS:
// - MediaProbe: duration and encoder lookup for a media file
// - FileMetadataProvider: file size lookup
// - MediainfoProbe / StdFsMetadataProvider: production implementations
// - MockProbe / MockMetadataProvider: in-memory implementations
// - Dependency checking

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult, command_start_error, file_access_error};

// ---- External crate imports ----
use serde::Serialize;

// ---- Standard library imports ----
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// mediainfo-backed implementation of MediaProbe
pub mod mediainfo_executor;

/// In-memory probe and metadata implementations
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use mediainfo_executor::MediainfoProbe;
pub use mocks::{MockMetadataProvider, MockProbe};

/// Encoder label reported when no library name can be found.
pub const UNKNOWN_ENCODER: &str = "unknown";

// ============================================================================
// MEDIA PROBE
// ============================================================================

/// What a probe learned about one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    /// Raw duration text exactly as reported, `None` if the field is missing
    pub duration: Option<String>,
    /// Encoding library label, [`UNKNOWN_ENCODER`] if not found
    pub encoder: String,
}

/// Capability to inspect a media file.
///
/// Implementations never fail: a tool that crashes, prints garbage or lacks
/// the field all surface the same way, as a missing duration or an
/// `"unknown"` encoder. Callers treat a missing duration as undetermined.
pub trait MediaProbe {
    /// Returns the raw duration string, or `None` if no duration was found.
    fn probe_duration(&self, path: &Path) -> Option<String>;

    /// Returns the encoding library label, or [`UNKNOWN_ENCODER`].
    fn probe_encoder(&self, path: &Path) -> String;

    /// Runs both lookups.
    fn probe(&self, path: &Path) -> ProbeResult {
        ProbeResult {
            duration: self.probe_duration(path),
            encoder: self.probe_encoder(path),
        }
    }
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that the mediainfo executable can be started.
///
/// Runs `<program> --Version` with output discarded. A missing binary maps
/// to `CoreError::DependencyNotFound`; any other spawn failure to
/// `CoreError::CommandStart`. The exit status is not inspected.
pub fn check_dependency(program: &Path) -> CoreResult<()> {
    let name = program.display().to_string();

    let result = Command::new(program)
        .arg("--Version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", name);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", name);
            Err(CoreError::DependencyNotFound(name))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", name, e);
            Err(command_start_error(&name, e))
        }
    }
}

// ============================================================================
// FILE METADATA ACCESS
// ============================================================================

/// Abstraction over file size lookups, so size policy can be tested without
/// writing gigabyte files.
pub trait FileMetadataProvider {
    /// Gets the size of the file at the given path in bytes.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::FileAccess` if the file cannot be stat'ed.
    fn get_size(&self, path: &Path) -> CoreResult<u64>;
}

/// Standard implementation of FileMetadataProvider using `std::fs::metadata`.
#[derive(Debug, Clone, Default)]
pub struct StdFsMetadataProvider;

impl FileMetadataProvider for StdFsMetadataProvider {
    fn get_size(&self, path: &Path) -> CoreResult<u64> {
        std::fs::metadata(path)
            .map(|metadata| metadata.len())
            .map_err(|e| file_access_error(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_std_fs_metadata_provider_reads_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 4096]).unwrap();
        file.flush().unwrap();

        let size = StdFsMetadataProvider.get_size(file.path()).unwrap();
        assert_eq!(size, 4096);
    }

    #[test]
    fn test_std_fs_metadata_provider_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.mkv");

        let err = StdFsMetadataProvider.get_size(&missing).unwrap_err();
        assert!(matches!(err, CoreError::FileAccess { .. }));
    }

    #[test]
    fn test_check_dependency_missing_binary() {
        let err = check_dependency(Path::new("encverify-no-such-binary-xyz")).unwrap_err();
        assert!(matches!(err, CoreError::DependencyNotFound(_)));
    }

    #[test]
    fn test_probe_combines_both_lookups() {
        let probe = MockProbe::new().with_file("movie.mkv", Some("00:01:00.000"), "x265");
        let result = probe.probe(Path::new("movie.mkv"));
        assert_eq!(
            result,
            ProbeResult {
                duration: Some("00:01:00.000".to_string()),
                encoder: "x265".to_string(),
            }
        );
    }
}
