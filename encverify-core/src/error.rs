//! Error types for encverify-core.
//!
//! Only hard failures live here. A duration that cannot be read or a file
//! that grew during re-encoding is a `VerificationOutcome`, not an error.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for encverify
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to access '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Required dependency '{0}' not found")]
    DependencyNotFound(String),

    #[error("Failed to start '{command}': {source}")]
    CommandStart {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for encverify operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Wraps an I/O error with the path that caused it.
pub fn file_access_error(path: &Path, source: std::io::Error) -> CoreError {
    CoreError::FileAccess {
        path: path.to_path_buf(),
        source,
    }
}

/// Builds the error for a command that could not be spawned.
pub fn command_start_error(command: &str, source: std::io::Error) -> CoreError {
    CoreError::CommandStart {
        command: command.to_string(),
        source,
    }
}

/// Builds the error for a command that ran but exited unsuccessfully.
pub fn command_failed_error(command: &str, status: ExitStatus, stderr: String) -> CoreError {
    CoreError::CommandFailed {
        command: command.to_string(),
        status,
        stderr: stderr.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_file_access_error_names_path() {
        let err = file_access_error(
            Path::new("/media/movie.mkv"),
            io::Error::new(io::ErrorKind::NotFound, "No such file"),
        );
        let message = err.to_string();
        assert!(message.contains("/media/movie.mkv"));
        assert!(message.contains("No such file"));
    }

    #[test]
    fn test_file_access_error_keeps_io_source() {
        use std::error::Error as _;

        let err = file_access_error(
            Path::new("/media/movie.mkv"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = err.source().and_then(|s| s.downcast_ref::<io::Error>());
        assert_eq!(source.map(io::Error::kind), Some(io::ErrorKind::PermissionDenied));
    }

    #[test]
    fn test_command_start_error_message() {
        let err = command_start_error(
            "mediainfo",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Failed to start 'mediainfo': denied");
    }
}
