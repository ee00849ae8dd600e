// encverify-core/src/external/mocks.rs

// --- In-memory implementations of the external traits ---

use super::{FileMetadataProvider, MediaProbe, UNKNOWN_ENCODER};
use crate::error::{CoreResult, file_access_error};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
struct MockMedia {
    duration: Option<String>,
    encoder: String,
}

/// MediaProbe answering from a fixed table. Unknown paths behave like a file
/// mediainfo could not read: no duration, `"unknown"` encoder.
#[derive(Debug, Clone, Default)]
pub struct MockProbe {
    files: HashMap<PathBuf, MockMedia>,
}

impl MockProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(
        mut self,
        path: impl Into<PathBuf>,
        duration: Option<&str>,
        encoder: &str,
    ) -> Self {
        self.files.insert(
            path.into(),
            MockMedia {
                duration: duration.map(str::to_string),
                encoder: encoder.to_string(),
            },
        );
        self
    }

    /// Shorthand for a file whose encoder does not matter.
    pub fn with_duration(self, path: impl Into<PathBuf>, duration: &str) -> Self {
        self.with_file(path, Some(duration), UNKNOWN_ENCODER)
    }
}

impl MediaProbe for MockProbe {
    fn probe_duration(&self, path: &Path) -> Option<String> {
        self.files.get(path).and_then(|media| media.duration.clone())
    }

    fn probe_encoder(&self, path: &Path) -> String {
        self.files
            .get(path)
            .map(|media| media.encoder.clone())
            .unwrap_or_else(|| UNKNOWN_ENCODER.to_string())
    }
}

/// FileMetadataProvider with fixed sizes. Unknown paths fail like a missing file.
#[derive(Debug, Clone, Default)]
pub struct MockMetadataProvider {
    sizes: HashMap<PathBuf, u64>,
}

impl MockMetadataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, path: impl Into<PathBuf>, size: u64) -> Self {
        self.sizes.insert(path.into(), size);
        self
    }
}

impl FileMetadataProvider for MockMetadataProvider {
    fn get_size(&self, path: &Path) -> CoreResult<u64> {
        self.sizes.get(path).copied().ok_or_else(|| {
            file_access_error(
                path,
                io::Error::new(io::ErrorKind::NotFound, "no such file"),
            )
        })
    }
}
