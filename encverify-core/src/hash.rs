//! Content digests for identity tracking of media files.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Serialize;
use sha1::{Digest, Sha1};

use crate::error::{CoreResult, file_access_error};

/// Read size per update; media files are far larger than memory allows.
const CHUNK_SIZE: usize = 1024 * 1024;

/// Lowercase hex SHA-1 of a file's bytes (40 characters).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ContentDigest(String);

impl ContentDigest {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Streams any reader through SHA-1 in fixed-size chunks.
pub fn digest_reader<R: Read>(mut reader: R) -> io::Result<ContentDigest> {
    let mut hasher = Sha1::new();
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        let read = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..read]);
    }

    Ok(ContentDigest(hex::encode(hasher.finalize())))
}

/// Computes the content digest of the file at `path`.
///
/// # Errors
///
/// Returns `CoreError::FileAccess` if the file cannot be opened or read.
pub fn content_digest(path: &Path) -> CoreResult<ContentDigest> {
    let file = File::open(path).map_err(|e| file_access_error(path, e))?;
    let digest = digest_reader(file).map_err(|e| file_access_error(path, e))?;
    log::debug!("Digest of {}: {}", path.display(), digest);
    Ok(digest)
}
