//! MediaInfo integration for duration and encoder lookups
//!
//! Two invocations are used per file:
//! - `--Inform=General;%Duration/String3%` prints the container duration as
//!   `HH:MM:SS.mmm`, or an empty line when the file has none.
//! - `--Output=JSON` prints the full track list, from which the video
//!   track's encoding library is read.
//!
//! Every failure along the way collapses to "absent" or `"unknown"`.

use super::{MediaProbe, UNKNOWN_ENCODER};
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

const DURATION_INFORM: &str = "--Inform=General;%Duration/String3%";

/// Video track fields that may carry the encoder name, most specific first.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MediaInfoTrack {
    #[serde(rename = "@type", default)]
    pub track_type: String,
    #[serde(rename = "Encoded_Library")]
    pub encoded_library: Option<String>,
    #[serde(rename = "Writing_library")]
    pub writing_library: Option<String>,
    #[serde(rename = "Encoded_Library_Name")]
    pub encoded_library_name: Option<String>,
}

/// MediaInfo media container
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MediaInfoMedia {
    #[serde(default)]
    pub track: Vec<MediaInfoTrack>,
}

/// Root MediaInfo response structure. `media` is null for unreadable files.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MediaInfoResponse {
    pub media: Option<MediaInfoMedia>,
}

/// MediaProbe backed by the mediainfo command line tool.
#[derive(Debug, Clone)]
pub struct MediainfoProbe {
    program: PathBuf,
}

impl Default for MediainfoProbe {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MEDIAINFO_BINARY)
    }
}

impl MediainfoProbe {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Runs mediainfo with the given format argument and returns stdout.
    fn run(&self, format_arg: &str, path: &Path) -> CoreResult<String> {
        let name = self.program.display().to_string();
        log::debug!("Running {} {} on: {}", name, format_arg, path.display());

        let output = Command::new(&self.program)
            .arg(format_arg)
            .arg(path)
            .output()
            .map_err(|e| command_start_error(&name, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(command_failed_error(&name, output.status, stderr.to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Gets the parsed `--Output=JSON` document for a file.
    pub fn media_info(&self, path: &Path) -> CoreResult<MediaInfoResponse> {
        let stdout = self.run("--Output=JSON", path)?;
        serde_json::from_str(&stdout).map_err(|e| {
            CoreError::JsonParse(format!(
                "Failed to parse mediainfo JSON output for {}: {}",
                path.display(),
                e
            ))
        })
    }
}

impl MediaProbe for MediainfoProbe {
    fn probe_duration(&self, path: &Path) -> Option<String> {
        match self.run(DURATION_INFORM, path) {
            Ok(stdout) => {
                let duration = duration_from_inform_output(&stdout);
                if duration.is_none() {
                    log::info!("Could not find duration for {}", path.display());
                }
                duration
            }
            Err(e) => {
                log::warn!("mediainfo duration lookup failed for {}: {}", path.display(), e);
                None
            }
        }
    }

    fn probe_encoder(&self, path: &Path) -> String {
        match self.media_info(path) {
            Ok(info) => encoder_from_media_info(&info).unwrap_or_else(|| {
                log::debug!("No encoding library reported for {}", path.display());
                UNKNOWN_ENCODER.to_string()
            }),
            Err(e) => {
                log::warn!("mediainfo encoder lookup failed for {}: {}", path.display(), e);
                UNKNOWN_ENCODER.to_string()
            }
        }
    }
}

/// Extracts the duration line from `--Inform` output; blank means absent.
pub fn duration_from_inform_output(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Finds the encoder label across all video tracks.
///
/// Each field is looked up in every video track before falling back to the
/// next one, so a cover-art track listed first does not hide the encoder of
/// the main stream.
pub fn encoder_from_media_info(info: &MediaInfoResponse) -> Option<String> {
    let video_tracks: Vec<&MediaInfoTrack> = info
        .media
        .as_ref()?
        .track
        .iter()
        .filter(|track| track.track_type == "Video")
        .collect();

    let fields: [fn(&MediaInfoTrack) -> Option<&String>; 3] = [
        |track| track.encoded_library.as_ref(),
        |track| track.writing_library.as_ref(),
        |track| track.encoded_library_name.as_ref(),
    ];

    fields.iter().find_map(|field| {
        video_tracks
            .iter()
            .filter_map(|track| field(track))
            .map(|value| value.trim())
            .find(|value| !value.is_empty())
            .map(str::to_string)
    })
}
