// encverify-cli/src/commands/probe.rs
//
// The `probe` command: shows the raw duration mediainfo reports, how it was
// parsed, and the encoder label. Useful when a verify run came back
// undetermined.

use std::path::Path;

use encverify_core::{
    CoreError, CoreResult, DurationReading, MediaProbe, MediainfoProbe, ProbeResult,
    check_dependency, read_duration,
};
use encverify_core::error::file_access_error;
use serde::Serialize;

use crate::cli::{Cli, ProbeArgs};
use crate::config::EXIT_SUCCESS;
use crate::output::{print_heading, print_info};

/// JSON shape of `probe --json`: the probe result plus the parsed length.
#[derive(Debug, Serialize)]
pub struct ProbeOutput<'a> {
    pub path: &'a Path,
    #[serde(flatten)]
    pub result: &'a ProbeResult,
    pub parsed_seconds: Option<u64>,
}

/// Human-readable form of a parsed duration reading.
pub fn describe_reading(reading: &DurationReading) -> String {
    match reading {
        DurationReading::Parsed(duration) => format!("{} ({} s)", duration, duration.as_secs()),
        DurationReading::Unparseable(_) => "unparseable".to_string(),
        DurationReading::Absent => "absent".to_string(),
    }
}

/// Execute the probe command
pub fn run_probe(cli: &Cli, args: &ProbeArgs) -> CoreResult<i32> {
    check_dependency(&cli.mediainfo_bin)?;
    std::fs::metadata(&args.file).map_err(|e| file_access_error(&args.file, e))?;

    let probe = MediainfoProbe::new(&cli.mediainfo_bin);
    let result = probe.probe(&args.file);
    let reading = read_duration(result.duration.as_deref());

    if args.json {
        let output = ProbeOutput {
            path: &args.file,
            result: &result,
            parsed_seconds: reading.duration().map(|d| d.as_secs()),
        };
        let text = serde_json::to_string_pretty(&output)
            .map_err(|e| CoreError::JsonParse(format!("Failed to serialize probe result: {}", e)))?;
        println!("{}", text);
    } else {
        print_heading("Media Probe");
        print_info("File", args.file.display());
        print_info("Raw duration", result.duration.as_deref().unwrap_or("absent"));
        print_info("Parsed duration", describe_reading(&reading));
        print_info("Encoder", &result.encoder);
    }

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_reading() {
        assert_eq!(describe_reading(&read_duration(Some("01:30:05.120"))), "01:30:05 (5405 s)");
        assert_eq!(describe_reading(&read_duration(Some("soon"))), "unparseable");
        assert_eq!(describe_reading(&read_duration(None)), "absent");
    }

    #[test]
    fn test_probe_output_json_fields() {
        let result = ProbeResult {
            duration: Some("01:30:05;12".to_string()),
            encoder: "x265 - 3.5".to_string(),
        };
        let output = ProbeOutput {
            path: Path::new("movie.mkv"),
            result: &result,
            parsed_seconds: Some(5405),
        };

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["path"], "movie.mkv");
        assert_eq!(value["duration"], "01:30:05;12");
        assert_eq!(value["encoder"], "x265 - 3.5");
        assert_eq!(value["parsed_seconds"], 5405);
    }
}
