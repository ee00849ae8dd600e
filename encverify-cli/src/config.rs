// encverify-cli/src/config.rs
//
// Exit codes and the mapping from parsed arguments to the core configuration.

use encverify_core::{CoreResult, Verdict, VerifyConfig, VerifyConfigBuilder};

use crate::cli::{Cli, VerifyArgs};

/// Every check passed / every file hashed.
pub const EXIT_SUCCESS: i32 = 0;
/// Hard error: missing file, unusable mediainfo, bad configuration.
pub const EXIT_ERROR: i32 = 1;
/// A check detected a mismatch; someone should look at the file.
pub const EXIT_REVIEW: i32 = 2;
/// A check could not be judged.
pub const EXIT_UNDETERMINED: i32 = 3;

/// Builds and validates the core configuration for a verify run.
pub fn verify_config(cli: &Cli, args: &VerifyArgs) -> CoreResult<VerifyConfig> {
    let config = VerifyConfigBuilder::new()
        .duration_tolerance_secs(args.tolerance)
        .mediainfo_path(cli.mediainfo_bin.clone())
        .build();
    config.validate()?;
    Ok(config)
}

pub fn exit_code_for(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Accept => EXIT_SUCCESS,
        Verdict::Review => EXIT_REVIEW,
        Verdict::Undetermined => EXIT_UNDETERMINED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Commands;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes_are_distinct() {
        assert_eq!(exit_code_for(Verdict::Accept), 0);
        assert_eq!(exit_code_for(Verdict::Review), 2);
        assert_eq!(exit_code_for(Verdict::Undetermined), 3);
    }

    #[test]
    fn test_verify_config_from_args() {
        let cli = Cli::parse_from([
            "encverify",
            "--mediainfo-bin",
            "/usr/bin/mediainfo",
            "verify",
            "a.mkv",
            "b.mkv",
            "-t",
            "4",
        ]);
        let Commands::Verify(args) = &cli.command else {
            panic!("Expected Verify command");
        };

        let config = verify_config(&cli, args).unwrap();
        assert_eq!(config.duration_tolerance_secs, 4);
        assert_eq!(config.mediainfo_path, PathBuf::from("/usr/bin/mediainfo"));
    }
}
