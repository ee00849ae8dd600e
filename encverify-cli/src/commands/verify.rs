// encverify-cli/src/commands/verify.rs
//
// The `verify` command: size and duration checks for one original/candidate
// pair, printed as a report, with the verdict mapped to the exit code.

use encverify_core::{CoreError, CoreResult, MediainfoProbe, check_dependency, verify_pair};

use crate::cli::{Cli, VerifyArgs};
use crate::config::{exit_code_for, verify_config};
use crate::logging::get_timestamp;
use crate::output::print_report;

/// Execute the verify command
pub fn run_verify(cli: &Cli, args: &VerifyArgs) -> CoreResult<i32> {
    let config = verify_config(cli, args)?;
    check_dependency(&config.mediainfo_path)?;

    let started_at = get_timestamp();
    let probe = MediainfoProbe::new(&config.mediainfo_path);
    let report = verify_pair(&probe, &config, &args.original, &args.candidate)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| CoreError::JsonParse(format!("Failed to serialize report: {}", e)))?;
        println!("{}", json);
    } else {
        print_report(&report, &started_at);
    }

    Ok(exit_code_for(report.verdict))
}
