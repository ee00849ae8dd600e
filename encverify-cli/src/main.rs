// encverify-cli/src/main.rs
//
// Entry point of the `encverify` binary.
//
// Responsibilities:
// - Parsing command-line arguments.
// - Setting up logging (env_logger, stderr).
// - Dispatching to the command implementations.
// - Mapping results to exit codes: 0 accept, 2 review, 3 undetermined,
//   1 for any hard error.

use clap::Parser;
use encverify_cli::config::EXIT_ERROR;
use encverify_cli::logging::init_logging;
use encverify_cli::output::print_error;
use encverify_cli::{Cli, Commands, run_hash, run_probe, run_verify};
use std::process;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Verify(args) => run_verify(&cli, args),
        Commands::Hash(args) => run_hash(args),
        Commands::Probe(args) => run_probe(&cli, args),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            print_error(&e);
            process::exit(EXIT_ERROR);
        }
    }
}
