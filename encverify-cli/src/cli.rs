// encverify-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use encverify_core::config::{DEFAULT_DURATION_TOLERANCE_SECS, DEFAULT_MEDIAINFO_BINARY};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "encverify: Re-encode verification",
    long_about = "Checks that a re-encoded media file can replace its original by comparing \
                  duration and size, and computes content digests for identity tracking."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// mediainfo executable to use for probing
    #[arg(
        long = "mediainfo-bin",
        global = true,
        value_name = "PATH",
        env = "ENCVERIFY_MEDIAINFO",
        default_value = DEFAULT_MEDIAINFO_BINARY
    )]
    pub mediainfo_bin: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compares a re-encoded file against its original
    Verify(VerifyArgs),
    /// Prints content digests of files
    Hash(HashArgs),
    /// Shows what mediainfo reports for a file
    Probe(ProbeArgs),
}

#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// The file that was transcoded
    #[arg(required = true, value_name = "ORIGINAL")]
    pub original: PathBuf,

    /// The transcoder's output
    #[arg(required = true, value_name = "CANDIDATE")]
    pub candidate: PathBuf,

    /// Largest duration difference, in seconds, that still passes
    #[arg(short, long, value_name = "SECONDS", default_value_t = DEFAULT_DURATION_TOLERANCE_SECS)]
    pub tolerance: u64,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct HashArgs {
    /// Files to hash
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Print digests as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ProbeArgs {
    /// Media file to inspect
    #[arg(required = true, value_name = "FILE")]
    pub file: PathBuf,

    /// Print the probe result as JSON
    #[arg(long)]
    pub json: bool,
}
