// ============================================================================
// encverify-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger Initialization
//
// The core library logs through the `log` facade; this file installs the
// env_logger backend. Logs go to stderr so that stdout carries only the
// report (which may be JSON).
//
// USAGE:
// - default: info
// - --verbose: debug
// - RUST_LOG overrides both, e.g. RUST_LOG=encverify_core=trace

use env_logger::Env;

/// Default filter string for the given verbosity.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Installs the global logger. Safe to call once per process.
pub fn init_logging(verbose: bool) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format_timestamp_secs()
        .format_target(false)
        .init();
}

/// Returns the current local timestamp formatted for report headers.
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
