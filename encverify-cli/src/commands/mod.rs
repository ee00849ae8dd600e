//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command and
//! returns the process exit code on success.

/// Module containing the implementation of the `verify` command.
/// Compares a re-encoded file against its original.
pub mod verify;

/// Module containing the implementation of the `hash` command.
pub mod hash;

/// Module containing the implementation of the `probe` command.
pub mod probe;
