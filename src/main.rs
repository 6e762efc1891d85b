//! Trellis: scaffolding CLI for trellis orchestration projects.
//!
//! This is the main entry point for the `trellis` CLI. It parses arguments,
//! builds the component registry, dispatches to the appropriate command
//! handler, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod generate;
pub mod params;
pub mod registry;
pub mod scaffold;
#[cfg(test)]
mod test_support;

use cli::Cli;
use colored::Colorize;
use registry::ComponentRegistry;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // The registry is built once per invocation and read-only afterwards.
    let registry = ComponentRegistry::with_builtins();

    match commands::dispatch(cli.command, &registry) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("{}", format!("Error: {}", err).red());

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
