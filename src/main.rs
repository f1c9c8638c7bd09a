//! git-sandwich: reject changes that fall outside BEGIN/END sandwich blocks.
//!
//! This is the main entry point for the `git-sandwich` CLI. It parses
//! arguments, runs the check, and maps the verdict or error to an exit code.

use git_sandwich::cli::Cli;
use git_sandwich::{commands, exit_codes, telemetry};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    telemetry::init(cli.verbose);

    match commands::run(cli) {
        Ok(true) => ExitCode::from(exit_codes::SUCCESS as u8),
        Ok(false) => ExitCode::from(exit_codes::VALIDATION_FAILURE as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
