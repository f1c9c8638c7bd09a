//! Logging setup for the git-sandwich binary.
//!
//! Diagnostics go to stderr so stdout stays clean for the text/JSON report.

use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "GIT_SANDWICH_LOG";

/// Filter used when `GIT_SANDWICH_LOG` is unset or invalid.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "git_sandwich=debug" } else { "warn" }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}
