//! Command implementation for git-sandwich.
//!
//! Resolves settings, runs the validator against the repository and renders
//! the report. The caller maps the returned verdict to an exit code.

use crate::cli::Cli;
use crate::config::{FileConfig, Settings};
use crate::error::{Result, SandwichError};
use crate::git::GitSource;
use crate::output::{write_json, write_text};
use crate::sandwich::validate;
use std::io::Write;
use std::path::PathBuf;


/// Run the check, printing the report to stdout.
///
/// # Returns
///
/// * `Ok(true)` - Every change is inside a sandwich block
/// * `Ok(false)` - Gate rejection; the report says why
/// * `Err(SandwichError)` - Run-fatal error, nothing was reported
pub fn run(cli: Cli) -> Result<bool> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_with_writer(cli, &mut handle)
}

/// Like [`run`], rendering the report into `out`.
pub fn run_with_writer<W: Write>(cli: Cli, out: &mut W) -> Result<bool> {
    let repo_dir = cli.repo.clone().unwrap_or_else(|| PathBuf::from("."));

    let file_config = FileConfig::discover(&cli, &repo_dir)?;
    let settings = Settings::resolve(&cli, file_config)?;
    let options = settings.to_options()?;

    let source = GitSource::new(&repo_dir);
    let result = validate(&source, &options)?;

    if settings.json {
        write_json(out, &result)?;
    } else {
        write_text(out, &result)
            .map_err(|e| SandwichError::UserError(format!("failed to write output: {}", e)))?;
    }

    Ok(result.success)
}
