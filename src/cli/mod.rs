//! CLI argument parsing for git-sandwich.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Flags left unset fall back to the config file, then to defaults
//! (see [`crate::config::Settings::resolve`]).

use clap::Parser;
use std::path::PathBuf;

/// Validate that changes are within BEGIN/END sandwich blocks.
///
/// git-sandwich verifies that all changes in a git diff are within
/// designated BEGIN/END blocks. Changes outside these blocks are rejected.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "git-sandwich")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Restrict the diff to these paths.
    #[arg(value_name = "PATHS")]
    pub paths: Vec<String>,

    /// BEGIN marker regex.
    #[arg(long, value_name = "REGEX")]
    pub start: Option<String>,

    /// END marker regex.
    #[arg(long, value_name = "REGEX")]
    pub end: Option<String>,

    /// Base ref for comparison [default: origin/main].
    #[arg(long, value_name = "REF")]
    pub base: Option<String>,

    /// Head ref for comparison [default: HEAD].
    #[arg(long, value_name = "REF")]
    pub head: Option<String>,

    /// Allow nested blocks.
    #[arg(long)]
    pub allow_nesting: bool,

    /// Allow outside changes when a boundary line also changed.
    #[arg(long)]
    pub allow_boundary_with_outside: bool,

    /// Output in JSON format.
    #[arg(long)]
    pub json: bool,

    /// Glob pattern for files to include (repeatable).
    #[arg(long = "include", value_name = "GLOB")]
    pub include: Vec<String>,

    /// Glob pattern for files to exclude (repeatable).
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Path to config file [default: .git-sandwich.yml].
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in this directory.
    #[arg(short = 'C', value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
