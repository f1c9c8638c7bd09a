//! Revision-content provider backed by the git CLI.
//!
//! The validator only needs two operations: a zero-context diff between two
//! revisions and the full content of a path at a revision. Both sit behind
//! [`RevisionSource`] so the core can run against an in-memory fake.

use crate::error::{Result, SandwichError};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Supplies diff text and whole-file content at a revision.
pub trait RevisionSource {
    /// Unified diff with zero context lines from `base` to `head`,
    /// optionally restricted to `paths`. Empty output means no changes.
    fn diff(&self, base: &str, head: &str, paths: &[String]) -> Result<String>;

    /// Content of `path` at `rev`, or `None` if the path does not exist there.
    fn file_content(&self, rev: &str, path: &str) -> Result<Option<String>>;
}

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output, untouched. Line numbers depend on every byte.
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Failure of a git command that ran but exited non-zero.
#[derive(Debug, Clone)]
struct GitFailure {
    exit_code: i32,
    output: GitOutput,
}

/// Run a git command in `cwd`, separating "ran and failed" from "could not run".
fn run_git_raw(cwd: &Path, args: &[&str]) -> Result<std::result::Result<GitOutput, GitFailure>> {
    debug!(cwd = %cwd.display(), ?args, "running git");

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            SandwichError::GitError(format!(
                "failed to execute git {}: {} (is git installed?)",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(Ok(git_output))
    } else {
        Ok(Err(GitFailure {
            exit_code: output.status.code().unwrap_or(-1),
            output: git_output,
        }))
    }
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(SandwichError::GitError)` - On spawn failure or non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    run_git_raw(cwd.as_ref(), args)?.map_err(|failure| failure_to_error(args, &failure))
}

fn failure_to_error(args: &[&str], failure: &GitFailure) -> SandwichError {
    let error_msg = if failure.output.stderr.is_empty() {
        failure.output.stdout.trim()
    } else {
        failure.output.stderr.as_str()
    };

    SandwichError::GitError(format!(
        "git {} failed (exit code {}): {}",
        args.first().unwrap_or(&""),
        failure.exit_code,
        error_msg
    ))
}

/// True if `git show` stderr says the path is absent at the revision.
fn is_missing_path(stderr: &str) -> bool {
    stderr.contains("does not exist")
        || stderr.contains("not exist in")
        || stderr.contains("fatal: path")
}

/// [`RevisionSource`] over a local git repository.
#[derive(Debug, Clone)]
pub struct GitSource {
    repo: PathBuf,
}

impl GitSource {
    /// Use the repository containing `repo` (any directory inside a work tree).
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self { repo: repo.into() }
    }

    pub fn repo(&self) -> &Path {
        &self.repo
    }
}

impl RevisionSource for GitSource {
    /// Runs `git diff -U0 {base}...{head} -- [paths]` (changes on head since
    /// the merge base). Prefixes and textconv are pinned so user config
    /// cannot change the output format.
    fn diff(&self, base: &str, head: &str, paths: &[String]) -> Result<String> {
        let range = format!("{}...{}", base, head);
        let mut args = vec![
            "diff",
            "-U0",
            "--no-color",
            "--no-ext-diff",
            "--no-textconv",
            "--src-prefix=a/",
            "--dst-prefix=b/",
            range.as_str(),
            "--",
        ];
        args.extend(paths.iter().map(String::as_str));

        Ok(run_git(&self.repo, &args)?.stdout)
    }

    /// Runs `git show {rev}:{path}`.
    fn file_content(&self, rev: &str, path: &str) -> Result<Option<String>> {
        let object = format!("{}:{}", rev, path);
        let args = ["show", "--no-color", object.as_str()];

        match run_git_raw(&self.repo, &args)? {
            Ok(output) => Ok(Some(output.stdout)),
            Err(failure) if is_missing_path(&failure.output.stderr) => {
                debug!(rev, path, "path absent at revision");
                Ok(None)
            }
            Err(failure) => Err(failure_to_error(&args, &failure)),
        }
    }
}
