//! Error types for git-sandwich.
//!
//! Uses thiserror for derive macros. Only run-fatal conditions live here;
//! marker structure problems are per-file and reported through
//! [`crate::sandwich::StructureError`] instead.

use crate::exit_codes;
use thiserror::Error;

/// Run-fatal error for git-sandwich operations.
///
/// Any of these aborts the run before a result is produced.
#[derive(Error, Debug)]
pub enum SandwichError {
    /// Invalid arguments, patterns or configuration.
    #[error("{0}")]
    UserError(String),

    /// The unified diff could not be parsed.
    #[error("failed to parse diff at line {line}: {message}")]
    DiffParseError { line: usize, message: String },

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),
}

impl SandwichError {
    /// Build a diff parse error for the given 1-indexed diff line.
    pub fn diff_parse(line: usize, message: impl Into<String>) -> Self {
        SandwichError::DiffParseError {
            line,
            message: message.into(),
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SandwichError::UserError(_) => exit_codes::USER_ERROR,
            SandwichError::DiffParseError { .. } => exit_codes::GIT_FAILURE,
            SandwichError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for git-sandwich operations.
pub type Result<T> = std::result::Result<T, SandwichError>;
