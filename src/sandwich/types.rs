//! Validation options and result types.

use super::block::Markers;
use crate::range::LineRange;
use std::fmt;

/// Everything a validation run needs besides the revision source.
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    pub markers: Markers,
    pub base_ref: String,
    pub head_ref: String,
    /// Allow a BEGIN while another block is still open.
    pub allow_nesting: bool,
    /// Let a file pass with outside changes when a marker line also changed.
    pub allow_boundary_with_outside: bool,
    /// Restrict diff retrieval to these paths (empty means whole tree).
    pub paths: Vec<String>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// Why a file was not classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Created by the diff; its content is outside the gate's concern.
    NewFile,
    /// The base side is absent or has no markers.
    NoBlocksInBase,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NewFile => write!(f, "new file"),
            SkipReason::NoBlocksInBase => write!(f, "no blocks in base"),
        }
    }
}

/// Outcome of classifying a file's changed lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub passed: bool,
    pub outside_base: Vec<LineRange>,
    pub outside_head: Vec<LineRange>,
    /// A BEGIN or END line was touched on either side.
    pub boundary_changed: bool,
}

/// Terminal state of one file. Exactly one applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Classified(Classification),
    /// Marker structure was malformed or a side could not be read.
    BlockError(String),
    Skipped(SkipReason),
}

/// Validation result for a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub path: String,
    pub outcome: FileOutcome,
}

impl FileResult {
    pub fn skipped(path: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            path: path.into(),
            outcome: FileOutcome::Skipped(reason),
        }
    }

    pub fn block_error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            outcome: FileOutcome::BlockError(message.into()),
        }
    }

    pub fn classified(path: impl Into<String>, classification: Classification) -> Self {
        Self {
            path: path.into(),
            outcome: FileOutcome::Classified(classification),
        }
    }

    /// Skipped files count as successful.
    pub fn success(&self) -> bool {
        match &self.outcome {
            FileOutcome::Classified(c) => c.passed,
            FileOutcome::BlockError(_) => false,
            FileOutcome::Skipped(_) => true,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, FileOutcome::Skipped(_))
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self.outcome {
            FileOutcome::Skipped(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Aggregate validation result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub success: bool,
    pub files: Vec<FileResult>,
}

impl ValidationResult {
    /// Result for an empty diff.
    pub fn empty() -> Self {
        Self {
            success: true,
            files: Vec::new(),
        }
    }

    /// Aggregate per-file results; success iff every non-skipped file passed.
    pub fn from_files(files: Vec<FileResult>) -> Self {
        let success = files.iter().all(FileResult::success);
        Self { success, files }
    }
}
