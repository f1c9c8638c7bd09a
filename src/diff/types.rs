//! Per-file change data produced by the diff parser.

use crate::range::LineRange;

/// One file's changes from a unified diff.
///
/// `old_ranges` are the touched lines on the base side, `new_ranges` the
/// touched lines on the head side, one range per hunk side in diff order.
/// Ranges are not merged across hunks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileChange {
    /// Repository-relative path on the base side (`/dev/null` for new files).
    pub old_path: String,
    /// Repository-relative path on the head side (`/dev/null` for deletions).
    pub new_path: String,
    pub is_new: bool,
    pub is_deleted: bool,
    pub old_ranges: Vec<LineRange>,
    pub new_ranges: Vec<LineRange>,
}

impl FileChange {
    /// The path used for reporting and filtering: the new path, or the old
    /// path when the file was deleted.
    pub fn display_path(&self) -> &str {
        if self.is_deleted {
            &self.old_path
        } else {
            &self.new_path
        }
    }
}
