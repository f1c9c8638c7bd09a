//! Core diff parsing logic.

use crate::error::{Result, SandwichError};
use crate::range::LineRange;

use super::helpers::{
    DEV_NULL, clean_path, clean_rename_path, parse_diff_git_line, parse_hunk_header,
};
use super::types::FileChange;

/// Parse a unified diff into per-file changed line ranges.
///
/// The diff is expected to be produced with zero context lines (`-U0`), so
/// every touched line is covered by a hunk. Both `diff --git` sections and
/// plain `---`/`+++` sections are accepted.
///
/// # Arguments
///
/// * `diff_output` - Raw unified diff text
///
/// # Returns
///
/// * `Ok(Vec<FileChange>)` - One entry per file section, in diff order
/// * `Err(SandwichError::DiffParseError)` - Malformed diff; no partial result
pub fn parse_diff(diff_output: &str) -> Result<Vec<FileChange>> {
    let mut parser = DiffParser::default();
    let mut last_line = 0;

    for (idx, line) in diff_output.lines().enumerate() {
        last_line = idx + 1;
        parser.feed(last_line, line)?;
    }

    parser.finish(last_line)
}

/// A file section being assembled.
#[derive(Debug, Default)]
struct PendingFile {
    change: FileChange,
    /// Diff line on which the section started (for error messages).
    start_line: usize,
    /// Paths came from a `diff --git` header.
    git_header: bool,
    saw_old_header: bool,
    saw_new_header: bool,
    saw_hunk: bool,
}

impl PendingFile {
    fn new(start_line: usize) -> Self {
        Self {
            start_line,
            ..Default::default()
        }
    }

    fn has_paths(&self) -> bool {
        self.git_header || (self.saw_old_header && self.saw_new_header)
    }

    fn apply_extended_header(&mut self, line: &str) {
        if line.starts_with("new file mode ") {
            self.change.is_new = true;
        } else if line.starts_with("deleted file mode ") {
            self.change.is_deleted = true;
        } else if let Some(path) = line.strip_prefix("rename from ") {
            self.change.old_path = clean_rename_path(path);
        } else if let Some(path) = line.strip_prefix("rename to ") {
            self.change.new_path = clean_rename_path(path);
        }
        // index, mode changes, similarity, "Binary files ... differ": no ranges.
    }

    fn into_change(self) -> Result<FileChange> {
        let mut change = self.change;
        if change.is_new && change.is_deleted {
            return Err(SandwichError::diff_parse(
                self.start_line,
                "file section is both created and deleted",
            ));
        }
        if change.is_new && change.old_path.is_empty() {
            change.old_path = DEV_NULL.to_string();
        }
        if change.is_deleted && change.new_path.is_empty() {
            change.new_path = DEV_NULL.to_string();
        }
        Ok(change)
    }
}

/// Remaining line budget of the hunk body being read.
#[derive(Debug, Clone, Copy)]
struct HunkBody {
    old_left: usize,
    new_left: usize,
}

impl HunkBody {
    fn is_open(&self) -> bool {
        self.old_left > 0 || self.new_left > 0
    }

    fn consume(&mut self, line_no: usize, line: &str) -> Result<()> {
        match line.as_bytes().first() {
            Some(b'+') => take(&mut self.new_left, line_no),
            Some(b'-') => take(&mut self.old_left, line_no),
            // Some tools strip the single space from blank context lines.
            Some(b' ') | None => {
                take(&mut self.old_left, line_no)?;
                take(&mut self.new_left, line_no)
            }
            Some(b'\\') => Ok(()),
            _ => Err(SandwichError::diff_parse(
                line_no,
                format!("malformed hunk line: {}", preview(line)),
            )),
        }
    }
}

fn take(left: &mut usize, line_no: usize) -> Result<()> {
    if *left == 0 {
        return Err(SandwichError::diff_parse(
            line_no,
            "hunk body exceeds header counts",
        ));
    }
    *left -= 1;
    Ok(())
}

#[derive(Debug, Default)]
struct DiffParser {
    files: Vec<FileChange>,
    current: Option<PendingFile>,
    hunk: Option<HunkBody>,
}

impl DiffParser {
    fn feed(&mut self, line_no: usize, line: &str) -> Result<()> {
        if let Some(hunk) = self.hunk.as_mut() {
            if hunk.is_open() {
                return hunk.consume(line_no, line);
            }
            self.hunk = None;
        }

        // "\ No newline at end of file" after the last line of a hunk
        if line.starts_with('\\') {
            return Ok(());
        }

        // Format: "diff --git a/path/to/file b/path/to/file"
        if let Some(rest) = line.strip_prefix("diff --git ") {
            self.finish_current()?;
            let mut file = PendingFile::new(line_no);
            let (old, new) = parse_diff_git_line(rest).ok_or_else(|| {
                SandwichError::diff_parse(line_no, format!("malformed diff header: {}", preview(line)))
            })?;
            file.change.old_path = old;
            file.change.new_path = new;
            file.git_header = true;
            self.current = Some(file);
            return Ok(());
        }

        // Format: "--- /dev/null" or "--- a/path/to/file"
        if let Some(rest) = line.strip_prefix("--- ") {
            let starts_section = self
                .current
                .as_ref()
                .is_none_or(|f| f.saw_hunk || f.saw_old_header);
            if starts_section {
                self.finish_current()?;
                self.current = Some(PendingFile::new(line_no));
            }
            if let Some(file) = self.current.as_mut() {
                file.saw_old_header = true;
                if is_dev_null(rest) {
                    file.change.is_new = true;
                    file.change.old_path = DEV_NULL.to_string();
                } else {
                    file.change.old_path = clean_path(rest);
                }
            }
            return Ok(());
        }

        // Format: "+++ b/path/to/file" or "+++ /dev/null"
        if let Some(rest) = line.strip_prefix("+++ ") {
            let file = self
                .current
                .as_mut()
                .filter(|f| f.saw_old_header && !f.saw_new_header && !f.saw_hunk)
                .ok_or_else(|| {
                    SandwichError::diff_parse(line_no, "'+++' header without preceding '---'")
                })?;
            file.saw_new_header = true;
            if is_dev_null(rest) {
                file.change.is_deleted = true;
                file.change.new_path = DEV_NULL.to_string();
            } else {
                file.change.new_path = clean_path(rest);
            }
            return Ok(());
        }

        // Format: "@@ -old_start,old_len +new_start,new_len @@"
        if line.starts_with("@@") {
            let file = self
                .current
                .as_mut()
                .filter(|f| f.has_paths())
                .ok_or_else(|| {
                    SandwichError::diff_parse(line_no, "hunk header outside of a file section")
                })?;
            let header = parse_hunk_header(line).ok_or_else(|| {
                SandwichError::diff_parse(line_no, format!("malformed hunk header: {}", preview(line)))
            })?;

            if let Some(range) = LineRange::from_start_count(header.old_start, header.old_count) {
                file.change.old_ranges.push(range);
            }
            if let Some(range) = LineRange::from_start_count(header.new_start, header.new_count) {
                file.change.new_ranges.push(range);
            }
            file.saw_hunk = true;
            self.hunk = Some(HunkBody {
                old_left: header.old_count,
                new_left: header.new_count,
            });
            return Ok(());
        }

        if line.is_empty() {
            return Ok(());
        }

        match self.current.as_mut() {
            // Preamble before the first section (e.g. a patch email header)
            None => Ok(()),
            Some(file) if !file.saw_hunk => {
                file.apply_extended_header(line);
                Ok(())
            }
            Some(_) => Err(SandwichError::diff_parse(
                line_no,
                format!("unexpected line after hunk: {}", preview(line)),
            )),
        }
    }

    fn finish_current(&mut self) -> Result<()> {
        if let Some(file) = self.current.take() {
            if !file.has_paths() {
                return Err(SandwichError::diff_parse(
                    file.start_line,
                    "'---' header without matching '+++'",
                ));
            }
            self.files.push(file.into_change()?);
        }
        Ok(())
    }

    fn finish(mut self, last_line: usize) -> Result<Vec<FileChange>> {
        if self.hunk.is_some_and(|h| h.is_open()) {
            return Err(SandwichError::diff_parse(
                last_line,
                "unexpected end of diff inside hunk",
            ));
        }
        self.finish_current()?;
        Ok(self.files)
    }
}

fn is_dev_null(raw: &str) -> bool {
    raw.split('\t').next().unwrap_or(raw).trim_end() == DEV_NULL
}

/// Shorten a diff line for inclusion in an error message.
fn preview(line: &str) -> String {
    const MAX: usize = 60;
    if line.chars().count() <= MAX {
        line.to_string()
    } else {
        let head: String = line.chars().take(MAX).collect();
        format!("{}...", head)
    }
}
