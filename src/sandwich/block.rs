//! BEGIN/END marker matching and block structure parsing.

use crate::error::{Result, SandwichError};
use regex::Regex;
use thiserror::Error;

/// A BEGIN/END sandwich block.
///
/// `start_line` is the BEGIN marker line and `end_line` the END marker line
/// (1-indexed, `start_line < end_line`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start_line: usize,
    pub end_line: usize,
}

impl Block {
    /// True if `line` lies strictly between the marker lines.
    pub fn contains_line(&self, line: usize) -> bool {
        line > self.start_line && line < self.end_line
    }

    /// True if `line` is one of the marker lines.
    pub fn is_boundary(&self, line: usize) -> bool {
        line == self.start_line || line == self.end_line
    }
}

/// Malformed marker structure in a file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("nested BEGIN at line {0} (nesting not allowed)")]
    NestedBegin(usize),

    #[error("END without matching BEGIN at line {0}")]
    UnmatchedEnd(usize),

    #[error("BEGIN without matching END at line {0}")]
    UnmatchedBegin(usize),
}

/// Compiled BEGIN and END marker patterns.
#[derive(Debug, Clone)]
pub struct Markers {
    begin: Regex,
    end: Regex,
}

impl Markers {
    /// Compile the BEGIN and END regexes.
    ///
    /// # Returns
    ///
    /// * `Ok(Markers)` - Both patterns compiled
    /// * `Err(SandwichError::UserError)` - Either pattern has invalid syntax
    pub fn new(begin: &str, end: &str) -> Result<Self> {
        Ok(Self {
            begin: compile_marker(begin, "start")?,
            end: compile_marker(end, "end")?,
        })
    }

    pub fn is_begin(&self, line: &str) -> bool {
        self.begin.is_match(line)
    }

    pub fn is_end(&self, line: &str) -> bool {
        self.end.is_match(line)
    }

    /// Cheap presence check: true iff any line matches either marker.
    ///
    /// Performs no structural validation.
    pub fn has_blocks(&self, content: &str) -> bool {
        content
            .lines()
            .any(|line| self.is_begin(line) || self.is_end(line))
    }

    /// Scan `content` and return its blocks in END-encounter order.
    ///
    /// A line matching BEGIN is treated as BEGIN even if it also matches END.
    /// With `allow_nesting` false, a BEGIN while another block is open fails.
    /// Inner blocks of a nest are emitted before their enclosing block.
    pub fn parse_blocks(
        &self,
        content: &str,
        allow_nesting: bool,
    ) -> std::result::Result<Vec<Block>, StructureError> {
        let mut blocks = Vec::new();
        // Pending BEGIN line numbers, innermost last.
        let mut open: Vec<usize> = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let line_num = idx + 1;

            if self.is_begin(line) {
                if !allow_nesting && !open.is_empty() {
                    return Err(StructureError::NestedBegin(line_num));
                }
                open.push(line_num);
            } else if self.is_end(line) {
                let start_line = open.pop().ok_or(StructureError::UnmatchedEnd(line_num))?;
                blocks.push(Block {
                    start_line,
                    end_line: line_num,
                });
            }
        }

        if let Some(&oldest) = open.first() {
            return Err(StructureError::UnmatchedBegin(oldest));
        }

        Ok(blocks)
    }
}

fn compile_marker(pattern: &str, flag: &str) -> Result<Regex> {
    if pattern.is_empty() {
        return Err(SandwichError::UserError(format!(
            "required option \"{}\" not set",
            flag
        )));
    }
    Regex::new(pattern).map_err(|e| {
        SandwichError::UserError(format!("invalid --{} regex '{}': {}", flag, pattern, e))
    })
}
