//! Inclusive 1-indexed line ranges.

use serde::Serialize;
use std::fmt;

/// An inclusive, 1-indexed interval of line numbers with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    /// Create a range; the bounds are swapped if given in reverse.
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// A range covering a single line.
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }

    /// A range of `count` lines beginning at `start`, or `None` when empty
    /// or when the end would overflow.
    pub fn from_start_count(start: usize, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self {
            start,
            end: start.checked_add(count - 1)?,
        })
    }

    /// Number of lines covered.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always false; a range covers at least one line.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the covered line numbers in ascending order.
    pub fn lines(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Append `line` to `ranges`, extending the trailing range when contiguous.
///
/// Callers feed lines in ascending order, so the output never holds
/// overlapping or adjacent-but-unmerged ranges.
pub fn push_line(ranges: &mut Vec<LineRange>, line: usize) {
    if let Some(last) = ranges.last_mut() {
        if last.end + 1 == line {
            last.end = line;
            return;
        }
    }
    ranges.push(LineRange::single(line));
}

/// Total number of lines across `ranges`.
pub fn total_lines(ranges: &[LineRange]) -> usize {
    ranges.iter().map(LineRange::len).sum()
}
