//! Classification of changed lines against sandwich blocks.

use super::block::Block;
use crate::range::{LineRange, push_line};

/// Where a single line sits relative to a set of blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Strictly inside some block.
    Inside,
    /// A BEGIN or END marker line of some block (and inside none).
    Boundary,
    /// Neither inside nor a marker line.
    Outside,
}

/// Changed lines that are not inside any block, grouped into ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    pub outside: Vec<LineRange>,
    pub boundary: Vec<LineRange>,
}

/// Classify one line. Containment wins over being a marker of another block.
pub fn classify_line(line: usize, blocks: &[Block]) -> LineClass {
    if blocks.iter().any(|b| b.contains_line(line)) {
        LineClass::Inside
    } else if blocks.iter().any(|b| b.is_boundary(line)) {
        LineClass::Boundary
    } else {
        LineClass::Outside
    }
}

/// Classify every line of `ranges` against `blocks`.
///
/// Inside lines are dropped. Outside and boundary lines are merged into
/// contiguous ranges across the whole input, so adjacent hunks collapse
/// into one range when their lines classify the same way.
pub fn classify(ranges: &[LineRange], blocks: &[Block]) -> Classified {
    let mut result = Classified::default();

    for line in ranges.iter().flat_map(LineRange::lines) {
        match classify_line(line, blocks) {
            LineClass::Inside => {}
            LineClass::Boundary => push_line(&mut result.boundary, line),
            LineClass::Outside => push_line(&mut result.outside, line),
        }
    }

    result
}

/// Like [`classify`], but marker lines count as acceptable.
///
/// Used for deleted files, where there is no head side to hold a boundary
/// change against.
pub fn find_outside(ranges: &[LineRange], blocks: &[Block]) -> Vec<LineRange> {
    let mut outside = Vec::new();

    for line in ranges.iter().flat_map(LineRange::lines) {
        if classify_line(line, blocks) == LineClass::Outside {
            push_line(&mut outside, line);
        }
    }

    outside
}
