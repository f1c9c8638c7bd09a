//! Human-readable result rendering.

use crate::range::LineRange;
use crate::sandwich::{FileOutcome, ValidationResult};
use std::io::{self, Write};

/// Write the validation result as text.
///
/// Skipped files are not listed. A bare `OK` line is printed when the run
/// passed.
pub fn write_text<W: Write>(w: &mut W, result: &ValidationResult) -> io::Result<()> {
    let checked: Vec<_> = result.files.iter().filter(|f| !f.is_skipped()).collect();

    for file in &checked {
        if file.success() {
            writeln!(w, "OK {}", file.path)?;
            continue;
        }

        writeln!(w, "FAIL {}", file.path)?;

        match &file.outcome {
            FileOutcome::BlockError(message) => writeln!(w, "  error: {}", message)?,
            FileOutcome::Classified(c) => {
                if !c.outside_base.is_empty() {
                    writeln!(w, "  outside(base): {}", format_ranges(&c.outside_base))?;
                }
                if !c.outside_head.is_empty() {
                    writeln!(w, "  outside(head): {}", format_ranges(&c.outside_head))?;
                }
                if c.boundary_changed {
                    writeln!(w, "  note: boundary changed")?;
                }
            }
            FileOutcome::Skipped(_) => {}
        }
    }

    if result.success {
        writeln!(w, "OK")?;
    }

    Ok(())
}

/// "lines 1-3, lines 7"
pub fn format_ranges(ranges: &[LineRange]) -> String {
    ranges
        .iter()
        .map(|r| format!("lines {}", r))
        .collect::<Vec<_>>()
        .join(", ")
}
