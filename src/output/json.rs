//! Machine-readable result rendering.

use crate::error::{Result, SandwichError};
use crate::range::LineRange;
use crate::sandwich::{FileOutcome, FileResult, ValidationResult};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    success: bool,
    files: Vec<JsonFile<'a>>,
}

/// Flat per-file view; only the fields of the active outcome are emitted.
#[derive(Debug, Serialize)]
struct JsonFile<'a> {
    path: &'a str,
    success: bool,
    #[serde(skip_serializing_if = "no_ranges")]
    outside_base: &'a [LineRange],
    #[serde(skip_serializing_if = "no_ranges")]
    outside_head: &'a [LineRange],
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    boundary_changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    block_error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skip_reason: Option<String>,
}

fn no_ranges(ranges: &&[LineRange]) -> bool {
    ranges.is_empty()
}

impl<'a> From<&'a FileResult> for JsonFile<'a> {
    fn from(file: &'a FileResult) -> Self {
        let mut json = JsonFile {
            path: &file.path,
            success: file.success(),
            outside_base: &[],
            outside_head: &[],
            boundary_changed: false,
            block_error: None,
            skip_reason: None,
        };
        match &file.outcome {
            FileOutcome::Classified(c) => {
                json.outside_base = &c.outside_base;
                json.outside_head = &c.outside_head;
                json.boundary_changed = c.boundary_changed;
            }
            FileOutcome::BlockError(message) => json.block_error = Some(message.as_str()),
            FileOutcome::Skipped(reason) => json.skip_reason = Some(reason.to_string()),
        }
        json
    }
}

/// Write the validation result as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(w: &mut W, result: &ValidationResult) -> Result<()> {
    let report = JsonReport {
        success: result.success,
        files: result.files.iter().map(JsonFile::from).collect(),
    };

    serde_json::to_writer_pretty(&mut *w, &report)
        .map_err(|e| SandwichError::UserError(format!("failed to write JSON output: {}", e)))?;
    writeln!(w)
        .map_err(|e| SandwichError::UserError(format!("failed to write JSON output: {}", e)))
}
