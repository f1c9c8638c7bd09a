//! Validation orchestration: diff → filter → per-file classification.

use super::block::Block;
use super::classify::{classify, find_outside};
use super::filter::PathFilter;
use super::types::{
    Classification, FileResult, SkipReason, ValidateOptions, ValidationResult,
};
use crate::diff::{FileChange, parse_diff};
use crate::error::Result;
use crate::git::RevisionSource;
use tracing::{debug, info, warn};

/// Validate every file in the diff between `options.base_ref` and
/// `options.head_ref`.
///
/// Files are processed one at a time in diff order.
///
/// # Returns
///
/// * `Ok(ValidationResult)` - Per-file results and the aggregate verdict
/// * `Err(SandwichError)` - Run-fatal: invalid glob, diff retrieval or parse
///   failure, or a provider error while reading a head-side file
pub fn validate<S: RevisionSource + ?Sized>(
    source: &S,
    options: &ValidateOptions,
) -> Result<ValidationResult> {
    let filter = PathFilter::new(&options.include, &options.exclude)?;

    let raw_diff = source.diff(&options.base_ref, &options.head_ref, &options.paths)?;
    if raw_diff.trim().is_empty() {
        info!(
            base = %options.base_ref,
            head = %options.head_ref,
            "no changes between revisions"
        );
        return Ok(ValidationResult::empty());
    }

    let changes = parse_diff(&raw_diff)?;
    let total = changes.len();
    let changes = filter.filter_files(changes);
    debug!(total, kept = changes.len(), "filtered changed files");

    let validator = FileValidator { source, options };
    let mut files = Vec::with_capacity(changes.len());
    for change in &changes {
        let result = validator.validate(change)?;
        debug!(path = %result.path, outcome = ?result.outcome, "validated file");
        files.push(result);
    }

    let result = ValidationResult::from_files(files);
    info!(
        files = result.files.len(),
        success = result.success,
        "sandwich validation finished"
    );
    Ok(result)
}

struct FileValidator<'a, S: ?Sized> {
    source: &'a S,
    options: &'a ValidateOptions,
}

impl<S: RevisionSource + ?Sized> FileValidator<'_, S> {
    fn validate(&self, change: &FileChange) -> Result<FileResult> {
        let path = change.display_path();

        if change.is_new {
            return Ok(self.validate_new(change));
        }

        let base_content = match self
            .source
            .file_content(&self.options.base_ref, &change.old_path)
        {
            Ok(content) => content,
            Err(e) => {
                warn!(path, error = %e, "failed to read base file");
                return Ok(FileResult::block_error(
                    path,
                    format!("failed to read base file: {}", e),
                ));
            }
        };

        let markers = &self.options.markers;
        let Some(base_content) = base_content.filter(|c| markers.has_blocks(c)) else {
            return Ok(FileResult::skipped(path, SkipReason::NoBlocksInBase));
        };

        let base_blocks = match self.parse(&base_content) {
            Ok(blocks) => blocks,
            Err(e) => return Ok(FileResult::block_error(path, format!("base: {}", e))),
        };

        if change.is_deleted {
            let outside_base = find_outside(&change.old_ranges, &base_blocks);
            return Ok(FileResult::classified(
                path,
                Classification {
                    passed: outside_base.is_empty(),
                    outside_base,
                    ..Default::default()
                },
            ));
        }

        let Some(head_content) = self
            .source
            .file_content(&self.options.head_ref, &change.new_path)?
        else {
            return Ok(FileResult::block_error(
                path,
                format!(
                    "failed to read head file: {} does not exist at {}",
                    change.new_path, self.options.head_ref
                ),
            ));
        };

        let head_blocks = match self.parse(&head_content) {
            Ok(blocks) => blocks,
            Err(e) => return Ok(FileResult::block_error(path, format!("head: {}", e))),
        };

        let base = classify(&change.old_ranges, &base_blocks);
        let head = classify(&change.new_ranges, &head_blocks);

        let boundary_changed = !base.boundary.is_empty() || !head.boundary.is_empty();
        let has_outside = !base.outside.is_empty() || !head.outside.is_empty();
        // Moving a marker drags neighbouring lines along; tolerated only on request.
        let passed =
            !has_outside || (boundary_changed && self.options.allow_boundary_with_outside);

        Ok(FileResult::classified(
            path,
            Classification {
                passed,
                outside_base: base.outside,
                outside_head: head.outside,
                boundary_changed,
            },
        ))
    }

    /// New files are skipped, but markers they contain must still be balanced.
    fn validate_new(&self, change: &FileChange) -> FileResult {
        let path = change.display_path();

        let content = match self
            .source
            .file_content(&self.options.head_ref, &change.new_path)
        {
            Ok(Some(content)) => content,
            Ok(None) | Err(_) => return FileResult::skipped(path, SkipReason::NewFile),
        };

        if self.options.markers.has_blocks(&content) {
            if let Err(e) = self.parse(&content) {
                return FileResult::block_error(path, e.to_string());
            }
        }

        FileResult::skipped(path, SkipReason::NewFile)
    }

    fn parse(&self, content: &str) -> std::result::Result<Vec<Block>, super::StructureError> {
        self.options
            .markers
            .parse_blocks(content, self.options.allow_nesting)
    }
}
