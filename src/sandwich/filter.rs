//! Include/exclude path filtering.
//!
//! Patterns are glob-style (`*` stays within a path segment, `**` spans
//! segments). A pattern with no glob metacharacters and no trailing `/` also
//! matches everything beneath a directory of that name, so `docs` matches
//! `docs/guide.md` but not `mydocs/guide.md`.

use crate::diff::FileChange;
use crate::error::{Result, SandwichError};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// Compiled include and exclude pattern sets.
#[derive(Debug, Clone)]
pub struct PathFilter {
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl PathFilter {
    /// Compile include/exclude patterns.
    ///
    /// # Returns
    ///
    /// * `Ok(PathFilter)` - Patterns compiled
    /// * `Err(SandwichError::UserError)` - A pattern is not a valid glob
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Self {
            include: build_globset(include, "include")?,
            exclude: build_globset(exclude, "exclude")?,
        })
    }

    /// True when neither list has patterns.
    pub fn is_empty(&self) -> bool {
        self.include.is_none() && self.exclude.is_none()
    }

    /// Whether a repo-relative path takes part in validation.
    ///
    /// Include is checked first (when given), then exclude.
    pub fn matches(&self, path: &str) -> bool {
        let included = self.include.as_ref().is_none_or(|set| set.is_match(path));
        let excluded = self.exclude.as_ref().is_some_and(|set| set.is_match(path));
        included && !excluded
    }

    /// Keep the files whose display path passes the filter, in order.
    pub fn filter_files(&self, files: Vec<FileChange>) -> Vec<FileChange> {
        if self.is_empty() {
            return files;
        }
        files
            .into_iter()
            .filter(|file| self.matches(file.display_path()))
            .collect()
    }
}

/// Filter `files` by include/exclude patterns; no patterns keeps everything.
pub fn filter_files(
    files: Vec<FileChange>,
    include: &[String],
    exclude: &[String],
) -> Result<Vec<FileChange>> {
    Ok(PathFilter::new(include, exclude)?.filter_files(files))
}

/// Build a GlobSet from a list of patterns, expanding bare directory names.
///
/// Returns `None` for an empty list so "no patterns" stays distinct from
/// "patterns that match nothing".
fn build_globset(patterns: &[String], field_name: &str) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        for candidate in expand_pattern(pattern) {
            let glob = GlobBuilder::new(&candidate)
                .literal_separator(true)
                .build()
                .map_err(|e| {
                    SandwichError::UserError(format!(
                        "invalid glob pattern in {}: '{}' - {}",
                        field_name, pattern, e
                    ))
                })?;
            builder.add(glob);
        }
    }

    builder
        .build()
        .map(Some)
        .map_err(|e| SandwichError::UserError(format!("failed to compile {} globs: {}", field_name, e)))
}

/// The literal pattern plus, for bare names, its `/**` directory form.
fn expand_pattern(pattern: &str) -> Vec<String> {
    if contains_glob_meta(pattern) || pattern.ends_with('/') {
        return vec![pattern.to_string()];
    }
    vec![pattern.to_string(), format!("{}/**", pattern)]
}

fn contains_glob_meta(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', '{', '\\'])
}
