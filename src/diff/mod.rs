//! Unified diff parsing for git-sandwich.
//!
//! Turns `git diff -U0 {base}...{head}` output into per-file changed line
//! ranges on the base (old) and head (new) sides.
//!
//! The parser supports:
//! - New files (from /dev/null) and deletions (to /dev/null)
//! - Renames, mode changes and binary sections (no ranges)
//! - Hunk headers with omitted counts
//! - Quoted paths with git's C-style escapes

mod helpers;
mod parser;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use parser::parse_diff;
pub use types::FileChange;
