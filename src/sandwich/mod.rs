//! Sandwich validation for git-sandwich.
//!
//! A sandwich block is the span between a BEGIN marker line and an END
//! marker line. This module:
//! - Locates and validates blocks in file content (`block`)
//! - Classifies changed lines as inside, boundary or outside (`classify`)
//! - Applies include/exclude path filters (`filter`)
//! - Drives the per-file checks for a whole diff (`validator`)

pub mod block;
pub mod classify;
pub mod filter;
pub mod types;
pub mod validator;


pub use block::{Block, Markers, StructureError};
pub use classify::{Classified, LineClass, classify, classify_line, find_outside};
pub use filter::{PathFilter, filter_files};
pub use types::{
    Classification, FileOutcome, FileResult, SkipReason, ValidateOptions, ValidationResult,
};
pub use validator::validate;
