//! Configuration for git-sandwich.
//!
//! Settings come from CLI flags and an optional `.git-sandwich.yml`.
//! CLI values take precedence; the file fills in anything not given.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::{FileConfig, Settings};
pub use types::{DEFAULT_BASE_REF, DEFAULT_CONFIG_FILE, DEFAULT_HEAD_REF};
