//! Exit code constants for the git-sandwich CLI.
//!
//! - 0: Success (every change is inside a sandwich block)
//! - 1: Gate rejection (at least one file failed validation)
//! - 2: User error (bad args, invalid patterns, broken config)
//! - 3: Git failure (diff retrieval or diff parsing failed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Validation failure: changes outside blocks or broken marker structure.
pub const VALIDATION_FAILURE: i32 = 1;

/// User error: bad arguments, invalid regex/glob, or unreadable config.
pub const USER_ERROR: i32 = 2;

/// Git operation failure: provider call failed or its diff was unparseable.
pub const GIT_FAILURE: i32 = 3;
