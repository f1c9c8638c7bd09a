//! git-sandwich: a gate that accepts a diff only when every changed line sits
//! inside a BEGIN/END "sandwich" block.
//!
//! The core pipeline is [`diff::parse_diff`] → [`sandwich::PathFilter`] →
//! [`sandwich::Markers::parse_blocks`] → [`sandwich::classify`], driven per
//! file by [`sandwich::validate`] over a [`git::RevisionSource`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod output;
pub mod range;
pub mod sandwich;
pub mod telemetry;

#[cfg(test)]
mod test_support;
