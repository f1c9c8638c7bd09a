//! Result rendering for the CLI: plain text or JSON.

mod json;
mod text;

pub use json::write_json;
pub use text::{format_ranges, write_text};
