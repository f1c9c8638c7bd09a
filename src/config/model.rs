//! Config file model and merged settings.

use serde::{Deserialize, Serialize};

/// Contents of `.git-sandwich.yml`.
///
/// Every key is optional. Unknown keys are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// BEGIN marker regex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// END marker regex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,

    pub allow_nesting: bool,

    pub allow_boundary_with_outside: bool,

    /// Emit JSON instead of text.
    pub json: bool,

    pub include: Vec<String>,

    pub exclude: Vec<String>,
}

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub start: String,
    pub end: String,
    pub base: String,
    pub head: String,
    pub allow_nesting: bool,
    pub allow_boundary_with_outside: bool,
    pub json: bool,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    /// Paths restricting diff retrieval.
    pub paths: Vec<String>,
}
