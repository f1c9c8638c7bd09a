//! Config loading and CLI/file merging.

use super::model::{FileConfig, Settings};
use super::types::{DEFAULT_BASE_REF, DEFAULT_CONFIG_FILE, DEFAULT_HEAD_REF};
use crate::cli::Cli;
use crate::error::{Result, SandwichError};
use crate::sandwich::{Markers, ValidateOptions};
use std::path::Path;
use tracing::debug;

impl FileConfig {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(FileConfig)` - Successfully loaded config
    /// * `Err(SandwichError::UserError)` - Read or parse failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SandwichError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map_err(|e| {
            SandwichError::UserError(format!("loading config '{}': {}", path.display(), e))
        })
    }

    /// Parse config from a YAML string.
    ///
    /// An empty or comment-only document yields the default config.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let is_blank = yaml
            .lines()
            .map(str::trim)
            .all(|line| line.is_empty() || line.starts_with('#'));
        if is_blank {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml)
            .map_err(|e| SandwichError::UserError(format!("failed to parse config YAML: {}", e)))
    }

    /// Load the config selected by the CLI.
    ///
    /// An explicit `--config` must exist. Otherwise `.git-sandwich.yml` in
    /// `repo_dir` is loaded only if present.
    pub fn discover(cli: &Cli, repo_dir: &Path) -> Result<Option<Self>> {
        if let Some(path) = &cli.config {
            debug!(path = %path.display(), "loading explicit config");
            return Self::load(path).map(Some);
        }

        let default_path = repo_dir.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            debug!(path = %default_path.display(), "loading default config");
            return Self::load(&default_path).map(Some);
        }

        Ok(None)
    }
}

impl Settings {
    /// Merge CLI values over file values over defaults.
    ///
    /// Explicit CLI values win; non-empty file values fill the gaps.
    /// Boolean policies are enabled if either side enables them.
    pub fn resolve(cli: &Cli, file: Option<FileConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let pick = |flag: &Option<String>, from_file: Option<String>| {
            flag.clone()
                .or_else(|| from_file.filter(|v| !v.is_empty()))
        };
        let pick_list = |flag: &Vec<String>, from_file: Vec<String>| {
            if flag.is_empty() { from_file } else { flag.clone() }
        };

        let start = pick(&cli.start, file.start).unwrap_or_default();
        let end = pick(&cli.end, file.end).unwrap_or_default();
        if start.is_empty() {
            return Err(SandwichError::UserError(
                "required option \"start\" not set (use --start or `start:` in the config file)"
                    .to_string(),
            ));
        }
        if end.is_empty() {
            return Err(SandwichError::UserError(
                "required option \"end\" not set (use --end or `end:` in the config file)"
                    .to_string(),
            ));
        }

        Ok(Self {
            start,
            end,
            base: pick(&cli.base, file.base).unwrap_or_else(|| DEFAULT_BASE_REF.to_string()),
            head: pick(&cli.head, file.head).unwrap_or_else(|| DEFAULT_HEAD_REF.to_string()),
            allow_nesting: cli.allow_nesting || file.allow_nesting,
            allow_boundary_with_outside: cli.allow_boundary_with_outside
                || file.allow_boundary_with_outside,
            json: cli.json || file.json,
            include: pick_list(&cli.include, file.include),
            exclude: pick_list(&cli.exclude, file.exclude),
            paths: cli.paths.clone(),
        })
    }

    /// Compile the marker patterns into validator options.
    ///
    /// # Returns
    ///
    /// * `Ok(ValidateOptions)` - Ready for [`crate::sandwich::validate`]
    /// * `Err(SandwichError::UserError)` - A marker regex is invalid
    pub fn to_options(&self) -> Result<ValidateOptions> {
        Ok(ValidateOptions {
            markers: Markers::new(&self.start, &self.end)?,
            base_ref: self.base.clone(),
            head_ref: self.head.clone(),
            allow_nesting: self.allow_nesting,
            allow_boundary_with_outside: self.allow_boundary_with_outside,
            paths: self.paths.clone(),
            include: self.include.clone(),
            exclude: self.exclude.clone(),
        })
    }
}
