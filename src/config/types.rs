//! Configuration defaults for git-sandwich.

/// Config file looked up in the repository directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".git-sandwich.yml";

/// Base revision when neither the CLI nor the config file names one.
pub const DEFAULT_BASE_REF: &str = "origin/main";

/// Head revision when neither the CLI nor the config file names one.
pub const DEFAULT_HEAD_REF: &str = "HEAD";
