use crate::error::{Result, SandwichError};
use crate::git::RevisionSource;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A repository on `main` with a single README commit.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "commit.gpgsign", "false"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

pub(crate) fn write_file(repo_dir: &Path, name: &str, content: &str) {
    let path = repo_dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

pub(crate) fn commit_all(repo_dir: &Path, message: &str) {
    git(repo_dir, &["add", "-A"]);
    git(repo_dir, &["commit", "-m", message]);
}

pub(crate) fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}

/// In-memory [`RevisionSource`] keyed by `(rev, path)`.
#[derive(Debug, Default)]
pub(crate) struct FakeSource {
    pub diff: String,
    pub files: HashMap<(String, String), String>,
    /// `(rev, path)` pairs whose reads fail with a git error.
    pub broken: Vec<(String, String)>,
}

impl FakeSource {
    pub(crate) fn with_diff(diff: &str) -> Self {
        Self {
            diff: diff.to_string(),
            ..Default::default()
        }
    }

    pub(crate) fn file(mut self, rev: &str, path: &str, content: &str) -> Self {
        self.files
            .insert((rev.to_string(), path.to_string()), content.to_string());
        self
    }

    pub(crate) fn broken(mut self, rev: &str, path: &str) -> Self {
        self.broken.push((rev.to_string(), path.to_string()));
        self
    }
}

impl RevisionSource for FakeSource {
    fn diff(&self, _base: &str, _head: &str, _paths: &[String]) -> Result<String> {
        Ok(self.diff.clone())
    }

    fn file_content(&self, rev: &str, path: &str) -> Result<Option<String>> {
        let key = (rev.to_string(), path.to_string());
        if self.broken.contains(&key) {
            return Err(SandwichError::GitError(format!(
                "cannot read {}:{}",
                rev, path
            )));
        }
        Ok(self.files.get(&key).cloned())
    }
}
