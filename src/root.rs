//! Repository root discovery

use crate::error::RootError;
use std::path::{Path, PathBuf};

/// Environment variable that pins the repository root.
pub const REPO_ROOT_ENV: &str = "DEVTASK_REPO_ROOT";

/// Walk up from `start` looking for a directory that contains `.git`.
pub fn find_repository_root(start: &Path) -> Result<PathBuf, RootError> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(".git").exists() {
            if current != start {
                tracing::debug!(
                    "Using repository root {} (detected from {})",
                    current.display(),
                    start.display()
                );
            }
            return Ok(current);
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }
    Err(RootError::NotFound { start: start.to_path_buf() })
}

/// Resolve the repository root for this process.
///
/// `DEVTASK_REPO_ROOT`, when set to a directory, wins over discovery from
/// the current working directory.
pub fn repository_root() -> Result<PathBuf, RootError> {
    if let Some(pinned) = std::env::var_os(REPO_ROOT_ENV).map(PathBuf::from) {
        if pinned.is_dir() {
            return Ok(pinned);
        }
        tracing::warn!("{} is not a directory: {}", REPO_ROOT_ENV, pinned.display());
    }

    let cwd = std::env::current_dir().map_err(RootError::CurrentDir)?;
    find_repository_root(&cwd)
}
