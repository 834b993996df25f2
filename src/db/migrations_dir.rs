//! Read-only access to one database's migration scripts

use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Handle to the directory holding a database's migrations.
///
/// Binding the handle never touches the filesystem; a missing directory only
/// surfaces when it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationsDir {
    root: PathBuf,
}

impl MigrationsDir {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// Names of the immediate children (one per migration version), sorted.
    pub fn entries(&self) -> io::Result<Vec<String>> {
        if !self.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("migrations directory not found: {}", self.root.display()),
            ));
        }
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(io::Error::from)?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    /// Read a file below the directory. `relative` may not escape it.
    pub fn read_to_string(&self, relative: &str) -> io::Result<String> {
        let rel = Path::new(relative);
        let escapes = rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if relative.is_empty() || escapes {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid migration path: {relative}"),
            ));
        }
        std::fs::read_to_string(self.root.join(rel))
    }
}
