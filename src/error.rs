//! Library error types
//!
//! The CLI wraps these with `anyhow` context; library code returns them as-is.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a task configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot open configuration file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reading configuration file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}", decode_message(path.as_ref()))]
    Decode {
        path: Option<PathBuf>,
        #[source]
        source: serde_yaml::Error,
    },
}

fn decode_message(path: Option<&PathBuf>) -> String {
    match path {
        Some(path) => format!("invalid configuration in {}", path.display()),
        None => "invalid configuration document".to_string(),
    }
}

impl ConfigError {
    /// Attach the source file to a decode error raised while parsing its bytes.
    pub(crate) fn with_path(self, file: &std::path::Path) -> Self {
        match self {
            Self::Decode { path: None, source } => {
                Self::Decode { path: Some(file.to_path_buf()), source }
            }
            other => other,
        }
    }
}

/// Failure to locate the repository root.
#[derive(Debug, Error)]
pub enum RootError {
    #[error("no repository root (a directory containing .git) above {}", start.display())]
    NotFound { start: PathBuf },

    #[error("cannot determine the current directory")]
    CurrentDir(#[source] std::io::Error),
}
