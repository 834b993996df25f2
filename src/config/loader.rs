//! Config file loading

use super::Config;
use crate::error::ConfigError;
use crate::run::Named;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Base configuration, relative to the repository root.
pub const DEFAULT_CONFIG_FILE: &str = "devtask.yaml";

/// Optional local overrides merged over the base configuration.
pub const DEFAULT_OVERWRITE_FILE: &str = "devtask.overwrite.yaml";

/// The effective configuration together with the files it was built from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// Files actually read, in merge order.
    pub sources: Vec<PathBuf>,
}

/// Read and decode a configuration file.
///
/// The file is closed before decoding starts, whether reading succeeded or not.
pub fn parse_config_file(path: &Path) -> Result<Config, ConfigError> {
    let data = {
        let mut file = File::open(path)
            .map_err(|source| ConfigError::Open { path: path.to_path_buf(), source })?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        data
    };

    tracing::debug!("Read {} bytes from {}", data.len(), path.display());
    parse_config(&data).map_err(|e| e.with_path(path))
}

/// Decode a configuration document and name every entry after its key.
///
/// `<<` merge keys are expanded before decoding. A document with no content,
/// including one that is only `~` or comments, is an empty configuration.
pub fn parse_config(data: &[u8]) -> Result<Config, ConfigError> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(Config::default());
    }

    let decode = |source| ConfigError::Decode { path: None, source };

    let raw: serde_yaml::Value = serde_yaml::from_slice(data).map_err(decode)?;
    if raw.is_null() {
        return Ok(Config::default());
    }

    let mut merged = raw.clone();
    merged.apply_merge().map_err(decode)?;

    // Decode from text rather than from the value tree: scalars such as
    // `3080` only become strings when read from text, and errors keep their
    // field path and location. Without merge keys the original bytes are used
    // so reported lines match the file.
    let mut config: Config = if merged == raw {
        serde_yaml::from_slice(data).map_err(decode)?
    } else {
        tracing::debug!("Expanded YAML merge keys in configuration");
        let expanded = serde_yaml::to_string(&merged).map_err(decode)?;
        serde_yaml::from_str(&expanded).map_err(decode)?
    };

    assign_names(&mut config.commands);
    assign_names(&mut config.commandsets);
    assign_names(&mut config.tests);
    assign_names(&mut config.checks);

    Ok(config)
}

fn assign_names<V: Named>(entries: &mut BTreeMap<String, V>) {
    for (key, entry) in entries.iter_mut() {
        entry.set_name(key);
    }
}

/// Load the base configuration and layer the overwrite file on top of it.
///
/// Paths default to [`DEFAULT_CONFIG_FILE`] and [`DEFAULT_OVERWRITE_FILE`]
/// under `repo_root`. The base file must exist; a missing overwrite file is
/// skipped, but one that exists and fails to load is an error.
pub fn load_effective_config(
    repo_root: &Path,
    config_path: Option<&Path>,
    overwrite_path: Option<&Path>,
) -> Result<LoadedConfig, ConfigError> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => repo_root.join(DEFAULT_CONFIG_FILE),
    };
    let overwrite_file = match overwrite_path {
        Some(path) => path.to_path_buf(),
        None => repo_root.join(DEFAULT_OVERWRITE_FILE),
    };

    let mut config = parse_config_file(&config_file)?;
    let mut sources = vec![config_file];

    if overwrite_file.exists() {
        let overwrite = parse_config_file(&overwrite_file)?;
        tracing::debug!("Merging overwrite configuration {}", overwrite_file.display());
        config.merge(&overwrite);
        sources.push(overwrite_file);
    } else {
        tracing::debug!("No overwrite configuration at {}", overwrite_file.display());
    }

    Ok(LoadedConfig { config, sources })
}
