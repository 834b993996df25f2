//! Task configuration loading and merging
//!
//! A configuration document declares `env`, `commands`, `commandsets`,
//! `tests` and `checks`. A base document can be layered with an overwrite
//! document; see [`Config::merge`].

pub mod commandset;
pub mod loader;
pub mod merge;

pub use commandset::Commandset;
pub use loader::{
    load_effective_config, parse_config, parse_config_file, LoadedConfig, DEFAULT_CONFIG_FILE,
    DEFAULT_OVERWRITE_FILE,
};

use crate::run::{Check, Command};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A decoded task configuration.
///
/// After loading, every entry's `name` equals the key it is stored under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub env: BTreeMap<String, String>,
    pub commands: BTreeMap<String, Command>,
    pub commandsets: BTreeMap<String, Commandset>,
    pub tests: BTreeMap<String, Command>,
    pub checks: BTreeMap<String, Check>,
}
