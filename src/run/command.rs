//! Command definitions

use super::{override_string, Merge, Named};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A long-running or one-shot command, as declared under `commands:` or `tests:`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Command {
    /// Copied from the map key after loading; never read from the document.
    #[serde(skip)]
    pub name: String,

    /// Shell snippet that runs the command
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cmd: String,

    /// Shell snippet that installs or builds what `cmd` needs
    #[serde(skip_serializing_if = "String::is_empty")]
    pub install: String,

    /// Binary that must be present on `PATH` before `cmd` can run
    #[serde(skip_serializing_if = "String::is_empty")]
    pub check_binary: String,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,

    /// Paths whose changes trigger a reinstall
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub watch: Vec<String>,

    #[serde(skip_serializing_if = "is_false")]
    pub ignore_stdout: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub ignore_stderr: bool,

    /// Arguments appended to `cmd` when none are given
    #[serde(skip_serializing_if = "String::is_empty")]
    pub default_args: String,

    #[serde(skip_serializing_if = "is_false")]
    pub continue_watch_on_exit: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Named for Command {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

impl Merge for Command {
    /// Strings and lists override when non-empty, flags can only be switched
    /// on, and `env` entries are layered key by key.
    fn merge(&self, other: &Self) -> Self {
        let mut merged = self.clone();

        override_string(&mut merged.name, &other.name);
        override_string(&mut merged.cmd, &other.cmd);
        override_string(&mut merged.install, &other.install);
        override_string(&mut merged.check_binary, &other.check_binary);
        override_string(&mut merged.default_args, &other.default_args);

        merged.ignore_stdout |= other.ignore_stdout;
        merged.ignore_stderr |= other.ignore_stderr;
        merged.continue_watch_on_exit |= other.continue_watch_on_exit;

        for (key, value) in &other.env {
            merged.env.insert(key.clone(), value.clone());
        }

        if !other.watch.is_empty() && merged.watch != other.watch {
            merged.watch = other.watch.clone();
        }

        merged
    }
}
