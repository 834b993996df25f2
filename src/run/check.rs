//! Check definitions

use super::{override_string, Merge, Named};
use serde::{Deserialize, Serialize};

/// A prerequisite check, as declared under `checks:`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Check {
    #[serde(skip)]
    pub name: String,

    /// Shell snippet; a non-zero exit status means the check failed
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cmd: String,

    /// Shown to the user when the check fails
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fail_message: String,
}

impl Named for Check {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

impl Merge for Check {
    fn merge(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        override_string(&mut merged.name, &other.name);
        override_string(&mut merged.cmd, &other.cmd);
        override_string(&mut merged.fail_message, &other.fail_message);
        merged
    }
}
