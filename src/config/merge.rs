//! Layering one configuration over another

use super::Config;
use crate::run::Merge;
use std::collections::BTreeMap;

impl Config {
    /// Merge the top-level entries of `other` into `self`.
    ///
    /// - `env`: the override's values win.
    /// - `commands` and `tests`: an entry already present is merged field by
    ///   field via [`Merge`]; a new one is inserted as-is.
    /// - `commandsets`: the override's entry replaces the base entry whole.
    /// - `checks`: left untouched.
    ///
    /// Base entries missing from `other` are always kept.
    pub fn merge(&mut self, other: &Config) {
        for (key, value) in &other.env {
            self.env.insert(key.clone(), value.clone());
        }

        merge_entries(&mut self.commands, &other.commands);

        for (name, set) in &other.commandsets {
            self.commandsets.insert(name.clone(), set.clone());
        }

        merge_entries(&mut self.tests, &other.tests);
    }
}

fn merge_entries<V: Merge + Clone>(base: &mut BTreeMap<String, V>, other: &BTreeMap<String, V>) {
    for (name, entry) in other {
        let merged = match base.get(name) {
            Some(original) => original.merge(entry),
            None => entry.clone(),
        };
        base.insert(name.clone(), merged);
    }
}
