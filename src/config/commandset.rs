//! Commandset decoding
//!
//! A commandset can be written either as a bare list of command names:
//!
//! ```yaml
//! commandsets:
//!   oss: [frontend, gitserver]
//! ```
//!
//! or as an object that also names the checks to run first:
//!
//! ```yaml
//! commandsets:
//!   enterprise:
//!     commands: [frontend, gitserver, executor]
//!     checks: [docker, redis]
//! ```
//!
//! Both collapse into [`Commandset`]. A sequence always takes the list form,
//! so older documents keep decoding exactly as they did.

use crate::run::Named;
use serde::de::value::MapAccessDeserializer;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A named group of commands plus the checks to run alongside them.
///
/// Member names are soft references: nothing verifies they exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Commandset {
    #[serde(skip)]
    pub name: String,
    pub commands: Vec<String>,
    pub checks: Vec<String>,
}

/// The object form, decoded without any custom hook.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CommandsetObject {
    commands: Vec<String>,
    checks: Vec<String>,
}

impl<'de> Deserialize<'de> for Commandset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CommandsetVisitor)
    }
}

/// A sequence is the list form, a mapping the object form, null an empty set.
struct CommandsetVisitor;

impl<'de> Visitor<'de> for CommandsetVisitor {
    type Value = Commandset;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of command names or a map with `commands` and `checks`")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Commandset, E> {
        Ok(Commandset::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Commandset, E> {
        Ok(Commandset::default())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Commandset, A::Error> {
        let mut commands = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(name) = seq.next_element::<String>()? {
            commands.push(name);
        }
        Ok(Commandset { commands, ..Default::default() })
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Commandset, A::Error> {
        let object = CommandsetObject::deserialize(MapAccessDeserializer::new(map))?;
        Ok(Commandset { name: String::new(), commands: object.commands, checks: object.checks })
    }
}

impl Named for Commandset {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}
