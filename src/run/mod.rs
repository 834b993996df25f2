//! Task descriptors: the commands, tests and checks a configuration declares.
//!
//! These types only describe work. Running them is left to the caller.

pub mod check;
pub mod command;

pub use check::Check;
pub use command::Command;

/// A configuration entry whose identity is the key it is stored under.
///
/// The document only carries the name as a map key, so loaders copy the key
/// into the entry after decoding.
pub trait Named {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: &str);
}

/// Field-level override: `base.merge(other)` returns a new value where the
/// fields `other` specifies win over `base`.
pub trait Merge {
    #[must_use]
    fn merge(&self, other: &Self) -> Self;
}

/// Replace `base` with `other` when `other` is non-empty.
pub(crate) fn override_string(base: &mut String, other: &str) {
    if !other.is_empty() && base.as_str() != other {
        *base = other.to_string();
    }
}
