//! devtask: declarative developer task configuration
//!
//! Loads commands, commandsets, tests, checks and environment from YAML,
//! layers an overwrite document on top, and keeps the registry of databases
//! whose migrations live in the repository.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod root;
pub mod run;

pub use config::{Commandset, Config};
pub use error::{ConfigError, RootError};
