//! devtask: inspect declarative developer task configuration
//!
//! Reads the repository's task document, merges the local overwrite file over
//! it and reports commands, commandsets, checks and migration databases.

use anyhow::Result;

fn main() -> Result<()> {
    devtask::cli::run()
}
