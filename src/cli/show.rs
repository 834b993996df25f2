//! Show command implementation

use anyhow::Result;
use clap::Args;

use super::Cli;
use crate::config::{Commandset, Config};

#[derive(Args)]
pub struct ShowArgs {
    /// Commandset to describe
    #[arg(value_name = "COMMANDSET")]
    pub name: String,
}

pub fn run(cli: &Cli, args: &ShowArgs) -> Result<()> {
    let loaded = cli.load_config()?;
    let config = &loaded.config;

    let Some(set) = config.commandsets.get(&args.name) else {
        let known: Vec<&str> = config.commandsets.keys().map(String::as_str).collect();
        anyhow::bail!("Unknown commandset '{}' (known: {})", args.name, known.join(", "));
    };

    print!("{}", describe(config, set));
    Ok(())
}

/// Members are printed as written; ones the configuration does not define
/// are only flagged.
fn describe(config: &Config, set: &Commandset) -> String {
    let mut out = format!("Commandset: {}\n", set.name);

    out.push_str("Commands:\n");
    for name in &set.commands {
        let marker = if config.commands.contains_key(name) { "" } else { " (undefined)" };
        out.push_str(&format!("  {}{}\n", name, marker));
    }

    if !set.checks.is_empty() {
        out.push_str("Checks:\n");
        for name in &set.checks {
            let marker = if config.checks.contains_key(name) { "" } else { " (undefined)" };
            out.push_str(&format!("  {}{}\n", name, marker));
        }
    }

    out
}
