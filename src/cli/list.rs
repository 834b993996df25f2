//! List command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};

use super::Cli;
use crate::config::Config;

#[derive(Args)]
pub struct ListArgs {
    /// Section to list
    #[arg(value_enum, default_value_t = Section::Commands)]
    pub section: Section,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Commands,
    Commandsets,
    Tests,
    Checks,
    Env,
}

pub fn run(cli: &Cli, args: &ListArgs) -> Result<()> {
    let loaded = cli.load_config()?;
    for line in section_lines(&loaded.config, args.section) {
        println!("{}", line);
    }
    Ok(())
}

fn section_lines(config: &Config, section: Section) -> Vec<String> {
    match section {
        Section::Commands => config.commands.keys().cloned().collect(),
        Section::Commandsets => config.commandsets.keys().cloned().collect(),
        Section::Tests => config.tests.keys().cloned().collect(),
        Section::Checks => config.checks.keys().cloned().collect(),
        Section::Env => config.env.iter().map(|(k, v)| format!("{}={}", k, v)).collect(),
    }
}
