//! Config command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use super::Cli;

#[derive(Args)]
pub struct ConfigArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Yaml)]
    pub format: Format,

    /// Also list the files the configuration was merged from (on stderr)
    #[arg(long)]
    pub sources: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
}

pub fn run(cli: &Cli, args: &ConfigArgs) -> Result<()> {
    let loaded = cli.load_config()?;

    if args.sources {
        for source in &loaded.sources {
            eprintln!("# {}", source.display());
        }
    }

    let rendered = match args.format {
        Format::Yaml => {
            serde_yaml::to_string(&loaded.config).context("Failed to render configuration")?
        }
        Format::Json => serde_json::to_string_pretty(&loaded.config)
            .context("Failed to render configuration")?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}
