//! Command-line interface for devtask
//!
//! Loads the effective task configuration and inspects it. Nothing is executed.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_effective_config, LoadedConfig};
use crate::root::repository_root;

mod config;
mod db;
mod list;
mod show;

/// Inspect declarative developer task configuration
#[derive(Parser)]
#[command(name = "devtask")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Repository root (defaults to the nearest ancestor containing .git)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Base configuration file (defaults to <root>/devtask.yaml)
    #[arg(short, long, global = true, value_name = "PATH", env = "DEVTASK_CONFIG")]
    config: Option<PathBuf>,

    /// Overwrite file merged over the base (defaults to <root>/devtask.overwrite.yaml)
    #[arg(long, global = true, value_name = "PATH", env = "DEVTASK_OVERWRITE")]
    overwrite: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the entries of one configuration section
    List(list::ListArgs),

    /// Show the commands and checks of a commandset
    Show(show::ShowArgs),

    /// Print the effective, merged configuration
    Config(config::ConfigArgs),

    /// Inspect the databases known to the migration tooling
    Db(db::DbArgs),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match &cli.command {
        Commands::List(args) => list::run(&cli, args),
        Commands::Show(args) => show::run(&cli, args),
        Commands::Config(args) => config::run(&cli, args),
        Commands::Db(args) => db::run(&cli, args),
        Commands::Completions { shell } => {
            clap_complete::generate(*shell, &mut Cli::command(), "devtask", &mut std::io::stdout());
            Ok(())
        }
    }
}

impl Cli {
    fn repo_root(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => repository_root().context("Failed to locate the repository root"),
        }
    }

    /// Load the base configuration with the overwrite file layered on top.
    fn load_config(&self) -> Result<LoadedConfig> {
        let root = match (&self.root, &self.config) {
            // An explicit config file does not need a repository around it.
            (None, Some(config)) => {
                config.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."))
            }
            _ => self.repo_root()?,
        };

        let loaded =
            load_effective_config(&root, self.config.as_deref(), self.overwrite.as_deref())
                .context("Failed to load task configuration")?;
        for source in &loaded.sources {
            tracing::debug!("Loaded configuration from {}", source.display());
        }
        Ok(loaded)
    }
}
