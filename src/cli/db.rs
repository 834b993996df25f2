//! Database registry commands

use anyhow::Result;
use clap::{Args, Subcommand};

use super::Cli;
use crate::db::{self, Database, DatabaseRegistry};

#[derive(Args)]
pub struct DbArgs {
    #[command(subcommand)]
    pub action: DbAction,
}

#[derive(Subcommand)]
pub enum DbAction {
    /// List known databases
    List,

    /// Show migration metadata for one database
    Info {
        /// Database name (defaults to the primary database)
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },
}

pub fn run(cli: &Cli, args: &DbArgs) -> Result<()> {
    // An explicit --root gets its own registry; otherwise use the process-wide one.
    let owned;
    let registry: &DatabaseRegistry = match &cli.root {
        Some(root) => {
            owned = DatabaseRegistry::new(root);
            &owned
        }
        None => db::registry(),
    };

    match &args.action {
        DbAction::List => {
            let default = registry.default_database().name;
            for name in registry.names() {
                if name == default {
                    println!("{} (default)", name);
                } else {
                    println!("{}", name);
                }
            }
            Ok(())
        }
        DbAction::Info { name } => {
            let database = match name {
                Some(name) => registry.by_name(name).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Unknown database '{}' (known: {})",
                        name,
                        registry.names().join(", ")
                    )
                })?,
                None => registry.default_database(),
            };
            print!("{}", describe(database));
            Ok(())
        }
    }
}

fn describe(database: &Database) -> String {
    let mut out = format!("Database: {}\n", database.name);
    out.push_str(&format!("Migrations table: {}\n", database.migrations_table));
    if database.data_tables.is_empty() {
        out.push_str("Data tables: (none)\n");
    } else {
        out.push_str(&format!("Data tables: {}\n", database.data_tables.join(", ")));
    }
    out.push_str(&format!("Migrations directory: {}\n", database.fs.path().display()));

    match database.fs.entries() {
        Ok(entries) => {
            out.push_str(&format!("Migrations: {}\n", entries.len()));
            for entry in entries {
                out.push_str(&format!("  {}\n", entry));
            }
        }
        Err(err) => {
            tracing::warn!("Cannot read {}: {}", database.fs.path().display(), err);
            out.push_str("Migrations: (directory unreadable)\n");
        }
    }
    out
}
