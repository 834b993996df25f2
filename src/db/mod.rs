//! Registry of the logical databases that have migrations
//!
//! Each database's scripts live under `<repo-root>/migrations/<name>/`.

pub mod migrations_dir;

pub use migrations_dir::MigrationsDir;

use crate::root::repository_root;
use once_cell::sync::Lazy;
use std::path::Path;

/// Directory, relative to the repository root, holding one subdirectory per database.
pub const MIGRATIONS_DIR: &str = "migrations";

/// A logical database and where its migrations are tracked and stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    /// Name used on the command line
    pub name: &'static str,
    /// Table recording which migrations have been applied
    pub migrations_table: &'static str,
    /// Additional data tables managed alongside the schema
    pub data_tables: &'static [&'static str],
    pub fs: MigrationsDir,
}

struct Declaration {
    name: &'static str,
    migrations_table: &'static str,
    data_tables: &'static [&'static str],
}

// Declaration order matters: the first entry is the default database.
const DECLARATIONS: &[Declaration] = &[
    Declaration {
        name: "frontend",
        migrations_table: "schema_migrations",
        data_tables: &["out_of_band_migrations"],
    },
    Declaration {
        name: "codeintel",
        migrations_table: "codeintel_schema_migrations",
        data_tables: &[],
    },
    Declaration {
        name: "codeinsights",
        migrations_table: "codeinsights_schema_migrations",
        data_tables: &[],
    },
];

/// The fixed set of known databases, in declaration order.
#[derive(Debug, Clone)]
pub struct DatabaseRegistry {
    databases: Vec<Database>,
}

impl DatabaseRegistry {
    /// Bind every known database to its directory under `repo_root/migrations`.
    pub fn new(repo_root: &Path) -> Self {
        let migrations_root = repo_root.join(MIGRATIONS_DIR);
        let databases = DECLARATIONS
            .iter()
            .map(|decl| Database {
                name: decl.name,
                migrations_table: decl.migrations_table,
                data_tables: decl.data_tables,
                fs: MigrationsDir::new(migrations_root.join(decl.name)),
            })
            .collect();
        Self { databases }
    }

    /// Build a registry from an explicit list. The first entry is the default.
    ///
    /// Returns `None` for an empty list, since a registry always has a default.
    pub fn from_databases(databases: Vec<Database>) -> Option<Self> {
        if databases.is_empty() {
            return None;
        }
        Some(Self { databases })
    }

    /// All database names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.databases.iter().map(|db| db.name).collect();
        names.sort_unstable();
        names
    }

    /// Exact, case-sensitive lookup.
    pub fn by_name(&self, name: &str) -> Option<&Database> {
        self.databases.iter().find(|db| db.name == name)
    }

    /// The first declared database.
    pub fn default_database(&self) -> &Database {
        &self.databases[0]
    }

    pub fn databases(&self) -> &[Database] {
        &self.databases
    }
}

static REGISTRY: Lazy<DatabaseRegistry> = Lazy::new(|| {
    let root = repository_root()
        .unwrap_or_else(|err| panic!("could not resolve the migrations directory: {err}"));
    tracing::debug!("Migrations root is {}", root.join(MIGRATIONS_DIR).display());
    DatabaseRegistry::new(&root)
});

/// The process-wide registry, resolved from the repository root on first use.
///
/// # Panics
///
/// Panics on first use when the repository root cannot be found. Without it
/// there is no migrations directory and nothing to recover to.
pub fn registry() -> &'static DatabaseRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn database(name: &'static str) -> Database {
        Database {
            name,
            migrations_table: "schema_migrations",
            data_tables: &[],
            fs: MigrationsDir::new(PathBuf::from("/repo/migrations").join(name)),
        }
    }

    #[test]
    fn builtin_names_are_sorted() {
        let registry = DatabaseRegistry::new(Path::new("/repo"));
        assert_eq!(registry.names(), vec!["codeinsights", "codeintel", "frontend"]);
    }

    #[test]
    fn names_are_sorted_for_any_registration_order() {
        let registry = DatabaseRegistry::from_databases(vec![
            database("zeta"),
            database("alpha"),
            database("mid"),
        ])
        .expect("registry");
        assert_eq!(registry.names(), vec!["alpha", "mid", "zeta"]);
        assert_eq!(registry.default_database().name, "zeta");
    }

    #[test]
    fn default_is_first_declared_not_first_sorted() {
        let registry = DatabaseRegistry::new(Path::new("/repo"));
        let default = registry.default_database();
        assert_eq!(default.name, "frontend");
        assert_ne!(registry.names()[0], default.name);
        assert_eq!(default.data_tables, &["out_of_band_migrations"]);
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let registry = DatabaseRegistry::new(Path::new("/repo"));

        let codeintel = registry.by_name("codeintel").expect("codeintel");
        assert_eq!(codeintel.migrations_table, "codeintel_schema_migrations");
        assert!(codeintel.data_tables.is_empty());

        assert!(registry.by_name("Frontend").is_none());
        assert!(registry.by_name("code").is_none());
        assert!(registry.by_name("").is_none());
    }

    #[test]
    fn migrations_dirs_are_bound_under_root() {
        let registry = DatabaseRegistry::new(Path::new("/repo"));
        for db in registry.databases() {
            assert_eq!(db.fs.path(), Path::new("/repo/migrations").join(db.name));
        }
    }

    #[test]
    fn empty_registry_is_rejected() {
        assert!(DatabaseRegistry::from_databases(Vec::new()).is_none());
    }
}
