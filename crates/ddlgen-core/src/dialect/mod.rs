//! SQL dialect support

mod standard;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlparser::dialect::{GenericDialect, MsSqlDialect, SQLiteDialect};

pub use standard::StandardDialect;

/// Supported database products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DialectKind {
    #[default]
    Generic,
    Sqlite,
    Mssql,
    Sybase,
    SybaseAsa,
    Informix,
    Db2,
    /// Unrecognized product, generated as generic SQL
    Other,
}

impl DialectKind {
    pub const ALL: [DialectKind; 8] = [
        DialectKind::Generic,
        DialectKind::Sqlite,
        DialectKind::Mssql,
        DialectKind::Sybase,
        DialectKind::SybaseAsa,
        DialectKind::Informix,
        DialectKind::Db2,
        DialectKind::Other,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            DialectKind::Generic => "generic",
            DialectKind::Sqlite => "sqlite",
            DialectKind::Mssql => "mssql",
            DialectKind::Sybase => "sybase",
            DialectKind::SybaseAsa => "sybase-asa",
            DialectKind::Informix => "informix",
            DialectKind::Db2 => "db2",
            DialectKind::Other => "other",
        }
    }

    /// Single-column primary keys are declared inline after the column type
    pub fn inline_single_column_primary_key(&self) -> bool {
        matches!(self, DialectKind::Informix)
    }

    /// Table-level PRIMARY KEY clauses are never emitted
    pub fn omits_table_primary_key(&self) -> bool {
        matches!(self, DialectKind::Informix)
    }

    /// An auto-increment single-column primary key is declared inline as
    /// `PRIMARY KEY AUTOINCREMENT`
    pub fn inline_autoincrement_primary_key(&self) -> bool {
        matches!(self, DialectKind::Sqlite)
    }

    /// Column defaults are wrapped in a named DEFAULT constraint
    pub fn named_default_constraints(&self) -> bool {
        matches!(self, DialectKind::Mssql)
    }

    /// Nullable columns must say NULL explicitly
    pub fn explicit_null(&self) -> bool {
        matches!(self, DialectKind::Sybase | DialectKind::SybaseAsa)
    }

    /// `CONSTRAINT <name>` follows the constraint body instead of preceding it
    pub fn constraint_name_trails(&self) -> bool {
        matches!(self, DialectKind::Informix)
    }

    /// Keyword introducing the tablespace placement clause
    pub fn tablespace_keyword(&self) -> &'static str {
        match self {
            DialectKind::Mssql | DialectKind::SybaseAsa => "ON",
            DialectKind::Db2 | DialectKind::Informix => "IN",
            _ => "TABLESPACE",
        }
    }

    /// Get the sqlparser dialect closest to this product
    pub fn parser_dialect(&self) -> Box<dyn sqlparser::dialect::Dialect> {
        match self {
            DialectKind::Sqlite => Box::new(SQLiteDialect {}),
            DialectKind::Mssql | DialectKind::Sybase | DialectKind::SybaseAsa => {
                Box::new(MsSqlDialect {})
            }
            _ => Box::new(GenericDialect {}),
        }
    }
}

/// Unknown dialect name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect: '{0}'. Supported dialects: generic, sqlite, mssql, sybase, sybase-asa, informix, db2, other.")]
pub struct UnknownDialect(pub String);

impl FromStr for DialectKind {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "generic" | "ansi" => Ok(DialectKind::Generic),
            "sqlite" | "sqlite3" => Ok(DialectKind::Sqlite),
            "mssql" | "sqlserver" => Ok(DialectKind::Mssql),
            "sybase" | "ase" => Ok(DialectKind::Sybase),
            "sybase-asa" | "sybase_asa" | "asa" => Ok(DialectKind::SybaseAsa),
            "informix" => Ok(DialectKind::Informix),
            "db2" => Ok(DialectKind::Db2),
            "other" => Ok(DialectKind::Other),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}

impl std::fmt::Display for DialectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-dialect services consumed by the generators.
///
/// Implementations must be free of side effects: generators call them
/// freely and may run concurrently.
pub trait Dialect: Send + Sync {
    fn kind(&self) -> DialectKind;

    /// Product name used in diagnostics
    fn product_name(&self) -> &str;

    fn escape_table_name(&self, schema: Option<&str>, table: &str) -> String;

    fn escape_column_name(&self, schema: Option<&str>, table: &str, column: &str) -> String;

    fn escape_column_name_list(&self, columns: &[String]) -> String;

    fn escape_constraint_name(&self, name: &str) -> String;

    fn generate_primary_key_name(&self, table: &str) -> String;

    fn generate_default_constraint_name(&self, table: &str, column: &str) -> String;

    /// Resolve a logical column type to this dialect's type text
    fn column_type(&self, column_type: &str, auto_increment: bool) -> String;

    /// Clause appended to auto-increment columns; empty when the dialect
    /// encodes auto-increment elsewhere
    fn auto_increment_clause(&self) -> &str;

    fn supports_auto_increment(&self) -> bool;

    fn supports_tablespaces(&self) -> bool;
}
