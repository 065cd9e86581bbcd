//! Built-in dialect services for every supported product

use sqlparser::ast::Ident;

use super::{Dialect, DialectKind};

/// Default [`Dialect`] implementation, driven entirely by [`DialectKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StandardDialect {
    kind: DialectKind,
}

impl StandardDialect {
    pub fn new(kind: DialectKind) -> Self {
        Self { kind }
    }

    fn quote(&self, ident: &str) -> String {
        match self.kind {
            DialectKind::Mssql => Ident::with_quote('[', ident).to_string(),
            _ => ident.to_string(),
        }
    }
}

impl From<DialectKind> for StandardDialect {
    fn from(kind: DialectKind) -> Self {
        Self::new(kind)
    }
}

impl Dialect for StandardDialect {
    fn kind(&self) -> DialectKind {
        self.kind
    }

    fn product_name(&self) -> &str {
        match self.kind {
            DialectKind::Generic => "Generic SQL",
            DialectKind::Sqlite => "SQLite",
            DialectKind::Mssql => "Microsoft SQL Server",
            DialectKind::Sybase => "Adaptive Server Enterprise",
            DialectKind::SybaseAsa => "Adaptive Server Anywhere",
            DialectKind::Informix => "Informix Dynamic Server",
            DialectKind::Db2 => "DB2",
            DialectKind::Other => "Unknown",
        }
    }

    fn escape_table_name(&self, schema: Option<&str>, table: &str) -> String {
        match schema.filter(|s| !s.is_empty()) {
            Some(schema) => format!("{}.{}", self.quote(schema), self.quote(table)),
            None => self.quote(table),
        }
    }

    fn escape_column_name(&self, _schema: Option<&str>, _table: &str, column: &str) -> String {
        self.quote(column)
    }

    fn escape_column_name_list(&self, columns: &[String]) -> String {
        columns
            .iter()
            .map(|c| self.quote(c))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn escape_constraint_name(&self, name: &str) -> String {
        name.to_string()
    }

    fn generate_primary_key_name(&self, table: &str) -> String {
        format!("PK_{}", table.to_uppercase())
    }

    fn generate_default_constraint_name(&self, table: &str, column: &str) -> String {
        format!("DF_{}_{}", table, column)
    }

    fn column_type(&self, column_type: &str, auto_increment: bool) -> String {
        if !auto_increment {
            return column_type.to_string();
        }
        let upper = column_type.trim().to_uppercase();
        match (self.kind, upper.as_str()) {
            (DialectKind::Sqlite, "INT" | "INTEGER") => "INTEGER".to_string(),
            (DialectKind::Informix, "INT" | "INTEGER") => "SERIAL".to_string(),
            (DialectKind::Informix, "BIGINT" | "INT8") => "SERIAL8".to_string(),
            _ => column_type.to_string(),
        }
    }

    fn auto_increment_clause(&self) -> &str {
        match self.kind {
            DialectKind::Generic | DialectKind::Db2 => "GENERATED BY DEFAULT AS IDENTITY",
            DialectKind::Mssql | DialectKind::Sybase => "IDENTITY",
            DialectKind::SybaseAsa => "DEFAULT AUTOINCREMENT",
            DialectKind::Sqlite | DialectKind::Informix => "",
            DialectKind::Other => "AUTO_INCREMENT",
        }
    }

    fn supports_auto_increment(&self) -> bool {
        !matches!(self.kind, DialectKind::Other)
    }

    fn supports_tablespaces(&self) -> bool {
        !matches!(
            self.kind,
            DialectKind::Sqlite | DialectKind::Sybase | DialectKind::Other
        )
    }
}
