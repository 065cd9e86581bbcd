//! CREATE TABLE statement - dialect-neutral description of a table

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Dialect-neutral description of a table to create
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTableStatement {
    #[serde(default)]
    pub schema_name: Option<String>,
    pub table_name: String,
    /// Column names in output order
    #[serde(default)]
    pub columns: Vec<String>,
    /// Column name -> logical type (e.g. "VARCHAR(255)")
    #[serde(default)]
    pub column_types: IndexMap<String, String>,
    #[serde(default)]
    pub auto_increment_columns: IndexSet<String>,
    #[serde(default)]
    pub not_null_columns: IndexSet<String>,
    /// Column name -> literal or expression used verbatim as the default
    #[serde(default)]
    pub default_values: IndexMap<String, String>,
    #[serde(default)]
    pub primary_key: Option<PrimaryKeyConstraint>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyConstraint>,
    #[serde(default)]
    pub unique_constraints: Vec<UniqueConstraint>,
    #[serde(default)]
    pub tablespace: Option<String>,
}

impl CreateTableStatement {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    pub fn schema(mut self, schema_name: impl Into<String>) -> Self {
        self.schema_name = Some(schema_name.into());
        self
    }

    /// Append a column with its logical type
    pub fn column(mut self, name: impl Into<String>, column_type: impl Into<String>) -> Self {
        let name = name.into();
        self.column_types.insert(name.clone(), column_type.into());
        self.columns.push(name);
        self
    }

    pub fn auto_increment(mut self, column: impl Into<String>) -> Self {
        self.auto_increment_columns.insert(column.into());
        self
    }

    pub fn not_null(mut self, column: impl Into<String>) -> Self {
        self.not_null_columns.insert(column.into());
        self
    }

    pub fn default_value(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_values.insert(column.into(), value.into());
        self
    }

    pub fn primary_key(mut self, constraint: PrimaryKeyConstraint) -> Self {
        self.primary_key = Some(constraint);
        self
    }

    pub fn foreign_key(mut self, constraint: ForeignKeyConstraint) -> Self {
        self.foreign_keys.push(constraint);
        self
    }

    pub fn unique(mut self, constraint: UniqueConstraint) -> Self {
        self.unique_constraints.push(constraint);
        self
    }

    pub fn tablespace(mut self, tablespace: impl Into<String>) -> Self {
        self.tablespace = Some(tablespace.into());
        self
    }

    /// Get the logical type registered for a column
    pub fn column_type(&self, column: &str) -> Option<&str> {
        self.column_types.get(column).map(String::as_str)
    }

    pub fn is_auto_increment(&self, column: &str) -> bool {
        self.auto_increment_columns.contains(column)
    }

    pub fn is_not_null(&self, column: &str) -> bool {
        self.not_null_columns.contains(column)
    }

    /// Get the default value registered for a column
    pub fn default_for(&self, column: &str) -> Option<&str> {
        self.default_values.get(column).map(String::as_str)
    }

    /// The primary key column when the key spans exactly one column
    pub fn single_primary_key_column(&self) -> Option<&str> {
        match &self.primary_key {
            Some(pk) if pk.columns.len() == 1 => Some(pk.columns[0].as_str()),
            _ => None,
        }
    }
}

/// Primary key constraint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryKeyConstraint {
    #[serde(default)]
    pub name: Option<String>,
    pub columns: Vec<String>,
}

impl PrimaryKeyConstraint {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Explicit constraint name, ignoring blank names
    pub fn constraint_name(&self) -> Option<&str> {
        trim_to_none(self.name.as_deref())
    }
}

/// Single-column foreign key constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyConstraint {
    #[serde(default)]
    pub name: String,
    pub column: String,
    /// Referenced table and column, emitted verbatim (e.g. "users(id)")
    pub references: String,
    #[serde(default)]
    pub delete_cascade: bool,
    #[serde(default)]
    pub deferrable: bool,
    #[serde(default)]
    pub initially_deferred: bool,
}

impl ForeignKeyConstraint {
    pub fn new(
        name: impl Into<String>,
        column: impl Into<String>,
        references: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            references: references.into(),
            delete_cascade: false,
            deferrable: false,
            initially_deferred: false,
        }
    }

    pub fn on_delete_cascade(mut self) -> Self {
        self.delete_cascade = true;
        self
    }

    pub fn deferrable(mut self) -> Self {
        self.deferrable = true;
        self
    }

    pub fn initially_deferred(mut self) -> Self {
        self.initially_deferred = true;
        self
    }

    /// Explicit constraint name, ignoring blank names
    pub fn constraint_name(&self) -> Option<&str> {
        trim_to_none(Some(self.name.as_str()))
    }
}

/// Unique constraint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueConstraint {
    #[serde(default)]
    pub name: Option<String>,
    pub columns: Vec<String>,
}

impl UniqueConstraint {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Explicit constraint name, ignoring blank names
    pub fn constraint_name(&self) -> Option<&str> {
        trim_to_none(self.name.as_deref())
    }
}

fn trim_to_none(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_preserves_order() {
        let stmt = CreateTableStatement::new("users")
            .column("id", "INT")
            .column("name", "VARCHAR(50)")
            .column("email", "VARCHAR(255)");

        assert_eq!(stmt.columns, vec!["id", "name", "email"]);
        assert_eq!(stmt.column_type("name"), Some("VARCHAR(50)"));
        assert_eq!(stmt.column_type("missing"), None);
    }

    #[test]
    fn test_single_primary_key_column() {
        let stmt = CreateTableStatement::new("t")
            .column("id", "INT")
            .primary_key(PrimaryKeyConstraint::new(["id"]));
        assert_eq!(stmt.single_primary_key_column(), Some("id"));

        let stmt = stmt.primary_key(PrimaryKeyConstraint::new(["a", "b"]));
        assert_eq!(stmt.single_primary_key_column(), None);
    }

    #[test]
    fn test_blank_constraint_name_is_absent() {
        let pk = PrimaryKeyConstraint::new(["id"]).named("   ");
        assert_eq!(pk.constraint_name(), None);

        let pk = PrimaryKeyConstraint::new(["id"]).named(" pk_users ");
        assert_eq!(pk.constraint_name(), Some("pk_users"));

        let uq = UniqueConstraint::new(["email"]).named("");
        assert_eq!(uq.constraint_name(), None);

        let fk = ForeignKeyConstraint::new(" \t", "user_id", "users(id)");
        assert_eq!(fk.constraint_name(), None);
    }

    #[test]
    fn test_deserialize_minimal_toml() {
        let stmt: CreateTableStatement = toml::from_str(
            r#"
            table_name = "t1"
            columns = ["id", "name"]
            not_null_columns = ["name"]

            [column_types]
            id = "INT"
            name = "VARCHAR(50)"
            "#,
        )
        .unwrap();

        assert_eq!(stmt.table_name, "t1");
        assert!(stmt.is_not_null("name"));
        assert!(!stmt.is_auto_increment("id"));
        assert!(stmt.primary_key.is_none());
    }
}
