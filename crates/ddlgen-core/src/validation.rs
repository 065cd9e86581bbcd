//! Precondition checks run before a statement is compiled

use crate::error::{Diagnostic, DiagnosticKind};
use crate::statement::CreateTableStatement;

/// Validate a CREATE TABLE statement.
///
/// Returns every problem found; an empty vector means the statement can be
/// compiled.
pub fn validate(statement: &CreateTableStatement) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if statement.table_name.trim().is_empty() {
        diagnostics.push(
            Diagnostic::error(DiagnosticKind::MissingTableName, "table name is required")
                .with_help("set `table_name` to a non-empty identifier"),
        );
    }

    if statement.columns.is_empty() {
        diagnostics.push(
            Diagnostic::error(
                DiagnosticKind::MissingColumns,
                format!("table '{}' declares no columns", statement.table_name),
            )
            .with_help("a table needs at least one column"),
        );
    }

    for column in &statement.columns {
        if statement.column_type(column).map_or(true, |t| t.trim().is_empty()) {
            diagnostics.push(
                Diagnostic::error(
                    DiagnosticKind::MissingColumnType,
                    format!("column '{}' has no type", column),
                )
                .with_column(column),
            );
        }
    }

    for (column, value) in &statement.default_values {
        if value.trim().is_empty() {
            diagnostics.push(
                Diagnostic::error(
                    DiagnosticKind::BlankDefaultValue,
                    format!("default value for column '{}' is blank", column),
                )
                .with_column(column)
                .with_help("remove the default or give it a literal such as `''`"),
            );
        }
    }

    let mut check = |column: &str, origin: &str| {
        if !statement.columns.iter().any(|c| c == column) {
            diagnostics.push(
                Diagnostic::error(
                    DiagnosticKind::UnknownColumn,
                    format!(
                        "{} refers to column '{}' which is not declared on '{}'",
                        origin, column, statement.table_name
                    ),
                )
                .with_column(column),
            );
        }
    };

    for column in &statement.auto_increment_columns {
        check(column.as_str(), "auto-increment column set");
    }
    for column in &statement.not_null_columns {
        check(column.as_str(), "not-null column set");
    }
    for column in statement.default_values.keys() {
        check(column.as_str(), "default value");
    }
    if let Some(pk) = &statement.primary_key {
        for column in &pk.columns {
            check(column.as_str(), "primary key");
        }
    }
    for fk in &statement.foreign_keys {
        check(fk.column.as_str(), "foreign key");
    }
    for unique in &statement.unique_constraints {
        for column in &unique.columns {
            check(column.as_str(), "unique constraint");
        }
    }

    if statement
        .primary_key
        .as_ref()
        .is_some_and(|pk| pk.columns.is_empty())
    {
        diagnostics.push(Diagnostic::error(
            DiagnosticKind::EmptyPrimaryKey,
            format!("primary key on '{}' has no columns", statement.table_name),
        ));
    }

    diagnostics
}
