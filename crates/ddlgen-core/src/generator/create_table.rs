//! CREATE TABLE generation

use crate::dialect::{Dialect, DialectKind};
use crate::error::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::statement::{CreateTableStatement, ForeignKeyConstraint, UniqueConstraint};
use crate::validation;

use super::writer::{Clause, ClauseList};
use super::{Sql, SqlGenerator};

/// Renders [`CreateTableStatement`] for any [`Dialect`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateTableGenerator;

impl SqlGenerator<CreateTableStatement> for CreateTableGenerator {
    fn validate(&self, statement: &CreateTableStatement, _dialect: &dyn Dialect) -> Vec<Diagnostic> {
        validation::validate(statement)
    }

    fn generate(
        &self,
        statement: &CreateTableStatement,
        dialect: &dyn Dialect,
        sink: &dyn DiagnosticSink,
    ) -> Vec<Sql> {
        let ctx = Context {
            statement,
            dialect,
            kind: dialect.kind(),
            sink,
        };

        let mut clauses = ClauseList::new();
        for column in &statement.columns {
            clauses.push(ctx.column_clause(column));
        }
        if let Some(clause) = ctx.primary_key_clause() {
            clauses.push(clause);
        }
        for fk in &statement.foreign_keys {
            clauses.push(ctx.foreign_key_clause(fk));
        }
        for unique in &statement.unique_constraints {
            clauses.push(ctx.unique_clause(unique));
        }

        let clause_count = clauses.len();
        let mut sql = format!(
            "CREATE TABLE {} ({})",
            ctx.qualified_table_name(),
            clauses.into_string()
        );

        if let Some(tablespace) = statement.tablespace.as_deref().map(str::trim) {
            if !tablespace.is_empty() && dialect.supports_tablespaces() {
                sql.push(' ');
                sql.push_str(ctx.kind.tablespace_keyword());
                sql.push(' ');
                sql.push_str(tablespace);
            }
        }

        tracing::debug!(
            table = %statement.table_name,
            dialect = %ctx.kind,
            clauses = clause_count,
            "generated CREATE TABLE"
        );

        vec![Sql::new(sql)]
    }
}

struct Context<'a> {
    statement: &'a CreateTableStatement,
    dialect: &'a dyn Dialect,
    kind: DialectKind,
    sink: &'a dyn DiagnosticSink,
}

impl Context<'_> {
    fn schema(&self) -> Option<&str> {
        self.statement.schema_name.as_deref()
    }

    fn table(&self) -> &str {
        &self.statement.table_name
    }

    fn qualified_table_name(&self) -> String {
        self.dialect.escape_table_name(self.schema(), self.table())
    }

    fn primary_key_name(&self) -> String {
        let name = self
            .statement
            .primary_key
            .as_ref()
            .and_then(|pk| pk.constraint_name())
            .map(str::to_string)
            .unwrap_or_else(|| self.dialect.generate_primary_key_name(self.table()));
        self.dialect.escape_constraint_name(&name)
    }

    /// The column declared inline as `PRIMARY KEY AUTOINCREMENT`, if any
    fn inline_autoincrement_key(&self) -> Option<&str> {
        if !self.kind.inline_autoincrement_primary_key() {
            return None;
        }
        self.statement
            .single_primary_key_column()
            .filter(|column| self.statement.is_auto_increment(column))
    }

    fn column_clause(&self, column: &str) -> Clause {
        let statement = self.statement;
        let dialect = self.dialect;
        let auto_increment = statement.is_auto_increment(column);

        let mut clause = Clause::new();
        clause.push(&dialect.escape_column_name(self.schema(), self.table(), column));
        clause.push(&dialect.column_type(
            statement.column_type(column).unwrap_or_default().trim(),
            auto_increment,
        ));

        if self.inline_autoincrement_key() == Some(column) {
            clause
                .push("CONSTRAINT")
                .push(&self.primary_key_name())
                .push("PRIMARY KEY AUTOINCREMENT");
        }

        // A blank default has no SQL rendering; validation reports it.
        if let Some(value) = statement
            .default_for(column)
            .filter(|v| !v.trim().is_empty())
        {
            if self.kind.named_default_constraints() {
                clause
                    .push("CONSTRAINT")
                    .push(&dialect.generate_default_constraint_name(self.table(), column));
            }
            clause.push("DEFAULT").push(value);
        }

        if auto_increment {
            if !dialect.supports_auto_increment() {
                self.sink.report(
                    Diagnostic::warning(
                        DiagnosticKind::UnsupportedAutoIncrement,
                        format!(
                            "{} does not support autoincrement columns as requested for {}",
                            dialect.product_name(),
                            self.qualified_table_name()
                        ),
                    )
                    .with_column(column),
                );
            } else {
                clause.push(dialect.auto_increment_clause());
            }
        }

        if statement.is_not_null(column) {
            clause.push("NOT NULL");
        } else if self.kind.explicit_null() {
            clause.push("NULL");
        }

        if self.kind.inline_single_column_primary_key()
            && statement.single_primary_key_column() == Some(column)
        {
            clause.push("PRIMARY KEY");
        }

        clause
    }

    fn primary_key_clause(&self) -> Option<Clause> {
        let pk = self
            .statement
            .primary_key
            .as_ref()
            .filter(|pk| !pk.columns.is_empty())?;

        if self.kind.omits_table_primary_key() || self.inline_autoincrement_key().is_some() {
            return None;
        }

        let mut clause = Clause::new();
        clause
            .push("CONSTRAINT")
            .push(&self.primary_key_name())
            .push("PRIMARY KEY")
            .push_parenthesized(&self.dialect.escape_column_name_list(&pk.columns));
        Some(clause)
    }

    fn foreign_key_clause(&self, fk: &ForeignKeyConstraint) -> Clause {
        let name = fk
            .constraint_name()
            .map(|n| self.dialect.escape_constraint_name(n));
        let trailing_name = self.kind.constraint_name_trails();

        let mut clause = Clause::new();
        if let Some(name) = name.as_deref().filter(|_| !trailing_name) {
            clause.push("CONSTRAINT").push(name);
        }
        clause
            .push("FOREIGN KEY")
            .push_parenthesized(&self.dialect.escape_column_name(
                self.schema(),
                self.table(),
                &fk.column,
            ))
            .push("REFERENCES")
            .push(&fk.references);

        if fk.delete_cascade {
            clause.push("ON DELETE CASCADE");
        }
        if let Some(name) = name.as_deref().filter(|_| trailing_name) {
            clause.push("CONSTRAINT").push(name);
        }
        if fk.initially_deferred {
            clause.push("INITIALLY DEFERRED");
        }
        if fk.deferrable {
            clause.push("DEFERRABLE");
        }
        clause
    }

    fn unique_clause(&self, unique: &UniqueConstraint) -> Clause {
        let name = unique
            .constraint_name()
            .map(|n| self.dialect.escape_constraint_name(n));
        let trailing_name = self.kind.constraint_name_trails();

        let mut clause = Clause::new();
        if let Some(name) = name.as_deref().filter(|_| !trailing_name) {
            clause.push("CONSTRAINT").push(name);
        }
        clause
            .push("UNIQUE")
            .push_parenthesized(&self.dialect.escape_column_name_list(&unique.columns));
        if let Some(name) = name.as_deref().filter(|_| trailing_name) {
            clause.push("CONSTRAINT").push(name);
        }
        clause
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dialect::StandardDialect;
    use crate::error::CollectingSink;
    use crate::statement::PrimaryKeyConstraint;

    fn render(stmt: &CreateTableStatement, kind: DialectKind) -> String {
        let sink = CollectingSink::new();
        let sql = CreateTableGenerator.generate(stmt, &StandardDialect::new(kind), &sink);
        assert_eq!(sql.len(), 1);
        sql[0].text().to_string()
    }

    #[test]
    fn test_plain_columns() {
        let stmt = CreateTableStatement::new("t1")
            .column("id", "INT")
            .column("name", "VARCHAR(50)")
            .not_null("name");

        assert_eq!(
            render(&stmt, DialectKind::Generic),
            "CREATE TABLE t1 (id INT, name VARCHAR(50) NOT NULL)"
        );
    }

    #[test]
    fn test_missing_type_emits_bare_column() {
        let mut stmt = CreateTableStatement::new("t").column("a", "INT");
        stmt.columns.push("b".to_string());

        assert_eq!(render(&stmt, DialectKind::Generic), "CREATE TABLE t (a INT, b)");
    }

    #[test]
    fn test_primary_key_uses_generated_name() {
        let stmt = CreateTableStatement::new("users")
            .column("id", "INT")
            .not_null("id")
            .primary_key(PrimaryKeyConstraint::new(["id"]));

        assert_eq!(
            render(&stmt, DialectKind::Db2),
            "CREATE TABLE users (id INT NOT NULL, CONSTRAINT PK_USERS PRIMARY KEY (id))"
        );
    }

    #[test]
    fn test_sqlite_inline_key_with_explicit_name() {
        let stmt = CreateTableStatement::new("users")
            .column("id", "INT")
            .auto_increment("id")
            .primary_key(PrimaryKeyConstraint::new(["id"]).named("pk_users"));

        assert_eq!(
            render(&stmt, DialectKind::Sqlite),
            "CREATE TABLE users (id INTEGER CONSTRAINT pk_users PRIMARY KEY AUTOINCREMENT)"
        );
    }

    #[test]
    fn test_sqlite_key_without_auto_increment_stays_table_level() {
        let stmt = CreateTableStatement::new("users")
            .column("id", "INTEGER")
            .primary_key(PrimaryKeyConstraint::new(["id"]));

        assert_eq!(
            render(&stmt, DialectKind::Sqlite),
            "CREATE TABLE users (id INTEGER, CONSTRAINT PK_USERS PRIMARY KEY (id))"
        );
    }

    #[test]
    fn test_auto_increment_clause_precedes_nullability() {
        let stmt = CreateTableStatement::new("t")
            .column("id", "INT")
            .auto_increment("id")
            .not_null("id");

        assert_eq!(
            render(&stmt, DialectKind::Mssql),
            "CREATE TABLE [t] ([id] INT IDENTITY NOT NULL)"
        );
        assert_eq!(
            render(&stmt, DialectKind::SybaseAsa),
            "CREATE TABLE t (id INT DEFAULT AUTOINCREMENT NOT NULL)"
        );
    }

    #[test]
    fn test_default_before_auto_increment() {
        let stmt = CreateTableStatement::new("t")
            .column("n", "INT")
            .default_value("n", "0")
            .auto_increment("n");

        assert_eq!(
            render(&stmt, DialectKind::Db2),
            "CREATE TABLE t (n INT DEFAULT 0 GENERATED BY DEFAULT AS IDENTITY)"
        );
    }

    #[test]
    fn test_unsupported_auto_increment_warns_once() {
        let stmt = CreateTableStatement::new("t")
            .column("id", "INT")
            .column("name", "TEXT")
            .auto_increment("id");
        let sink = CollectingSink::new();

        let sql = CreateTableGenerator.generate(
            &stmt,
            &StandardDialect::new(DialectKind::Other),
            &sink,
        );

        assert_eq!(sql[0].text(), "CREATE TABLE t (id INT, name TEXT)");
        let diagnostics = sink.into_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::UnsupportedAutoIncrement);
        assert_eq!(diagnostics[0].column.as_deref(), Some("id"));
        assert!(diagnostics[0].message.starts_with("Unknown does not support"));
        assert!(diagnostics[0].message.ends_with(" t"));
    }

    #[test]
    fn test_foreign_key_flags_order() {
        let stmt = CreateTableStatement::new("orders")
            .column("user_id", "INT")
            .foreign_key(
                ForeignKeyConstraint::new("fk_user", "user_id", "users(id)")
                    .on_delete_cascade()
                    .deferrable()
                    .initially_deferred(),
            );

        assert_eq!(
            render(&stmt, DialectKind::Generic),
            "CREATE TABLE orders (user_id INT, CONSTRAINT fk_user FOREIGN KEY (user_id) \
             REFERENCES users(id) ON DELETE CASCADE INITIALLY DEFERRED DEFERRABLE)"
        );
        assert_eq!(
            render(&stmt, DialectKind::Informix),
            "CREATE TABLE orders (user_id INT, FOREIGN KEY (user_id) REFERENCES users(id) \
             ON DELETE CASCADE CONSTRAINT fk_user INITIALLY DEFERRED DEFERRABLE)"
        );
    }

    #[test]
    fn test_blank_foreign_key_name_has_no_constraint_clause() {
        let stmt = CreateTableStatement::new("orders")
            .column("user_id", "INT")
            .foreign_key(
                ForeignKeyConstraint::new("  ", "user_id", "users(id)").on_delete_cascade(),
            );

        assert_eq!(
            render(&stmt, DialectKind::Generic),
            "CREATE TABLE orders (user_id INT, FOREIGN KEY (user_id) REFERENCES users(id) \
             ON DELETE CASCADE)"
        );
        assert_eq!(
            render(&stmt, DialectKind::Informix),
            "CREATE TABLE orders (user_id INT, FOREIGN KEY (user_id) REFERENCES users(id) \
             ON DELETE CASCADE)"
        );
    }

    #[test]
    fn test_blank_default_is_not_rendered() {
        let stmt = CreateTableStatement::new("t")
            .column("c", "INT")
            .default_value("c", "")
            .not_null("c");

        assert_eq!(render(&stmt, DialectKind::Generic), "CREATE TABLE t (c INT NOT NULL)");
        assert_eq!(render(&stmt, DialectKind::Mssql), "CREATE TABLE [t] ([c] INT NOT NULL)");
    }

    #[test]
    fn test_default_and_reference_text_pass_through_verbatim() {
        let stmt = CreateTableStatement::new("t")
            .column("label", "VARCHAR(10)")
            .default_value("label", "'  '")
            .foreign_key(ForeignKeyConstraint::new("fk_label", "label", "labels(code)"));

        assert_eq!(
            render(&stmt, DialectKind::Generic),
            "CREATE TABLE t (label VARCHAR(10) DEFAULT '  ', \
             CONSTRAINT fk_label FOREIGN KEY (label) REFERENCES labels(code))"
        );
    }

    #[test]
    fn test_unnamed_unique_has_no_constraint_clause() {
        let stmt = CreateTableStatement::new("t")
            .column("a", "INT")
            .column("b", "INT")
            .unique(UniqueConstraint::new(["a", "b"]).named("  "));

        for kind in [DialectKind::Generic, DialectKind::Informix] {
            assert_eq!(
                render(&stmt, kind),
                "CREATE TABLE t (a INT, b INT, UNIQUE (a, b))"
            );
        }
    }

    #[test]
    fn test_blank_tablespace_is_ignored() {
        let stmt = CreateTableStatement::new("t")
            .column("a", "INT")
            .tablespace(" ");

        assert_eq!(render(&stmt, DialectKind::Db2), "CREATE TABLE t (a INT)");
    }
}
