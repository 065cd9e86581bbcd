//! DDL generators
//!
//! Every generator turns one statement into one or more [`Sql`] values for a
//! target [`Dialect`]. Most statements produce a single value; the result is
//! a vector so that generators can emit follow-up statements when needed.

mod create_table;
mod writer;

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::error::{Diagnostic, DiagnosticSink, TracingSink, ValidationFailed};
use crate::statement::CreateTableStatement;

pub use create_table::CreateTableGenerator;

/// Generated SQL statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sql {
    text: String,
    end_delimiter: String,
}

impl Sql {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            end_delimiter: ";".to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn end_delimiter(&self) -> &str {
        &self.end_delimiter
    }

    /// Statement text terminated with its end delimiter
    pub fn to_script(&self) -> String {
        format!("{}{}", self.text, self.end_delimiter)
    }
}

impl std::fmt::Display for Sql {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Shape shared by all DDL generators
pub trait SqlGenerator<S> {
    /// Check the statement's preconditions. Generation assumes no
    /// error-severity diagnostic was returned.
    fn validate(&self, statement: &S, dialect: &dyn Dialect) -> Vec<Diagnostic>;

    /// Render the statement. Non-fatal problems go to `sink`.
    fn generate(&self, statement: &S, dialect: &dyn Dialect, sink: &dyn DiagnosticSink)
        -> Vec<Sql>;
}

/// Compile a CREATE TABLE statement, logging warnings through `tracing`
pub fn compile(statement: &CreateTableStatement, dialect: &dyn Dialect) -> Vec<Sql> {
    compile_with_sink(statement, dialect, &TracingSink)
}

/// Compile a CREATE TABLE statement, reporting warnings to `sink`
pub fn compile_with_sink(
    statement: &CreateTableStatement,
    dialect: &dyn Dialect,
    sink: &dyn DiagnosticSink,
) -> Vec<Sql> {
    CreateTableGenerator.generate(statement, dialect, sink)
}

/// Validate, then compile. Non-error validation diagnostics are forwarded to
/// `sink` before generation starts.
pub fn generate_checked(
    statement: &CreateTableStatement,
    dialect: &dyn Dialect,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<Sql>, ValidationFailed> {
    let generator = CreateTableGenerator;
    let diagnostics = generator.validate(statement, dialect);

    if diagnostics.iter().any(Diagnostic::is_error) {
        return Err(ValidationFailed {
            table: statement.table_name.clone(),
            diagnostics,
        });
    }

    for diagnostic in diagnostics {
        sink.report(diagnostic);
    }

    Ok(generator.generate(statement, dialect, sink))
}
