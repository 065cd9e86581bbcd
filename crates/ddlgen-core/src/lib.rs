//! ddlgen-core: dialect-aware CREATE TABLE generation
//!
//! This library renders a dialect-neutral [`CreateTableStatement`] as SQL
//! text for a specific database product, without requiring a database
//! connection.

pub mod dialect;
pub mod error;
pub mod generator;
pub mod statement;
pub mod syntax;
pub mod validation;

pub use dialect::{Dialect, DialectKind, StandardDialect};
pub use error::{
    CollectingSink, Diagnostic, DiagnosticKind, DiagnosticSink, Severity, TracingSink,
    ValidationFailed,
};
pub use generator::{compile, compile_with_sink, generate_checked, Sql, SqlGenerator};
pub use statement::{
    CreateTableStatement, ForeignKeyConstraint, PrimaryKeyConstraint, UniqueConstraint,
};
