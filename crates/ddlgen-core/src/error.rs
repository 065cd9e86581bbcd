//! Error and diagnostic types

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Diagnostic message produced while validating or generating a statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub message: String,
    /// Column the diagnostic refers to, if any
    pub column: Option<String>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            message: message.into(),
            column: None,
            help: None,
        }
    }

    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            message: message.into(),
            column: None,
            help: None,
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Get the error code string (e.g., "E0001")
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message)
    }
}

/// Types of diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// E0001: Table name is missing or blank
    MissingTableName,
    /// E0002: Statement declares no columns
    MissingColumns,
    /// E0003: A constraint or column set names an undeclared column
    UnknownColumn,
    /// E0004: Primary key without columns
    EmptyPrimaryKey,
    /// E0005: Column has no registered type
    MissingColumnType,
    /// E0006: Default value is empty or whitespace
    BlankDefaultValue,
    /// W0001: Auto-increment requested on a dialect that cannot express it
    UnsupportedAutoIncrement,
}

impl DiagnosticKind {
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingTableName => "E0001",
            DiagnosticKind::MissingColumns => "E0002",
            DiagnosticKind::UnknownColumn => "E0003",
            DiagnosticKind::EmptyPrimaryKey => "E0004",
            DiagnosticKind::MissingColumnType => "E0005",
            DiagnosticKind::BlankDefaultValue => "E0006",
            DiagnosticKind::UnsupportedAutoIncrement => "W0001",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingTableName => "missing-table-name",
            DiagnosticKind::MissingColumns => "missing-columns",
            DiagnosticKind::UnknownColumn => "unknown-column",
            DiagnosticKind::EmptyPrimaryKey => "empty-primary-key",
            DiagnosticKind::MissingColumnType => "missing-column-type",
            DiagnosticKind::BlankDefaultValue => "blank-default-value",
            DiagnosticKind::UnsupportedAutoIncrement => "unsupported-auto-increment",
        }
    }
}

/// Receiver for diagnostics raised during generation.
///
/// Reporting is best-effort: implementations must not fail or panic.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => tracing::error!(code = diagnostic.code(), "{}", diagnostic.message),
            Severity::Warning => tracing::warn!(code = diagnostic.code(), "{}", diagnostic.message),
        }
    }
}

/// Keeps every reported diagnostic in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

/// A statement failed validation and was not compiled
#[derive(Debug, thiserror::Error)]
#[error("statement for table '{table}' failed validation")]
pub struct ValidationFailed {
    pub table: String,
    pub diagnostics: Vec<Diagnostic>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let kinds = [
            DiagnosticKind::MissingTableName,
            DiagnosticKind::MissingColumns,
            DiagnosticKind::UnknownColumn,
            DiagnosticKind::EmptyPrimaryKey,
            DiagnosticKind::MissingColumnType,
            DiagnosticKind::BlankDefaultValue,
            DiagnosticKind::UnsupportedAutoIncrement,
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_collecting_sink_keeps_order() {
        let sink = CollectingSink::new();
        sink.report(Diagnostic::warning(DiagnosticKind::UnsupportedAutoIncrement, "first"));
        sink.report(Diagnostic::error(DiagnosticKind::MissingColumns, "second"));

        let diagnostics = sink.into_diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].message, "first");
        assert_eq!(diagnostics[1].severity, Severity::Error);
    }

    #[test]
    fn test_validation_failed_message() {
        let err = ValidationFailed {
            table: "orders".to_string(),
            diagnostics: vec![Diagnostic::error(DiagnosticKind::MissingColumns, "no columns")],
        };
        assert_eq!(err.to_string(), "statement for table 'orders' failed validation");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Warning).unwrap(), "\"warning\"");
        let severity: Severity = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(severity, Severity::Error);
        assert!(serde_json::from_str::<Severity>("\"info\"").is_err());
    }

    #[test]
    fn test_display_includes_code() {
        let diag = Diagnostic::error(DiagnosticKind::MissingTableName, "table name is required");
        assert_eq!(diag.to_string(), "[E0001] table name is required");
    }
}
