//! Best-effort syntax check of generated SQL

use sqlparser::parser::{Parser, ParserError};

use crate::dialect::DialectKind;

/// Generated SQL that the closest available parser rejected
#[derive(Debug, thiserror::Error)]
#[error("{dialect} parser rejected generated SQL: {source}")]
pub struct SyntaxError {
    pub dialect: DialectKind,
    #[source]
    pub source: ParserError,
}

/// Parse `sql` with the parser dialect closest to `kind`.
///
/// The parsers do not cover every product extension (tablespace clauses,
/// trailing constraint names), so a failure here is a hint, not a verdict.
pub fn check(sql: &str, kind: DialectKind) -> Result<(), SyntaxError> {
    let dialect = kind.parser_dialect();
    Parser::parse_sql(dialect.as_ref(), sql)
        .map(|_| ())
        .map_err(|source| SyntaxError {
            dialect: kind,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_table() {
        check(
            "CREATE TABLE t1 (id INT, name VARCHAR(50) NOT NULL)",
            DialectKind::Generic,
        )
        .unwrap();
    }

    #[test]
    fn test_rejects_garbage() {
        let err = check("CREATE TABLE (", DialectKind::Generic).unwrap_err();
        assert_eq!(err.dialect, DialectKind::Generic);
        assert!(err.to_string().starts_with("generic parser rejected"));
    }
}
