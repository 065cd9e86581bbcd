//! Clause builders for assembling SQL text
//!
//! Separators are only written between fragments that were actually
//! emitted, so the output never needs trailing-punctuation cleanup.

/// A single space-separated clause, e.g. a column definition
#[derive(Debug, Clone, Default)]
pub struct Clause {
    sql: String,
}

impl Clause {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment verbatim, separated from the previous one by a
    /// space. Empty fragments are ignored.
    pub fn push(&mut self, fragment: &str) -> &mut Self {
        if fragment.is_empty() {
            return self;
        }
        if !self.sql.is_empty() {
            self.sql.push(' ');
        }
        self.sql.push_str(fragment);
        self
    }

    /// Append a parenthesized fragment
    pub fn push_parenthesized(&mut self, inner: &str) -> &mut Self {
        self.push(&format!("({})", inner))
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.sql
    }
}

/// Comma-separated list of clauses
#[derive(Debug, Clone, Default)]
pub struct ClauseList {
    sql: String,
    emitted: usize,
}

impl ClauseList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a clause; empty clauses are skipped
    pub fn push(&mut self, clause: Clause) {
        if clause.is_empty() {
            return;
        }
        if self.emitted > 0 {
            self.sql.push_str(", ");
        }
        self.sql.push_str(clause.as_str());
        self.emitted += 1;
    }

    /// Number of clauses emitted so far
    pub fn len(&self) -> usize {
        self.emitted
    }

    pub fn into_string(self) -> String {
        self.sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_skips_empty_fragments() {
        let mut clause = Clause::new();
        clause.push("id").push("").push("INT").push("").push("NOT NULL");
        assert_eq!(clause.as_str(), "id INT NOT NULL");
    }

    #[test]
    fn test_clause_keeps_fragments_verbatim() {
        let mut clause = Clause::new();
        clause.push("DEFAULT").push("'  padded  '");
        assert_eq!(clause.as_str(), "DEFAULT '  padded  '");
    }

    #[test]
    fn test_clause_list_separators() {
        let mut list = ClauseList::new();
        list.push(Clause::new());

        let mut first = Clause::new();
        first.push("a INT");
        list.push(first);
        list.push(Clause::new());

        let mut second = Clause::new();
        second.push("UNIQUE").push_parenthesized("a");
        list.push(second);

        assert_eq!(list.len(), 2);
        assert_eq!(list.into_string(), "a INT, UNIQUE (a)");
    }
}
