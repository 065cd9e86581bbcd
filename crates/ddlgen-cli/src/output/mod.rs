//! Output formatting

use ddlgen_core::dialect::Dialect;
use ddlgen_core::{Diagnostic, DialectKind, Severity, Sql, StandardDialect};
use miette::{IntoDiagnostic, Result};

use crate::args::OutputFormat;

/// Output formatter for generated SQL and diagnostics
pub struct OutputFormatter {
    format: OutputFormat,
    file_name: String,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, file_name: String) -> Self {
        Self { format, file_name }
    }

    /// Print generated statements with any diagnostics raised for them
    pub fn print_generated(&self, sql: &[Sql], diagnostics: &[Diagnostic]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                self.print_human(diagnostics);
                println!("-- {}", self.file_name);
                for statement in sql {
                    println!("{}", statement.to_script());
                }
                Ok(())
            }
            OutputFormat::Json => self.print_json(sql, diagnostics),
        }
    }

    /// Print diagnostics in the configured format
    pub fn print_diagnostics(&self, diagnostics: &[Diagnostic]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                self.print_human(diagnostics);
                Ok(())
            }
            OutputFormat::Json => self.print_json(&[], diagnostics),
        }
    }

    fn print_human(&self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            let severity_str = match diag.severity {
                Severity::Error => "\x1b[31merror\x1b[0m",
                Severity::Warning => "\x1b[33mwarning\x1b[0m",
            };

            eprintln!("{}[{}]: {}", severity_str, diag.code(), diag.message);
            match &diag.column {
                Some(column) => eprintln!("  --> {} (column {})", self.file_name, column),
                None => eprintln!("  --> {}", self.file_name),
            }

            if let Some(help) = &diag.help {
                eprintln!("   = help: {}", help);
            }

            eprintln!();
        }
    }

    fn print_json(&self, sql: &[Sql], diagnostics: &[Diagnostic]) -> Result<()> {
        let statements: Vec<&str> = sql.iter().map(Sql::text).collect();
        let output = serde_json::json!({
            "file": self.file_name,
            "sql": statements,
            "diagnostics": diagnostics
        });
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
        Ok(())
    }
}

/// Print the dialect capability table
pub fn print_dialects() {
    println!(
        "{:<12} {:<28} {:<15} {:<12}",
        "NAME", "PRODUCT", "AUTO-INCREMENT", "TABLESPACES"
    );
    for kind in DialectKind::ALL {
        let dialect = StandardDialect::new(kind);
        println!(
            "{:<12} {:<28} {:<15} {:<12}",
            kind.name(),
            dialect.product_name(),
            yes_no(dialect.supports_auto_increment()),
            yes_no(dialect.supports_tablespaces())
        );
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
