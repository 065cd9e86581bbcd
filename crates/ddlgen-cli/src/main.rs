//! ddlgen CLI - render CREATE TABLE statements for a target database

mod args;
mod config;
mod output;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use ddlgen_core::{
    generate_checked, syntax, CollectingSink, CreateTableStatement, DialectKind, StandardDialect,
};
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::args::{Args, Command};
use crate::config::Config;
use crate::output::OutputFormatter;

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match (args.quiet, args.verbose) {
        (true, _) => tracing::Level::ERROR,
        (false, 0) => tracing::Level::WARN,
        (false, 1) => tracing::Level::INFO,
        (false, _) => tracing::Level::DEBUG,
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let quiet = args.quiet;
    match run(args.command, quiet) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(command: Command, quiet: bool) -> Result<bool> {
    match command {
        Command::Compile {
            files,
            dialect,
            format,
            check,
            config: config_path,
        } => {
            // Merge CLI args with config (CLI takes precedence)
            let config =
                Config::load(config_path.as_ref())?.merge_with_args(&dialect, &format, check);

            let kind: DialectKind = match config.dialect.as_deref() {
                Some(name) => name.parse().into_diagnostic()?,
                None => DialectKind::default(),
            };
            let dialect = StandardDialect::new(kind);
            let output_format = config.format.unwrap_or_default();

            let statement_files = expand_patterns(&files)?;
            if statement_files.is_empty() {
                miette::bail!("No statement files matched the given paths");
            }

            let mut failed = 0;
            for path in &statement_files {
                let statement = load_statement(path)?;
                let formatter = OutputFormatter::new(output_format, path.display().to_string());
                let sink = CollectingSink::new();

                match generate_checked(&statement, &dialect, &sink) {
                    Ok(sql) => {
                        if config.check {
                            for statement in &sql {
                                if let Err(e) = syntax::check(statement.text(), kind) {
                                    tracing::warn!(file = %path.display(), "{}", e);
                                }
                            }
                        }
                        formatter.print_generated(&sql, &sink.into_diagnostics())?;
                    }
                    Err(err) => {
                        failed += 1;
                        formatter.print_diagnostics(&err.diagnostics)?;
                    }
                }
            }

            if !quiet {
                if failed > 0 {
                    eprintln!(
                        "{} of {} file(s) failed validation",
                        failed,
                        statement_files.len()
                    );
                } else {
                    eprintln!(
                        "Generated {} file(s) for {}",
                        statement_files.len(),
                        kind
                    );
                }
            }

            Ok(failed > 0)
        }

        Command::Dialects => {
            output::print_dialects();
            Ok(false)
        }
    }
}

/// Expand glob patterns, keeping plain paths as given
fn expand_patterns(files: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for pattern in files {
        let pattern_str = pattern.display().to_string();
        if pattern_str.contains('*') {
            for path in glob::glob(&pattern_str).into_diagnostic()?.flatten() {
                paths.push(path);
            }
        } else {
            paths.push(pattern.clone());
        }
    }
    Ok(paths)
}

/// Load a statement from a JSON file, or TOML for any other extension
fn load_statement(path: &Path) -> Result<CreateTableStatement> {
    let content = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let statement: Result<CreateTableStatement> = if is_json {
        serde_json::from_str(&content).into_diagnostic()
    } else {
        toml::from_str(&content).into_diagnostic()
    };
    statement.wrap_err_with(|| format!("failed to parse statement in {}", path.display()))
}
