//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "ddlgen")]
#[command(author, version, about = "Render CREATE TABLE statements for a target database")]
#[command(propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate SQL from statement files
    Compile {
        /// Statement files in TOML or JSON (supports glob patterns)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Target dialect
        #[arg(short, long, env = "DDLGEN_DIALECT")]
        dialect: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Parse the generated SQL and warn when the parser rejects it
        #[arg(long)]
        check: bool,

        /// Configuration file (defaults to ddlgen.toml in the current or a parent directory)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// List supported dialects and their capabilities
    Dialects,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// SQL script
    #[default]
    Text,
    /// JSON output
    Json,
}
