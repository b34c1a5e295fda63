// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Validate a commit headline against type(area[,...])[!]: {tag} message
///
/// Reads the message from FILE, or from standard input when it is not a
/// terminal. Exits 0 when the headline is accepted and 1 when it is rejected.
#[derive(Parser, Debug)]
#[command(name = "conventional-msg")]
#[command(author = "Eshan Roy")]
#[command(version = crate::version::version_string())]
#[command(about = "Commit headline linter", long_about = None)]
pub struct Cli {
    /// File holding the commit message (e.g. .git/COMMIT_EDITMSG)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Path to configuration file (pyproject.toml or a bare rules table)
    #[arg(short, long, env = "CONVENTIONAL_MSG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}
