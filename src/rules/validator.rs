// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use console::style;

/// Result of validating a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// The original message.
    pub message: String,
    /// Whether the headline was accepted.
    pub accepted: bool,
    /// Warnings in the order they were reported.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Create a new, accepted result with no warnings.
    pub fn new(message: String) -> Self {
        Self {
            message,
            accepted: true,
            warnings: Vec::new(),
        }
    }

    /// Check if the validation passed.
    pub fn is_valid(&self) -> bool {
        self.accepted
    }

    /// Print the result.
    ///
    /// Warnings go to stdout in text mode, one `ERROR` line each.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        for warning in &self.warnings {
            println!("{} {}", style("ERROR").red(), warning);
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
        );
    }

    /// JSON representation used by `--format json`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.accepted,
            "message": self.message,
            "warnings": self.warnings,
        })
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        match (self.accepted, self.warnings.len()) {
            (true, 0) => "Valid".to_string(),
            (true, n) => format!("Valid ({} warnings)", n),
            (false, n) => format!("Invalid ({} warnings)", n),
        }
    }
}
