// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command execution.

use crate::config::{describe_set, MessageRules};
use crate::error::{Result, ResultExt};
use crate::git;
use crate::rules::RuleEngine;
use std::io::{IsTerminal, Read};

use super::args::Cli;

/// Run the CLI with the given arguments.
///
/// Returns whether the headline was accepted. Printing usage on an
/// interactive terminal counts as a rejection.
pub fn run(cli: Cli) -> Result<bool> {
    let repo = git::open_repo()?;

    // Load configuration
    let rules = if let Some(config_path) = &cli.config {
        MessageRules::load_from(config_path)?
    } else {
        MessageRules::load(repo.workdir())?
    };

    let message = match &cli.file {
        Some(path) => {
            tracing::debug!("Reading message from {:?}", path);
            std::fs::read_to_string(path)
                .context(format!("Failed to read {}", path.display()))?
                .trim()
                .to_string()
        }
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                println!("{}", usage(&rules));
                return Ok(false);
            }
            let mut message = String::new();
            stdin
                .lock()
                .read_to_string(&mut message)
                .context("Failed to read standard input")?;
            message
        }
    };

    let engine = RuleEngine::new(rules, Box::new(repo));
    let result = engine.validate(&message);
    result.print(cli.format);

    Ok(result.is_valid())
}

/// Usage text listing the live rule set.
pub fn usage(rules: &MessageRules) -> String {
    let list = |items: Vec<String>| -> String {
        items
            .iter()
            .map(|item| format!("  - {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let areas = match rules.allowed_areas() {
        Some(areas) => areas.iter().cloned().collect(),
        None => vec!["*".to_string()],
    };

    format!(
        "conventional-msg {version}

Validates commit message against modified conventional commit criteria:
    type(area[,...])[!]: {{tag}} message

Types:
{types}

Areas:
{areas}

Tags:
{tags}

Minimum message length: {min_len}
Types that may omit the area: {arealess}
",
        version = crate::version::version_string(),
        types = list(rules.types.iter().cloned().collect()),
        areas = list(areas),
        tags = list(rules.tags.iter().cloned().collect()),
        min_len = rules.min_len,
        arealess = describe_set(&rules.allow_omit_area),
    )
}
