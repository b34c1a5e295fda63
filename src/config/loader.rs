// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, MsgError, Result};
use std::path::Path;

use super::schema::MessageRules;

/// Project file the rules are read from.
pub const PYPROJECT_FILE: &str = "pyproject.toml";

/// Key of the rules table under `[tool]`.
pub const TOOL_KEY: &str = "conventional-msg";

/// Load rules for the repository rooted at `repo_root`.
///
/// A missing `pyproject.toml` or a missing `[tool.conventional-msg]` table
/// yields the default rules.
pub fn load_rules(repo_root: &Path) -> Result<MessageRules> {
    let path = repo_root.join(PYPROJECT_FILE);
    if !path.exists() {
        tracing::debug!("No {} in {:?}, using defaults", PYPROJECT_FILE, repo_root);
        return Ok(MessageRules::default());
    }
    load_rules_from(&path)
}

/// Load rules from a specific path.
///
/// Files named `pyproject.toml` are read through their
/// `[tool.conventional-msg]` table; anything else is a bare rules table.
pub fn load_rules_from(path: &Path) -> Result<MessageRules> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(MsgError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        MsgError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    if path.file_name().and_then(|n| n.to_str()) == Some(PYPROJECT_FILE) {
        parse_pyproject(&content)
    } else {
        parse_rules(&content)
    }
}

/// Parse rules from a `pyproject.toml` document.
pub fn parse_pyproject(content: &str) -> Result<MessageRules> {
    let document: toml::Table = toml::from_str(content).map_err(parse_error)?;

    let section = document
        .get("tool")
        .and_then(|tool| tool.get(TOOL_KEY))
        .cloned();

    match section {
        Some(value) => {
            let rules: MessageRules = value.try_into().map_err(parse_error)?;
            rules.validate()?;
            Ok(rules)
        }
        None => {
            tracing::debug!("No [tool.{}] table, using defaults", TOOL_KEY);
            Ok(MessageRules::default())
        }
    }
}

/// Parse rules from a bare TOML table.
pub fn parse_rules(content: &str) -> Result<MessageRules> {
    let rules: MessageRules = toml::from_str(content).map_err(parse_error)?;
    rules.validate()?;
    Ok(rules)
}

fn parse_error(e: toml::de::Error) -> MsgError {
    MsgError::Config(ConfigError::ParseError {
        message: format!("Failed to parse TOML: {}", e),
    })
}
