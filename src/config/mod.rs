// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for conventional-msg.
//!
//! This module handles loading and validating the rule set from the
//! project's `pyproject.toml` or a standalone TOML file.

pub mod default;
mod loader;
mod schema;

pub use default::{example_config, DEFAULT_AREALESS, DEFAULT_AREAS, DEFAULT_TAGS, DEFAULT_TYPES};
pub use loader::{load_rules, load_rules_from, parse_pyproject, parse_rules, PYPROJECT_FILE};
pub use schema::*;
