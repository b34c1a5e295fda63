// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// Types accepted when the configuration does not list any.
pub const DEFAULT_TYPES: &[&str] = &["chore", "docs", "feat", "fix", "revise", "wip"];

/// Areas accepted when the configuration does not list any.
pub const DEFAULT_AREAS: &[&str] = &[
    "all", // rare
    "cli",
    "config",
    "core",
    "dev", // developer tooling
    "lib",
    "migrations",
    "model",
    "tests",
    "typings",
];

/// Tags accepted when the configuration does not list any.
pub const DEFAULT_TAGS: &[&str] = &["tests-failing"];

/// Types that may omit the area group by default.
pub const DEFAULT_AREALESS: &[&str] = &["docs", "wip"];

/// Generate an example `pyproject.toml` section.
pub fn example_config() -> &'static str {
    r#"# conventional-msg configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

[tool.conventional-msg]
# Minimum length of the message text after the separator
min_len = 8

# Accepted types
types = ["chore", "docs", "feat", "fix", "revise", "wip"]

# Accepted areas; use areas = "*" to accept any area
areas = ["all", "cli", "config", "core", "dev", "lib", "migrations", "model", "tests", "typings"]

# Tags accepted with the breaking-change form: type(area)!: {tag} message
tags = ["tests-failing"]

# Types that may omit the area group
allow_omit_area = ["docs", "wip"]

# Integration branch and the type used for revisions of earlier commits
branch = "master"
revise_name = "revise"
"#
}
