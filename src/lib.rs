// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! conventional-msg - commit headline linter
//!
//! Validates the first line of a commit message against
//! `type(area[,...])[!]: {tag} message` and a repository-configured rule set.
//!
//! # Features
//!
//! - **Grammar**: headline matching with optional areas and breaking-change tags
//! - **Rule Set**: allowed types, areas and tags, loaded from `pyproject.toml`
//! - **Revisions**: `revise(<commit>)` headlines checked against repository history
//!
//! # Example
//!
//! ```no_run
//! use conventional_msg::config::MessageRules;
//! use conventional_msg::git::{find_repo_root, open_repo};
//! use conventional_msg::rules::validate_headline;
//!
//! let rules = MessageRules::load(&find_repo_root().unwrap()).unwrap();
//! let repo = open_repo().unwrap();
//!
//! let ok = validate_headline(
//!     "feat(core): add widgets support",
//!     |warning| eprintln!("ERROR {}", warning),
//!     &rules,
//!     &repo,
//! );
//! assert!(ok);
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod headline;
pub mod rules;

// Re-exports for convenience
pub use config::MessageRules;
pub use error::{MsgError, Result};
pub use rules::{validate_headline, RuleEngine};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of conventional-msg.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
