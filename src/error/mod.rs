// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for conventional-msg.
//!
//! Rejections of a headline are not errors: they are reported through the
//! warn sink and a boolean. The types here cover the surrounding plumbing
//! (configuration, repository access, I/O) and the grammar matcher, whose
//! errors are rendered as warnings rather than propagated.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for conventional-msg operations.
#[derive(Error, Debug)]
pub enum MsgError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Failed to get branch: {message}")]
    BranchFailed { message: String },

    #[error("Invalid object reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// Headline grammar errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeadlineError {
    #[error("empty or unparsable message: '{message}'")]
    Empty { message: String },

    #[error("\nmessage:\n    {message}\n\ndoes not obey conventional commit format:\n    type(area[,...])[!]: {{tag}} message\n")]
    Malformed { message: String },
}

/// Result type alias for conventional-msg operations.
pub type Result<T> = std::result::Result<T, MsgError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| MsgError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
