// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for conventional-msg.
//!
//! This module handles command-line argument parsing and reading the
//! message to validate.

pub mod args;
mod dispatch;

pub use args::{Cli, OutputFormat};
pub use dispatch::{run, usage};
