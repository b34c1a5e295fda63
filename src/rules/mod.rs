// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for headline validation.
//!
//! Checks run in a fixed order and stop at the first failure; the revision
//! type swaps the area checks for a lookup in repository history.

mod builtin;
mod engine;
mod revision;
mod validator;

pub use builtin::*;
pub use engine::{validate_headline, RuleEngine};
pub use revision::check_revision;
pub use validator::ValidationResult;
