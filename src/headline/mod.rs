// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Headline grammar module.
//!
//! Matches the first line of a commit message against
//! `type(area[,...])[!]: {tag} message`.

mod message;

pub use message::Headline;
