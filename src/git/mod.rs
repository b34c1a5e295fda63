// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! This module answers the history questions revision headlines depend on.

mod history;
mod repo;

pub use history::HistoryProvider;
pub use repo::{find_repo_root, open_repo, Repository};

#[cfg(test)]
pub(crate) use history::fake::FakeHistory;
