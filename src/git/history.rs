// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository history queries used by revision checks.

use crate::error::GitError;

/// Read-only view of repository history.
///
/// Revision headlines are the only ones that consult history, so the rule
/// engine takes this as a trait object and tests can supply canned answers.
pub trait HistoryProvider {
    /// Short name of the checked-out branch, or `HEAD` when detached.
    fn current_branch_name(&self) -> Result<String, GitError>;

    /// Best common ancestor of two revisions, `None` when they share none.
    fn merge_base(&self, one: &str, two: &str) -> Result<Option<String>, GitError>;

    /// Number of commits reachable from `head` but not from `base`.
    fn commit_count_excluding(&self, base: &str, head: &str) -> Result<usize, GitError>;

    /// Kind of the object `id` names: `commit`, `tree`, `blob` or `tag`.
    fn classify_object(&self, id: &str) -> Result<String, GitError>;

    /// Whether `candidate` is reachable from `reference` (a commit is its own
    /// ancestor).
    fn is_ancestor(&self, candidate: &str, reference: &str) -> Result<bool, GitError>;
}
