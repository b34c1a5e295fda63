// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Checks for revision headlines.
//!
//! For the revision type the area slot holds an optional commit reference:
//!
//! - omitted: the revision targets commits already on the current feature
//!   branch and will be squashed before merging, so HEAD must be at least
//!   one commit past the integration branch and not on it;
//! - given: the revision targets a landed commit, which must exist, be a
//!   commit, and be an ancestor of HEAD.

use crate::config::MessageRules;
use crate::git::HistoryProvider;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Abbreviated or full lowercase object id.
    static ref REVISION_REGEX: Regex = Regex::new(r"^[a-f0-9]{6,}$").unwrap();
}

const HEAD: &str = "HEAD";

/// Validate the reference slot of a revision headline.
///
/// History failures are reported through `warn` and reject the headline.
pub fn check_revision(
    reference: Option<&str>,
    rules: &MessageRules,
    history: &dyn HistoryProvider,
    warn: &mut dyn FnMut(&str),
) -> bool {
    match reference {
        None => check_implicit_revision(rules, history, warn),
        Some(reference) => check_explicit_revision(reference, history, warn),
    }
}

fn check_implicit_revision(
    rules: &MessageRules,
    history: &dyn HistoryProvider,
    warn: &mut dyn FnMut(&str),
) -> bool {
    let current_branch = match history.current_branch_name() {
        Ok(branch) => branch,
        Err(e) => {
            warn(&format!("could not query history: {}", e));
            return false;
        }
    };

    let merge_base = match history.merge_base(HEAD, &rules.branch) {
        Ok(Some(base)) if !base.is_empty() => base,
        Ok(_) => {
            warn(&format!("could not locate merge base in {}", rules.branch));
            return false;
        }
        Err(e) => {
            tracing::debug!("merge-base {} {} failed: {}", HEAD, rules.branch, e);
            warn(&format!("could not locate merge base in {}", rules.branch));
            return false;
        }
    };

    let commit_count = match history.commit_count_excluding(&merge_base, HEAD) {
        Ok(count) => count,
        Err(e) => {
            warn(&format!("could not query history: {}", e));
            return false;
        }
    };

    tracing::debug!(
        "revision on '{}', {} commit(s) past {}",
        current_branch,
        commit_count,
        merge_base
    );

    if commit_count == 0 || current_branch == rules.branch {
        warn(&format!(
            "a hash in {} must be specified for revision:\n\n\t{}(<commit>): ...\n",
            rules.branch, rules.revise_name
        ));
        return false;
    }

    true
}

fn check_explicit_revision(
    reference: &str,
    history: &dyn HistoryProvider,
    warn: &mut dyn FnMut(&str),
) -> bool {
    if !REVISION_REGEX.is_match(reference) {
        warn(&format!("'{}' is not a valid revision", reference));
        return false;
    }

    match history.classify_object(reference) {
        Ok(kind) if kind == "commit" => {}
        Ok(kind) => {
            tracing::debug!("{} is a {}", reference, kind);
            warn(&format!("'{}' is not a commit", reference));
            return false;
        }
        Err(e) => {
            tracing::debug!("cat-file {} failed: {}", reference, e);
            warn(&format!("'{}' does not exist in this repository", reference));
            return false;
        }
    }

    match history.is_ancestor(reference, HEAD) {
        Ok(true) => true,
        Ok(false) => {
            warn(&format!("'{}' is not an ancestor of HEAD", reference));
            false
        }
        Err(e) => {
            tracing::debug!("ancestry check for {} failed: {}", reference, e);
            warn(&format!("'{}' is not an ancestor of HEAD", reference));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::FakeHistory;

    fn run(reference: Option<&str>, rules: &MessageRules, history: &FakeHistory) -> (bool, Vec<String>) {
        let mut warnings = Vec::new();
        let accepted = check_revision(reference, rules, history, &mut |w: &str| {
            warnings.push(w.to_string())
        });
        (accepted, warnings)
    }

    #[test]
    fn test_implicit_on_feature_branch() {
        let history = FakeHistory::on_branch("feature", 2);
        let (accepted, warnings) = run(None, &MessageRules::default(), &history);
        assert!(accepted);
        assert!(warnings.is_empty());
        assert_eq!(
            *history.calls.borrow(),
            vec![
                "current_branch_name",
                "merge_base HEAD master",
                "commit_count_excluding deadbeef HEAD",
            ]
        );
    }

    #[test]
    fn test_implicit_without_commits_rejected() {
        let history = FakeHistory::on_branch("feature", 0);
        let (accepted, warnings) = run(None, &MessageRules::default(), &history);
        assert!(!accepted);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("a hash in master must be specified for revision"));
    }

    #[test]
    fn test_implicit_on_integration_branch_rejected() {
        let history = FakeHistory::on_branch("master", 3);
        let (accepted, warnings) = run(None, &MessageRules::default(), &history);
        assert!(!accepted);
        assert!(warnings[0].contains("must be specified for revision"));
    }

    #[test]
    fn test_implicit_uses_configured_branch() {
        let rules = MessageRules {
            branch: "main".to_string(),
            ..MessageRules::default()
        };
        let history = FakeHistory::on_branch("main", 3);
        let (accepted, warnings) = run(None, &rules, &history);
        assert!(!accepted);
        assert!(warnings[0].contains("a hash in main must be specified"));
        assert!(history.calls.borrow().contains(&"merge_base HEAD main".to_string()));
    }

    #[test]
    fn test_implicit_missing_merge_base() {
        let history = FakeHistory {
            merge_base: None,
            ..FakeHistory::on_branch("feature", 2)
        };
        let (accepted, warnings) = run(None, &MessageRules::default(), &history);
        assert!(!accepted);
        assert_eq!(warnings, vec!["could not locate merge base in master"]);
    }

    #[test]
    fn test_implicit_merge_base_failure() {
        let history = FakeHistory::on_branch("feature", 2).fail_on("merge_base");
        let (accepted, warnings) = run(None, &MessageRules::default(), &history);
        assert!(!accepted);
        assert_eq!(warnings, vec!["could not locate merge base in master"]);
        assert_eq!(history.calls.borrow().len(), 2);
    }

    #[test]
    fn test_implicit_commit_count_failure() {
        let history = FakeHistory::on_branch("feature", 2).fail_on("commit_count_excluding");
        let (accepted, warnings) = run(None, &MessageRules::default(), &history);
        assert!(!accepted);
        assert_eq!(
            warnings,
            vec!["could not query history: Git command failed: commit_count_excluding - injected failure"]
        );
    }

    #[test]
    fn test_implicit_branch_query_failure() {
        let history = FakeHistory::default();
        let (accepted, warnings) = run(None, &MessageRules::default(), &history);
        assert!(!accepted);
        assert!(warnings[0].starts_with("could not query history"));
    }

    #[test]
    fn test_explicit_ancestor_commit() {
        let history = FakeHistory::default().with_object("abc123", "commit", true);
        let (accepted, warnings) = run(Some("abc123"), &MessageRules::default(), &history);
        assert!(accepted);
        assert!(warnings.is_empty());
        assert_eq!(
            *history.calls.borrow(),
            vec!["classify_object abc123", "is_ancestor abc123 HEAD"]
        );
    }

    #[test]
    fn test_explicit_not_ancestor() {
        let history = FakeHistory::default().with_object("abc123", "commit", false);
        let (accepted, warnings) = run(Some("abc123"), &MessageRules::default(), &history);
        assert!(!accepted);
        assert_eq!(warnings, vec!["'abc123' is not an ancestor of HEAD"]);
    }

    #[test]
    fn test_explicit_ancestry_failure() {
        let history = FakeHistory::default()
            .with_object("abc123", "commit", true)
            .fail_on("is_ancestor");
        let (accepted, warnings) = run(Some("abc123"), &MessageRules::default(), &history);
        assert!(!accepted);
        assert_eq!(warnings, vec!["'abc123' is not an ancestor of HEAD"]);
    }

    #[test]
    fn test_explicit_not_a_commit() {
        let history = FakeHistory::default().with_object("abc123", "blob", true);
        let (accepted, warnings) = run(Some("abc123"), &MessageRules::default(), &history);
        assert!(!accepted);
        assert_eq!(warnings, vec!["'abc123' is not a commit"]);
    }

    #[test]
    fn test_explicit_missing_object() {
        let history = FakeHistory::default();
        let (accepted, warnings) = run(Some("deadbe"), &MessageRules::default(), &history);
        assert!(!accepted);
        assert_eq!(warnings, vec!["'deadbe' does not exist in this repository"]);
    }

    #[test]
    fn test_explicit_syntax() {
        let history = FakeHistory::default();
        for reference in ["main", "abc12", "ABC123", "abc12g"] {
            let (accepted, warnings) = run(Some(reference), &MessageRules::default(), &history);
            assert!(!accepted);
            assert_eq!(warnings, vec![format!("'{}' is not a valid revision", reference)]);
        }
        assert!(history.calls.borrow().is_empty());
    }
}
