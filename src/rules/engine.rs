// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for headline validation.

use crate::config::MessageRules;
use crate::git::HistoryProvider;
use crate::headline::Headline;

use super::builtin::{
    check_area_required, check_areas, check_message_length, check_tag, check_type,
};
use super::revision::check_revision;
use super::validator::ValidationResult;

/// Validate a commit message headline against `rules`.
///
/// Every reason for rejecting is passed to `warn`, and a missing area on a
/// type that needs one is reported without rejecting. `history` is only
/// consulted for the revision type.
pub fn validate_headline(
    message: &str,
    mut warn: impl FnMut(&str),
    rules: &MessageRules,
    history: &dyn HistoryProvider,
) -> bool {
    let headline = match Headline::parse(message) {
        Ok(headline) => headline,
        Err(e) => {
            tracing::debug!("headline rejected by grammar");
            warn(&e.to_string());
            return false;
        }
    };

    tracing::debug!(
        commit_type = %headline.commit_type,
        areas = ?headline.areas,
        tag = ?headline.tag,
        "parsed headline"
    );

    if let Some(warning) = check_type(&headline, rules) {
        warn(&warning);
        return false;
    }

    if headline.commit_type == rules.revise_name {
        if !check_revision(headline.areas.as_deref(), rules, history, &mut warn) {
            return false;
        }
    } else {
        // Advisory only; the headline is still accepted.
        if let Some(warning) = check_area_required(&headline, rules) {
            warn(&warning);
        }
        if let Some(warning) = check_areas(&headline, rules) {
            warn(&warning);
            return false;
        }
    }

    for check in [check_tag, check_message_length] {
        if let Some(warning) = check(&headline, rules) {
            warn(&warning);
            return false;
        }
    }

    tracing::debug!("headline accepted");
    true
}

/// Rule engine bundling a rule set with the history it consults.
pub struct RuleEngine {
    rules: MessageRules,
    history: Box<dyn HistoryProvider>,
}

impl RuleEngine {
    /// Create a new rule engine.
    pub fn new(rules: MessageRules, history: Box<dyn HistoryProvider>) -> Self {
        Self { rules, history }
    }

    /// Validate a commit message, collecting warnings.
    pub fn validate(&self, message: &str) -> ValidationResult {
        let mut result = ValidationResult::new(message.to_string());
        let accepted = validate_headline(
            message,
            |warning| result.warnings.push(warning.to_string()),
            &self.rules,
            self.history.as_ref(),
        );
        result.accepted = accepted;

        tracing::debug!("{}", result.summary());
        result
    }
}
