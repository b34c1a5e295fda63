// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in headline checks.
//!
//! Each check returns the warning to report, or `None` when it passes. The
//! engine applies them in a fixed order and stops at the first failure.

use crate::config::{describe_set, MessageRules};
use crate::headline::Headline;

/// Check that the type is configured.
pub fn check_type(headline: &Headline, rules: &MessageRules) -> Option<String> {
    if rules.types.contains(&headline.commit_type) {
        None
    } else {
        Some(format!(
            "'{}' is not a valid type: {}",
            headline.commit_type,
            describe_set(&rules.types)
        ))
    }
}

/// Advisory: the type needs an area but none was given.
///
/// This never rejects the headline on its own.
pub fn check_area_required(headline: &Headline, rules: &MessageRules) -> Option<String> {
    if headline.areas.is_none() && !rules.allows_omitted_area(&headline.commit_type) {
        Some(format!(
            "area is required for '{}' type",
            headline.commit_type
        ))
    } else {
        None
    }
}

/// Check every area is configured and the list is sorted.
pub fn check_areas(headline: &Headline, rules: &MessageRules) -> Option<String> {
    let areas = headline.area_list();

    if let Some(allowed) = rules.allowed_areas() {
        if let Some(area) = areas.iter().find(|area| !allowed.contains(**area)) {
            return Some(format!(
                "'{}' is not a valid area: {}",
                area,
                describe_set(allowed)
            ));
        }
    }

    let mut sorted = areas.clone();
    sorted.sort_unstable();
    if areas != sorted {
        return Some("areas must be alphabetically sorted".to_string());
    }

    None
}

/// Check the tag, if any, is configured.
pub fn check_tag(headline: &Headline, rules: &MessageRules) -> Option<String> {
    match &headline.tag {
        Some(tag) if !rules.tags.contains(tag) => Some(format!(
            "'{}' is not a valid tag: {}",
            tag,
            describe_set(&rules.tags)
        )),
        _ => None,
    }
}

/// Check the message text is long enough.
pub fn check_message_length(headline: &Headline, rules: &MessageRules) -> Option<String> {
    if headline.message_len() < rules.min_len {
        Some(format!(
            "message must be at least {} characters",
            rules.min_len
        ))
    } else {
        None
    }
}
