// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the rule set loaded from the `[tool.conventional-msg]` table.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::path::Path;

use super::default::{DEFAULT_AREALESS, DEFAULT_AREAS, DEFAULT_TAGS, DEFAULT_TYPES};
use crate::error::{ConfigError, MsgError, Result};

/// Rules a commit headline is validated against.
///
/// Unknown keys are rejected when loading, so a typo in the configuration
/// fails loudly instead of silently falling back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageRules {
    /// Minimum length of the trimmed message text.
    pub min_len: usize,

    /// Areas accepted inside the parentheses.
    pub areas: AreaPolicy,

    /// Accepted headline types.
    pub types: BTreeSet<String>,

    /// Tags accepted with the breaking-change form.
    pub tags: BTreeSet<String>,

    /// Integration branch revisions are measured against.
    pub branch: String,

    /// Type whose area slot holds a commit reference.
    pub revise_name: String,

    /// Types that may omit the area group.
    pub allow_omit_area: BTreeSet<String>,
}

impl Default for MessageRules {
    fn default() -> Self {
        Self {
            min_len: 8,
            areas: AreaPolicy::Restricted(to_set(DEFAULT_AREAS)),
            types: to_set(DEFAULT_TYPES),
            tags: to_set(DEFAULT_TAGS),
            branch: "master".to_string(),
            revise_name: "revise".to_string(),
            allow_omit_area: to_set(DEFAULT_AREALESS),
        }
    }
}

impl MessageRules {
    /// Load rules for the repository rooted at `repo_root`.
    pub fn load(repo_root: &Path) -> Result<Self> {
        super::loader::load_rules(repo_root)
    }

    /// Load rules from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        super::loader::load_rules_from(path)
    }

    /// The configured area set, or `None` when any area is accepted.
    pub fn allowed_areas(&self) -> Option<&BTreeSet<String>> {
        match &self.areas {
            AreaPolicy::Restricted(areas) => Some(areas),
            AreaPolicy::Unrestricted(_) => None,
        }
    }

    /// Whether `commit_type` may be written without an area.
    pub fn allows_omitted_area(&self, commit_type: &str) -> bool {
        self.allow_omit_area.contains(commit_type)
    }

    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.types.is_empty() {
            return Err(invalid("types", "at least one type is required"));
        }
        if self.types.iter().any(|t| t.is_empty()) {
            return Err(invalid("types", "types must be non-empty strings"));
        }
        if let AreaPolicy::Restricted(areas) = &self.areas {
            if areas.iter().any(|a| a.is_empty()) {
                return Err(invalid("areas", "areas must be non-empty strings"));
            }
        }
        if self.branch.is_empty() {
            return Err(invalid("branch", "branch name must not be empty"));
        }
        if !self.types.contains(&self.revise_name) {
            tracing::debug!(
                "revise_name '{}' is not among the configured types; revision checks never run",
                self.revise_name
            );
        }
        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> MsgError {
    MsgError::Config(ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    })
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Policy for the area group.
///
/// On disk this is either a list of area names or the string `"*"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AreaPolicy {
    /// Only the listed areas are accepted.
    Restricted(BTreeSet<String>),
    /// Any area is accepted.
    Unrestricted(AnyArea),
}

/// The `"*"` marker for unrestricted areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnyArea;

impl Serialize for AnyArea {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str("*")
    }
}

impl<'de> Deserialize<'de> for AnyArea {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == "*" {
            Ok(AnyArea)
        } else {
            Err(de::Error::invalid_value(
                de::Unexpected::Str(&raw),
                &"a list of areas or \"*\"",
            ))
        }
    }
}

/// Render a set the way warnings and usage text list allowed values.
pub fn describe_set(set: &BTreeSet<String>) -> String {
    set.iter().cloned().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = MessageRules::default();
        assert_eq!(rules.min_len, 8);
        assert_eq!(rules.branch, "master");
        assert_eq!(rules.revise_name, "revise");
        assert!(rules.types.contains("revise"));
        let areas = rules.allowed_areas().unwrap();
        assert!(areas.contains("core"));
        assert!(!areas.contains("web"));
        assert!(rules.allows_omitted_area("docs"));
        assert!(!rules.allows_omitted_area("feat"));
    }

    #[test]
    fn test_unrestricted_areas() {
        let rules: MessageRules = toml::from_str(r#"areas = "*""#).unwrap();
        assert_eq!(rules.areas, AreaPolicy::Unrestricted(AnyArea));
        assert!(rules.allowed_areas().is_none());
    }

    #[test]
    fn test_area_string_other_than_wildcard_rejected() {
        let result: std::result::Result<MessageRules, _> = toml::from_str(r#"areas = "core""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_empty_types() {
        let rules = MessageRules {
            types: BTreeSet::new(),
            ..MessageRules::default()
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_area_name() {
        let rules = MessageRules {
            areas: AreaPolicy::Restricted(to_set(&["core", ""])),
            ..MessageRules::default()
        };
        let err = rules.validate().unwrap_err();
        assert!(err.to_string().contains("areas"));
    }

    #[test]
    fn test_describe_set_is_sorted() {
        assert_eq!(describe_set(&to_set(&["fix", "feat", "chore"])), "chore, feat, fix");
    }

    #[test]
    fn test_rules_serialization() {
        let toml_str = toml::to_string(&MessageRules::default()).unwrap();
        assert!(toml_str.contains("min_len"));
        assert!(toml_str.contains("allow_omit_area"));
    }
}
