// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Headline structure and parsing.

use crate::error::HeadlineError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Grammar for `type(area[,...])[!]: {tag} message`.
    ///
    /// The tag may be wrapped in braces or square brackets.
    static ref HEADLINE_REGEX: Regex = Regex::new(concat!(
        r"^(?P<type>[\w-]+)",
        r"(?:\((?P<area>[\w-]+(?:,[\w-]+)*)\))?",
        r"(?:!: (?:\{(?P<brace_tag>[\w-]+)\}|\[(?P<square_tag>[\w-]+)\])|: )",
        r"(?P<message>.+)$",
    ))
    .unwrap();
}

/// Whether `c` ends a line.
///
/// Besides `\n` and `\r` this covers the vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Text up to the first line break.
fn first_line(message: &str) -> &str {
    message.split(is_line_break).next().unwrap_or(message)
}

/// The fields of a matched headline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    /// Headline type (feat, fix, etc.).
    pub commit_type: String,
    /// Raw comma-separated area group, without parentheses.
    pub areas: Option<String>,
    /// Tag, only present with the breaking-change form.
    pub tag: Option<String>,
    /// Message text, trimmed.
    pub message: String,
}

impl Headline {
    /// Parse the first line of a commit message.
    ///
    /// Only the headline is matched; anything after the first line break is
    /// ignored.
    pub fn parse(message: &str) -> Result<Self, HeadlineError> {
        if message.is_empty() {
            return Err(HeadlineError::Empty {
                message: message.trim().to_string(),
            });
        }

        let line = first_line(message);

        let captures =
            HEADLINE_REGEX
                .captures(line)
                .ok_or_else(|| HeadlineError::Malformed {
                    message: message.trim().to_string(),
                })?;

        let commit_type = captures
            .name("type")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let areas = captures.name("area").map(|m| m.as_str().to_string());
        let tag = captures
            .name("brace_tag")
            .or_else(|| captures.name("square_tag"))
            .map(|m| m.as_str().to_string());
        let message = captures
            .name("message")
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        Ok(Self {
            commit_type,
            areas,
            tag,
            message,
        })
    }

    /// Areas in the order they were written.
    pub fn area_list(&self) -> Vec<&str> {
        self.areas
            .as_deref()
            .map(|raw| raw.split(',').collect())
            .unwrap_or_default()
    }

    /// Length of the message text in characters.
    pub fn message_len(&self) -> usize {
        self.message.chars().count()
    }
}
