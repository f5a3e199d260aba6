//! Literal escaping for generated regular expressions.
//!
//! # Invariants
//! - Every user-controlled string must pass through [`escape_pattern`] before
//!   it becomes part of a pattern.
//! - A pattern built from escaped text matches that text literally.

use regex::{Regex, RegexBuilder};

/// Escapes `text` so it can be interpolated into a regex pattern.
///
/// Covers `. * + ? ^ $ { } ( ) | [ ] \` and every other character the regex
/// syntax treats as meta.
pub fn escape_pattern(text: &str) -> String {
    regex::escape(text)
}

/// Case-insensitive literal substring matcher.
///
/// Built from an escaped pattern. Falls back to lowercase containment when the
/// compiled pattern would exceed regex size limits (very long inputs).
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    regex: Option<Regex>,
    lowered: String,
}

impl LiteralMatcher {
    /// Builds a matcher for `needle`.
    pub fn case_insensitive(needle: &str) -> Self {
        let regex = RegexBuilder::new(&escape_pattern(needle))
            .case_insensitive(true)
            .build()
            .ok();
        Self {
            regex,
            lowered: needle.to_lowercase(),
        }
    }

    /// Returns whether `haystack` contains the needle.
    pub fn is_match(&self, haystack: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(haystack),
            None => haystack.to_lowercase().contains(self.lowered.as_str()),
        }
    }
}
