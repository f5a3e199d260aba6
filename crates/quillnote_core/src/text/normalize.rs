//! Markdown whitespace and line-ending normalization.
//!
//! # Responsibility
//! - Produce the canonical stored form of a project document.
//!
//! # Invariants
//! - Output uses `\n` line endings only, has no trailing spaces/tabs, no run
//!   of more than one blank line, no leading blank lines, and exactly one
//!   trailing newline.
//! - Empty input maps to empty output.
//! - Never panics.

use crate::text::html::clean_html_artifacts;
use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_WS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)[ \t]+$").expect("valid trailing whitespace regex"));
// Tolerates whitespace-only lines between the newlines.
static LOOSE_BLANK_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n\s*\n\s*\n+").expect("valid loose blank run regex"));
static BLANK_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("valid blank run regex"));

/// Normalizes raw user/ingested text into canonical markdown.
///
/// Entry point used before a document is persisted, displayed or merged.
pub fn normalize(text: &str) -> String {
    normalize_markdown(text)
}

/// Cleans HTML artifacts, then canonicalizes whitespace.
///
/// Steps, in order:
/// 1. [`clean_html_artifacts`].
/// 2. `\r\n` and lone `\r` become `\n`.
/// 3. Trailing spaces/tabs are removed from every line.
/// 4. Runs of blank lines collapse to a single blank line.
/// 5. Leading newlines are removed.
/// 6. Trailing whitespace is trimmed and one `\n` appended.
pub fn normalize_markdown(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cleaned = clean_html_artifacts(text);
    let unix = cleaned.replace("\r\n", "\n").replace('\r', "\n");
    let trimmed_lines = TRAILING_WS_RE.replace_all(&unix, "");
    let collapsed = LOOSE_BLANK_RUN_RE.replace_all(&trimmed_lines, "\n\n");
    let collapsed = BLANK_RUN_RE.replace_all(&collapsed, "\n\n");
    let body = collapsed.trim_start_matches('\n').trim_end();

    let mut out = String::with_capacity(body.len() + 1);
    out.push_str(body);
    out.push('\n');
    out
}
