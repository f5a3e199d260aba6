//! Line-level markdown document model.
//!
//! # Responsibility
//! - Parse a document once into a preamble and an ordered list of level-2
//!   sections.
//! - Apply bullet upserts and summary annotations in memory.
//! - Serialize once at the end.
//!
//! # Invariants
//! - `MarkdownDocument::parse(text).to_markdown() == text` for every input.
//! - Sections keep document order; the first section with a given heading is
//!   the canonical one.
//! - Mutations only insert lines; no existing line is edited, reordered or
//!   removed.

use crate::text::escape::LiteralMatcher;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

const HEADING_PREFIX: &str = "## ";
const BOLD_MARKER: &str = "**";

static NESTED_SUMMARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s+[*-]\s+_Summary_:").expect("valid nested summary regex"));

/// Returns the heading text when `line` is a level-2 heading.
///
/// Level-1 (`# `) and level-3+ (`### `) headings are not section boundaries.
pub fn level_two_heading(line: &str) -> Option<&str> {
    line.strip_prefix(HEADING_PREFIX).map(str::trim)
}

/// Returns whether `line` is a nested `* _Summary_:` sub-bullet.
pub fn is_nested_summary(line: &str) -> bool {
    NESTED_SUMMARY_RE.is_match(line)
}

/// Removes literal `**` bold markers.
pub fn strip_bold(text: &str) -> String {
    text.replace(BOLD_MARKER, "")
}

/// One line inside a preamble or section body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Top-level `* text` or `- text` list item.
    Bullet { marker: char, text: String },
    /// Any other line, kept verbatim (blank lines, nested bullets, prose).
    Prose(String),
}

impl Block {
    /// Classifies one raw line (without its `\n`).
    pub fn from_line(line: &str) -> Self {
        for marker in ['*', '-'] {
            let mut chars = line.chars();
            if chars.next() == Some(marker) && chars.next() == Some(' ') {
                return Self::Bullet {
                    marker,
                    text: line[2..].to_string(),
                };
            }
        }
        Self::Prose(line.to_string())
    }

    /// Builds a `* text` bullet.
    pub fn bullet(text: impl Into<String>) -> Self {
        Self::Bullet {
            marker: '*',
            text: text.into(),
        }
    }

    /// Bullet text, or `None` for prose lines.
    pub fn bullet_text(&self) -> Option<&str> {
        match self {
            Self::Bullet { text, .. } => Some(text.as_str()),
            Self::Prose(_) => None,
        }
    }

    /// Whether this line is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Bullet { .. } => false,
            Self::Prose(raw) => raw.trim().is_empty(),
        }
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullet { marker, text } => write!(f, "{marker} {text}"),
            Self::Prose(raw) => f.write_str(raw),
        }
    }
}

/// Level-2 section: heading line plus body lines up to the next heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    heading_line: String,
    body: Vec<Block>,
}

impl Section {
    /// Creates an empty section titled `name`.
    pub fn new(name: &str) -> Self {
        Self {
            heading_line: format!("{HEADING_PREFIX}{name}"),
            body: Vec::new(),
        }
    }

    /// Heading text without the `## ` prefix.
    pub fn name(&self) -> &str {
        level_two_heading(&self.heading_line).unwrap_or_default()
    }

    /// Raw heading line as written in the document.
    pub fn heading_line(&self) -> &str {
        &self.heading_line
    }

    /// Body lines in document order.
    pub fn body(&self) -> &[Block] {
        &self.body
    }

    /// Top-level bullet texts in document order.
    pub fn bullets(&self) -> impl Iterator<Item = &str> {
        self.body.iter().filter_map(Block::bullet_text)
    }

    fn contains_bullet(&self, matcher: &LiteralMatcher) -> bool {
        self.bullets().any(|text| matcher.is_match(text))
    }

    /// Appends a bullet after the last non-blank body line.
    fn push_bullet(&mut self, text: &str) {
        let at = self
            .body
            .iter()
            .rposition(|block| !block.is_blank())
            .map_or(0, |index| index + 1);
        self.body.insert(at, Block::bullet(text));
    }
}

/// Result of [`MarkdownDocument::annotate_summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotateOutcome {
    /// The summary line was inserted under the bullet.
    Attached,
    /// A nested summary already follows the bullet.
    AlreadyPresent,
    /// The section does not exist.
    SectionMissing,
    /// No bullet in the section matches the marker text.
    BulletNotFound,
}

/// Parsed markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownDocument {
    preamble: Vec<Block>,
    sections: Vec<Section>,
    trailing_newline: bool,
}

impl MarkdownDocument {
    /// Parses `text` in one pass.
    pub fn parse(text: &str) -> Self {
        let mut document = Self {
            preamble: Vec::new(),
            sections: Vec::new(),
            trailing_newline: text.ends_with('\n'),
        };
        if text.is_empty() {
            return document;
        }

        let body = text.strip_suffix('\n').unwrap_or(text);
        for line in body.split('\n') {
            if level_two_heading(line).is_some() {
                document.sections.push(Section {
                    heading_line: line.to_string(),
                    body: Vec::new(),
                });
                continue;
            }
            let block = Block::from_line(line);
            match document.sections.last_mut() {
                Some(section) => section.body.push(block),
                None => document.preamble.push(block),
            }
        }
        document
    }

    /// Lines before the first level-2 heading.
    pub fn preamble(&self) -> &[Block] {
        &self.preamble
    }

    /// Sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Level-2 heading texts in document order (duplicates included).
    pub fn headings(&self) -> Vec<&str> {
        self.sections.iter().map(Section::name).collect()
    }

    /// First section whose heading equals `name`.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name() == name.trim())
    }

    fn section_index(&self, name: &str) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| section.name() == name.trim())
    }

    /// Adds every item not yet present as a bullet in section `heading`.
    ///
    /// Items are whitespace-collapsed; blank items are skipped. Returns the
    /// items that were added, in input order. The section is appended at the
    /// end of the document when missing and at least one item is added.
    pub fn upsert_bullets<S: AsRef<str>>(&mut self, heading: &str, items: &[S]) -> Vec<String> {
        let mut added = Vec::new();
        let candidates: Vec<String> = items
            .iter()
            .map(|item| collapse_whitespace(item.as_ref()))
            .filter(|item| !item.is_empty())
            .collect();
        if candidates.is_empty() {
            return added;
        }

        let index = match self.section_index(heading) {
            Some(index) => index,
            None => {
                self.append_section(heading);
                self.sections.len() - 1
            }
        };

        let section = &mut self.sections[index];
        for item in candidates {
            if section.contains_bullet(&LiteralMatcher::case_insensitive(&item)) {
                continue;
            }
            section.push_bullet(&item);
            added.push(item);
        }

        if !added.is_empty() {
            self.trailing_newline = true;
        }
        added
    }

    /// Inserts `summary_line` directly below the first bullet of `heading`
    /// that contains `marker` (bold markers ignored, case-insensitive).
    pub fn annotate_summary(
        &mut self,
        heading: &str,
        marker: &str,
        summary_line: &str,
    ) -> AnnotateOutcome {
        let Some(index) = self.section_index(heading) else {
            return AnnotateOutcome::SectionMissing;
        };

        let matcher = LiteralMatcher::case_insensitive(&strip_bold(marker));
        let section = &mut self.sections[index];
        let Some(position) = section.body.iter().position(|block| {
            block
                .bullet_text()
                .is_some_and(|text| matcher.is_match(&strip_bold(text)))
        }) else {
            return AnnotateOutcome::BulletNotFound;
        };

        let already_present = section
            .body
            .get(position + 1)
            .is_some_and(|next| is_nested_summary(&next.to_string()));
        if already_present {
            return AnnotateOutcome::AlreadyPresent;
        }

        let summary_line = summary_line.replace(['\r', '\n'], " ");
        section
            .body
            .insert(position + 1, Block::from_line(&summary_line));
        self.trailing_newline = true;
        AnnotateOutcome::Attached
    }

    /// Serializes the document back to markdown text.
    pub fn to_markdown(&self) -> String {
        let mut lines: Vec<String> = self.preamble.iter().map(Block::to_string).collect();
        for section in &self.sections {
            lines.push(section.heading_line.clone());
            lines.extend(section.body.iter().map(Block::to_string));
        }

        let mut out = lines.join("\n");
        if self.trailing_newline && !lines.is_empty() {
            out.push('\n');
        }
        out
    }

    fn append_section(&mut self, heading: &str) {
        let last_line = self
            .sections
            .last()
            .map(|section| section.body.last())
            .unwrap_or_else(|| self.preamble.last());
        let needs_separator = match (self.sections.last(), last_line) {
            (_, Some(block)) => !block.is_blank(),
            (Some(_), None) => true,
            (None, None) => false,
        };

        if needs_separator {
            let separator = Block::Prose(String::new());
            match self.sections.last_mut() {
                Some(section) => section.body.push(separator),
                None => self.preamble.push(separator),
            }
        }
        self.sections.push(Section::new(heading.trim()));
        self.trailing_newline = true;
    }
}

impl Display for MarkdownDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_markdown())
    }
}

/// Collapses internal whitespace runs (including newlines) to single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
