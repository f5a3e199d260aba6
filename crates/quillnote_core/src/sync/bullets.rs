//! String-level bullet upsert and summary annotation.
//!
//! Each call parses the document once, applies one mutation to the
//! [`MarkdownDocument`] model and serializes once. Multi-step merges should
//! work on the model directly (see [`smart_insert`](super::smart_insert)).

use crate::model::document::{AnnotateOutcome, MarkdownDocument};

/// Appends a `* <item>` bullet for every item not yet present in the section.
///
/// Presence is a case-insensitive substring match against the section's
/// top-level bullets. Creates the section at the end of the document when
/// missing. Returns `document` unchanged for an empty item list.
pub fn upsert_bullets<S: AsRef<str>>(document: &str, heading_name: &str, items: &[S]) -> String {
    let mut parsed = MarkdownDocument::parse(document);
    if parsed.upsert_bullets(heading_name, items).is_empty() {
        return document.to_string();
    }
    parsed.to_markdown()
}

/// Inserts `summary_bullet_text` directly under the outline bullet matching
/// `bullet_marker_text`, unless a nested summary already follows it.
///
/// Returns `document` unchanged when the section or the bullet is missing.
pub fn annotate_summary(
    document: &str,
    heading_name: &str,
    bullet_marker_text: &str,
    summary_bullet_text: &str,
) -> String {
    let mut parsed = MarkdownDocument::parse(document);
    let outcome = parsed.annotate_summary(heading_name, bullet_marker_text, summary_bullet_text);
    log::debug!(
        "event=annotate_summary module=sync status={:?} heading={}",
        outcome,
        heading_name
    );
    if outcome != AnnotateOutcome::Attached {
        return document.to_string();
    }
    parsed.to_markdown()
}
