//! HTML contamination cleanup for pasted rich text.
//!
//! # Responsibility
//! - Convert HTML list markup into markdown bullets.
//! - Remove every other tag and decode the common HTML entities.
//!
//! # Invariants
//! - Entities are decoded after all tag removal, so `&lt;b&gt;` survives as
//!   literal text instead of being stripped as a tag.
//! - Entities are replaced one kind at a time, in table order. `&amp;` is
//!   decoded before `&quot; &#39; &nbsp;`, so `&amp;quot;` ends up as `"`
//!   while `&amp;lt;` stays `&lt;`.

use once_cell::sync::Lazy;
use regex::Regex;

static LIST_ITEM_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</li><li>").expect("valid list item boundary regex"));
static LIST_CONTAINER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?(?:ul|ol)>").expect("valid list container regex"));
static LIST_ITEM_OPEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<li\b[^>]*>").expect("valid list item open regex"));
static LIST_ITEM_CLOSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</li>").expect("valid list item close regex"));
static ANY_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

const ENTITIES: [(&str, &str); 6] = [
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&nbsp;", " "),
];

/// Removes HTML artifacts mixed into markdown content.
///
/// Returns an empty string for empty input.
pub fn clean_html_artifacts(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let joined = LIST_ITEM_BOUNDARY_RE.replace_all(text, "\n* ");
    let without_containers = LIST_CONTAINER_RE.replace_all(&joined, "");
    let with_bullets = LIST_ITEM_OPEN_RE.replace_all(&without_containers, "* ");
    let without_closers = LIST_ITEM_CLOSE_RE.replace_all(&with_bullets, "");
    let without_tags = ANY_TAG_RE.replace_all(&without_closers, "");
    decode_entities(&without_tags)
}

/// Decodes `&lt; &gt; &amp; &quot; &#39; &nbsp;`, each kind once, in that order.
pub fn decode_entities(text: &str) -> String {
    ENTITIES
        .iter()
        .fold(text.to_string(), |decoded, &(entity, replacement)| {
            decoded.replace(entity, replacement)
        })
}

#[cfg(test)]
mod tests {
    use super::{clean_html_artifacts, decode_entities};

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean_html_artifacts(""), "");
    }

    #[test]
    fn entity_encoded_tags_become_literal_text() {
        assert_eq!(clean_html_artifacts("&lt;b&gt;bold&lt;/b&gt;"), "<b>bold</b>");
    }

    #[test]
    fn double_encoded_entities_follow_table_order() {
        assert_eq!(decode_entities("&amp;lt; &amp;quot;"), "&lt; \"");
    }

    #[test]
    fn amp_decoding_feeds_later_entities() {
        assert_eq!(
            clean_html_artifacts("&amp;quot; &amp;#39; &amp;nbsp; &amp;lt; &amp;gt;"),
            "\" '   &lt; &gt;"
        );
    }

    #[test]
    fn li_with_attributes_becomes_bullet() {
        assert_eq!(
            clean_html_artifacts(r#"<li class="x">Item</li>"#),
            "* Item"
        );
    }

    #[test]
    fn link_tags_are_stripped_not_bulleted() {
        assert_eq!(clean_html_artifacts(r#"<link rel="x">text"#), "text");
    }
}
