//! Section span lookup over raw document text.

use crate::model::document::level_two_heading;

/// Span of one level-2 section as it appears in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedSection {
    /// Whether the heading exists in the document.
    pub exists: bool,
    /// Exact section text from its heading line up to the next level-2
    /// heading (or end of document). When `exists` is `false`, a synthesized
    /// `## <heading>` header.
    pub text: String,
}

/// Locates the first section titled `heading_name`.
///
/// Duplicate headings are not distinguished: only the first occurrence is
/// returned.
pub fn locate_section(document: &str, heading_name: &str) -> LocatedSection {
    let wanted = heading_name.trim();
    let mut start = None;
    let mut offset = 0;

    for line in document.split_inclusive('\n') {
        let heading = level_two_heading(line.trim_end_matches(['\n', '\r']));
        match (start, heading) {
            (None, Some(name)) if name == wanted => start = Some(offset),
            (Some(begin), Some(_)) => {
                return LocatedSection {
                    exists: true,
                    text: document[begin..offset].to_string(),
                };
            }
            _ => {}
        }
        offset += line.len();
    }

    match start {
        Some(begin) => LocatedSection {
            exists: true,
            text: document[begin..].to_string(),
        },
        None => LocatedSection {
            exists: false,
            text: format!("## {wanted}"),
        },
    }
}
