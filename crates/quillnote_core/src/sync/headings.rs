//! Category heading resolution.

use crate::config::HeadingRule;

/// Returns the first heading whose lowercased text contains any keyword.
///
/// Blank keywords are ignored.
pub fn resolve_heading<'a, H, K>(headings: &'a [H], keywords: &[K]) -> Option<&'a str>
where
    H: AsRef<str>,
    K: AsRef<str>,
{
    let lowered: Vec<String> = keywords
        .iter()
        .map(|keyword| keyword.as_ref().trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .collect();

    headings.iter().map(|heading| heading.as_ref()).find(|heading| {
        let heading = heading.to_lowercase();
        lowered.iter().any(|keyword| heading.contains(keyword.as_str()))
    })
}

/// Resolves `rule` against `headings`, falling back to its default heading.
pub fn resolve_or_default<H: AsRef<str>>(headings: &[H], rule: &HeadingRule) -> String {
    resolve_heading(headings, &rule.keywords)
        .unwrap_or(rule.default_heading.trim())
        .to_string()
}
