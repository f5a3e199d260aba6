use proptest::prelude::*;
use quillnote_core::{normalize, smart_insert, MarkdownDocument, SyncPayload};

const LINE_POOL: &[&str] = &[
    "# Title",
    "",
    "   ",
    "## Characters",
    "## Main characters",
    "## Setting",
    "## Places",
    "## Full Outline",
    "## Ideas-Notes",
    "### Deep heading",
    "* Alice",
    "- bob the builder",
    "  * _Summary_: earlier",
    "* **Ch1** – A quest begins.",
    "Some prose about Forest.",
    "* O'Brien (the elder)",
    "```",
];

const NAME_POOL: &[&str] = &[
    "Alice", "Bob", "Ann", "Forest", "O'Brien (the elder)", "A.J.", "  spaced   name ", "",
    "Ch1", "[x]",
];

const TITLE_POOL: &[&str] = &["", "Ch1", "Ch 2", "**Bold**"];
const SUMMARY_POOL: &[&str] = &["", "A quest begins.", "Later  on\nthings."];

fn document_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop::sample::select(LINE_POOL), 0..14),
        any::<bool>(),
    )
        .prop_map(|(lines, trailing_newline)| {
            let mut text = lines.join("\n");
            if trailing_newline && !text.is_empty() {
                text.push('\n');
            }
            text
        })
}

fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(NAME_POOL).prop_map(str::to_string),
        0..4,
    )
}

fn payload_strategy() -> impl Strategy<Value = SyncPayload> {
    (
        prop::sample::select(TITLE_POOL),
        prop::sample::select(SUMMARY_POOL),
        names_strategy(),
        names_strategy(),
    )
        .prop_map(|(title, summary, characters, locations)| {
            SyncPayload::new(title, summary)
                .with_characters(characters)
                .with_locations(locations)
        })
}

proptest! {
    #[test]
    fn prop_smart_insert_is_idempotent(
        document in document_strategy(),
        payload in payload_strategy(),
    ) {
        let once = smart_insert(&document, &payload);
        let twice = smart_insert(&once, &payload);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_smart_insert_keeps_every_input_line_in_order(
        document in document_strategy(),
        payload in payload_strategy(),
    ) {
        let result = smart_insert(&document, &payload);
        let mut remaining = result.split('\n');
        for line in document.split('\n') {
            prop_assert!(
                remaining.any(|candidate| candidate == line),
                "line {:?} missing or out of order in {:?}", line, result
            );
        }
    }

    #[test]
    fn prop_parse_serialize_round_trips(document in document_strategy()) {
        prop_assert_eq!(MarkdownDocument::parse(&document).to_markdown(), document);
    }

    #[test]
    fn prop_normalize_is_idempotent(text in "[a-z#*\\- \t\r\n>_]{0,60}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalized_html_lists_are_stable(
        items in prop::collection::vec("[a-zA-Z ]{1,12}", 1..5),
        padding in "[\n ]{0,6}",
    ) {
        let html = format!(
            "<ul>{}</ul>{padding}",
            items.iter().map(|item| format!("<li>{item}</li>")).collect::<String>()
        );
        let once = normalize(&html);
        prop_assert!(!once.contains('<'));
        prop_assert_eq!(normalize(&once), once);
    }
}
