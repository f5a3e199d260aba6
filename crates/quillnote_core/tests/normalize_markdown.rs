use quillnote_core::normalize;

#[test]
fn collapses_excess_blank_lines_and_adds_trailing_newline() {
    assert_eq!(normalize("a\n\n\n\n\nb"), "a\n\nb\n");
    assert_eq!(
        normalize("Line1\n\n\n\nLine2\n\n\n\n\nLine3"),
        "Line1\n\nLine2\n\nLine3\n"
    );
}

#[test]
fn removes_trailing_whitespace_but_keeps_indentation() {
    assert_eq!(
        normalize("Line1   \nLine2\t\t\n   Line3   "),
        "Line1\nLine2\n   Line3\n"
    );
}

#[test]
fn header_spacing_is_collapsed() {
    assert_eq!(
        normalize("# Header 1\n\n\n\n## Header 2\n### Header 3\n\nContent"),
        "# Header 1\n\n## Header 2\n### Header 3\n\nContent\n"
    );
}

#[test]
fn empty_input_returns_empty_string() {
    assert_eq!(normalize(""), "");
}

#[test]
fn single_newlines_are_preserved() {
    assert_eq!(normalize("Line1\nLine2\nLine3"), "Line1\nLine2\nLine3\n");
}

#[test]
fn bullet_list_spacing_is_collapsed() {
    assert_eq!(
        normalize("* Item 1\n\n\n* Item 2\n* Item 3\n\n\n\n\n* Item 4"),
        "* Item 1\n\n* Item 2\n* Item 3\n\n* Item 4\n"
    );
}

#[test]
fn leading_blank_lines_are_removed() {
    assert_eq!(normalize("\n\n\n# Title\n"), "# Title\n");
}

#[test]
fn mixed_project_document_is_canonical() {
    let dirty = "# Project Title   \n\n\n## Ideas-Notes   \n\n* Idea 1   \n* Idea 2   \n\n\n## Characters   \n\n**John Doe**   \n- Age: 30   \n- Role: Protagonist   \n\n\n\n## Setting   \n\nThe story takes place...   \n\n";
    let result = normalize(dirty);

    assert!(!result.contains("   \n"));
    assert!(!result.contains("\n\n\n"));
    assert!(result.ends_with('\n') && !result.ends_with("\n\n"));
    assert!(!result.starts_with('\n'));
    assert_eq!(normalize(&result), result);
}

#[test]
fn code_blocks_survive() {
    let source = "## Code Example\n\n```python\ndef hello():\n    print(\"Hello\")\n```\n\nMore text";
    let result = normalize(source);
    assert!(result.contains("```python\ndef hello():\n    print(\"Hello\")\n```"));
}

#[test]
fn pasted_plain_text_never_keeps_more_than_one_blank_line() {
    let dirty = "Ideas-Notes\n\n\n\n\n\nI have an idea.\n\n\n\n\n\nMusic is a recurring theme throughout the story.\n\n\n\nSetting\n\n\n\n\n\nLodge\n\n\n\n\n\nGuild of Tarego — Operates out of the Lodge";
    let result = normalize(dirty);
    assert!(!result.contains("\n\n\n"), "got {result:?}");
    assert!(result.starts_with("Ideas-Notes\n\nI have an idea.\n\n"));
}
