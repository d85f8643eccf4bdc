//! Parser tests over whole documents.
//!
//! Each case checks the span invariants and then compares a one-line-per-block
//! outline against an inline snapshot.

use crate::parsing::{parse_document, snapshot};

fn outline(src: &str) -> String {
    let doc = parse_document(src);
    snapshot::invariants(src, &doc.blocks);
    snapshot::outline(src, &doc)
}

#[test]
fn header_then_paragraph() {
    insta::assert_snapshot!(outline("### Title\n\nBody text"), @r#"
Header(4): "Title"
Paragraph: "Body text"
"#);
}

#[test]
fn numbered_list() {
    insta::assert_snapshot!(outline("1. First\n2. Second"), @r#"
List(Numbered): "First" | "Second"
"#);
}

#[test]
fn list_then_paragraph() {
    insta::assert_snapshot!(outline("- a\n- b\n\nPlain text"), @r#"
List(Bulleted): "a" | "b"
Paragraph: "Plain text"
"#);
}

#[test]
fn fertilizer_style_recommendation() {
    let src = "\
# Fertilizer Plan
---
## Nitrogen
Apply **urea** in *two* splits.
Water after application.

* 50 kg/ha at sowing
* 50 kg/ha at tillering
Monitor leaf colour.";
    insta::assert_snapshot!(outline(src), @r#"
Header(2): "Fertilizer Plan"
Rule
Header(3): "Nitrogen"
Paragraph: "Apply " Strong("urea") " in " Em("two") " splits." | "Water after application."
List(Bulleted): "50 kg/ha at sowing" | "50 kg/ha at tillering"
Paragraph: "Monitor leaf colour."
"#);
}

#[test]
fn emphasis_in_headers_and_items() {
    insta::assert_snapshot!(outline("## **Stage** one\n- *mild* case"), @r#"
Header(3): Strong("Stage") " one"
List(Bulleted): Em("mild") " case"
"#);
}

#[test]
fn html_sensitive_text_is_kept_as_text() {
    insta::assert_snapshot!(outline("Use <b>copper</b> & \"lime\""), @r#"
Paragraph: "Use <b>copper</b> & \"lime\""
"#);
}

#[test]
fn normalize_reports_spans() {
    let src = "# Hi\n- **x**";
    let doc = parse_document(src);
    let snap = snapshot::normalize(src, &doc);
    assert_eq!(snap.blocks.len(), 2);
    assert_eq!(snap.blocks[0].kind, "Header(2)");
    assert_eq!(snap.blocks[0].span, (0, 5));
    assert_eq!(snap.blocks[1].kind, "List(Bulleted)");
    let item = &snap.blocks[1].lines[0][0];
    assert_eq!(item.kind, "Strong");
    assert_eq!(item.span, (7, 12));
    assert_eq!(item.text, "**x**");
    assert_eq!(item.children[0].text, "x");
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    assert!(parse_document("").is_empty());
}

/// Test blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    assert!(parse_document("\n  \n\r\n").is_empty());
}

/// Test unclosed constructs become plain text.
#[test]
fn unclosed_constructs_become_text() {
    insta::assert_snapshot!(outline("**open and *also open"), @r#"
Paragraph: "**open and *also open"
"#);
}
