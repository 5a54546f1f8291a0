//! Whole-document conversion tests
//!
//! These run complete sources through the public entry points and check the concatenated
//! HTML, including the block wrappers that depend on neighbouring lines.

use insta::assert_snapshot;
use md2html_babel::transforms::{convert_lines, markdown_to_html};
use md2html_babel::ConversionRules;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

#[test]
fn test_kitchensink_matches_reference() {
    let md = fixture("kitchensink.md");
    let expected = fixture("kitchensink.html");
    assert_eq!(markdown_to_html(&md), expected);
}

#[test]
fn test_heading_levels() {
    assert_eq!(markdown_to_html("### Title"), "<h3>Title</h3>\n");
    assert_eq!(markdown_to_html("###### Six\n"), "<h6>Six</h6>\n");
}

#[test]
fn test_no_heading_without_hashes_or_with_too_many() {
    assert_eq!(markdown_to_html("Title\n"), "<p>\nTitle\n</p>\n");
    assert_eq!(markdown_to_html("####### Title\n"), "####### Title\n");
}

#[test]
fn test_unordered_list_snapshot() {
    let html = markdown_to_html("- one\n- two\n- three\n");
    assert_snapshot!(html, @r"
<ul>
<li>one</li>
<li>two</li>
<li>three</li>
</ul>
");
}

#[test]
fn test_interrupted_list_is_split() {
    let html = markdown_to_html("- one\ninterlude\n- two\n");
    assert_snapshot!(html, @r"
<ul>
<li>one</li>
</ul>
<p>
interlude
<ul>
<li>two</li>
</ul>
</p>
");
}

#[test]
fn test_paragraph_grouping_snapshot() {
    let html = markdown_to_html("first line\nsecond line\n\nnext paragraph\n");
    assert_snapshot!(html, @r"
<p>
first line
<br/>
second line
</p>
<p>
next paragraph
</p>
");
}

#[test]
fn test_paragraph_closes_only_at_end() {
    let html = markdown_to_html("a\nb\n");
    assert_eq!(html, "<p>\na\n<br/>\nb\n</p>\n");
}

#[test]
fn test_end_of_input_flush_order() {
    let html = markdown_to_html("text\n* item\n");
    assert_eq!(html, "<p>\ntext\n<ol>\n<li>item</li>\n</ol>\n</p>\n");
}

#[test]
fn test_bold_quirk_single_pair_per_line() {
    let html = markdown_to_html("**a** **b** **c**\n");
    assert_eq!(html, "<p>\n<b>a</b> **b** **c**\n</p>\n");
}

#[test]
fn test_bold_line_is_not_an_ordered_item() {
    let html = markdown_to_html("**bold** start\n");
    assert_eq!(html, "<p>\n<b>bold</b> start\n</p>\n");
}

#[test]
fn test_hash_and_removal_in_list_items() {
    let html = markdown_to_html("- [[hello]]\n- ((Cat))\n");
    assert_eq!(
        html,
        "<ul>\n<li>5d41402abc4b2a76b9719d911017c592</li>\n<li>at</li>\n</ul>\n"
    );
}

#[test]
fn test_removal_span_can_blank_a_line() {
    assert_eq!(markdown_to_html("((Cc))\n"), "");
}

#[test]
fn test_crlf_lines_become_plain_newlines() {
    assert_eq!(
        markdown_to_html("line\r\nnext\r\n"),
        "<p>\nline\n<br/>\nnext\n</p>\n"
    );
    assert_eq!(
        markdown_to_html("# T\r\n- a\r\n"),
        "<h1>T</h1>\n<ul>\n<li>a</li>\n</ul>\n"
    );
}

#[test]
fn test_lone_carriage_return_ends_a_line() {
    assert_eq!(
        markdown_to_html("text\r\r# T\n"),
        "<p>\ntext\n</p>\n<h1>T</h1>\n"
    );
}

#[test]
fn test_convert_lines_with_custom_rules() {
    let rules = ConversionRules {
        bold_tag: "strong".to_string(),
        italic_tag: "i".to_string(),
        removal_chars: "xX".to_string(),
        line_break: "<br />".to_string(),
    };
    let html = convert_lines(["**b** __i__\n", "((Xerox))\n"], &rules).unwrap();
    assert_eq!(
        html,
        "<p>\n<strong>b</strong> <i>i</i>\n<br />\nero\n</p>\n"
    );
}
