//! Property tests for the conversion invariants

use md2html_babel::inline::{md5_hex, transform_line};
use md2html_babel::transforms::markdown_to_html;
use md2html_babel::ConversionRules;
use proptest::prelude::*;

proptest! {
    #[test]
    fn unordered_run_has_one_wrapper(items in prop::collection::vec("[a-z][a-z ]{0,12}", 1..20)) {
        let source: String = items.iter().map(|item| format!("- {item}\n")).collect();
        let html = markdown_to_html(&source);

        prop_assert!(html.starts_with("<ul>\n"));
        prop_assert!(html.ends_with("</ul>\n"));
        prop_assert_eq!(html.matches("<ul>").count(), 1);
        prop_assert_eq!(html.matches("</ul>").count(), 1);
        prop_assert_eq!(html.matches("<li>").count(), items.len());
    }

    #[test]
    fn ordered_run_has_one_wrapper(items in prop::collection::vec("[a-z][a-z ]{0,12}", 1..20)) {
        let source: String = items.iter().map(|item| format!("* {item}\n")).collect();
        let html = markdown_to_html(&source);

        prop_assert_eq!(html.matches("<ol>").count(), 1);
        prop_assert_eq!(html.matches("</ol>").count(), 1);
        prop_assert_eq!(html.matches("<li>").count(), items.len());
    }

    #[test]
    fn paragraph_lines_share_one_paragraph(lines in prop::collection::vec("[a-z][a-z ]{0,15}", 1..20)) {
        let source: String = lines.iter().map(|line| format!("{line}\n")).collect();
        let html = markdown_to_html(&source);

        prop_assert!(html.starts_with("<p>\n"));
        prop_assert!(html.ends_with("</p>\n"));
        prop_assert_eq!(html.matches("<br/>").count(), lines.len() - 1);
    }

    #[test]
    fn hash_span_becomes_md5_digest(inner in "[a-zA-Z0-9 ]{1,20}") {
        let line = transform_line(&format!("[[{inner}]]"), &ConversionRules::default());

        prop_assert_eq!(line.text.len(), 32);
        prop_assert!(line.text.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        prop_assert_eq!(line.text, md5_hex(&inner));
    }

    #[test]
    fn removal_span_only_drops_c(inner in "[a-zA-Z ]{1,20}") {
        let line = transform_line(&format!("(({inner}))"), &ConversionRules::default());
        let expected: String = inner.chars().filter(|c| *c != 'c' && *c != 'C').collect();

        prop_assert_eq!(line.text, expected);
    }
}
