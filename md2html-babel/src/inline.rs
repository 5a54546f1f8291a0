//! Line transformer
//!
//!     Rewrites a single line of source text, with no knowledge of the lines around it. The
//!     substitutions run in a fixed order and each one sees the output of the previous one:
//!
//!     1. Bold: the first `**` becomes the opening tag, the next `**` the closing tag.
//!     2. Italic: the same with `__`.
//!     3. Hash spans: `[[text]]` becomes the lowercase hex MD5 digest of `text`.
//!     4. Removal spans: `((text))` becomes `text` without the configured removal characters.
//!     5. Headings: a run of 1 to 6 leading `#` wraps the line in `<hN>` tags.
//!
//!     Bold and italic only ever convert one pair per line. Any further delimiters are left
//!     in the output as literal text, and a lone delimiter produces an unclosed opening tag.

use crate::rules::ConversionRules;
use md5::{Digest, Md5};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

/// Highest `#` count that still produces a heading
pub const MAX_HEADING_LEVEL: usize = 6;

static HASH_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[(.+?)\]\]").expect("valid regex for hash spans"));

static REMOVAL_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\((.+?)\)\)").expect("valid regex for removal spans"));

/// A line after all inline substitutions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedLine {
    /// The rewritten text, line terminator included when the source had one
    pub text: String,
    /// Number of leading `#` characters, counted after the span substitutions
    pub heading_level: usize,
}

impl TransformedLine {
    /// Whether the line was wrapped in heading tags
    pub fn is_heading(&self) -> bool {
        (1..=MAX_HEADING_LEVEL).contains(&self.heading_level)
    }

    /// Whether the line holds only whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Apply every inline substitution to `line`.
pub fn transform_line(line: &str, rules: &ConversionRules) -> TransformedLine {
    let (bold_open, bold_close) = rules.bold_tags();
    let (italic_open, italic_close) = rules.italic_tags();

    let text = replace_first_pair(line, "**", &bold_open, &bold_close);
    let text = replace_first_pair(&text, "__", &italic_open, &italic_close);
    let text = substitute_hash_spans(&text);
    let text = strip_removal_spans(&text, &rules.removal_chars);

    let heading_level = heading_level(&text);
    let text = if (1..=MAX_HEADING_LEVEL).contains(&heading_level) {
        wrap_heading(&text, heading_level)
    } else {
        text
    };

    trace!(heading_level, output = %text.trim_end(), "transformed line");
    TransformedLine {
        text,
        heading_level,
    }
}

/// Replace the first occurrence of `delimiter` with `open`, then the next one with `close`.
pub fn replace_first_pair(line: &str, delimiter: &str, open: &str, close: &str) -> String {
    line.replacen(delimiter, open, 1)
        .replacen(delimiter, close, 1)
}

/// Replace every `[[...]]` span with the MD5 digest of its content.
pub fn substitute_hash_spans(line: &str) -> String {
    HASH_SPAN
        .replace_all(line, |caps: &Captures| md5_hex(&caps[1]))
        .into_owned()
}

/// Replace every `((...))` span with its content minus the characters in `removal`.
pub fn strip_removal_spans(line: &str, removal: &str) -> String {
    REMOVAL_SPAN
        .replace_all(line, |caps: &Captures| {
            caps[1]
                .chars()
                .filter(|c| !removal.contains(*c))
                .collect::<String>()
        })
        .into_owned()
}

/// Lowercase hex MD5 digest of the UTF-8 bytes of `text`.
pub fn md5_hex(text: &str) -> String {
    hex::encode(Md5::digest(text.as_bytes()))
}

/// Count the leading `#` characters of a line.
pub fn heading_level(line: &str) -> usize {
    line.len() - line.trim_start_matches('#').len()
}

// `#` is stripped from both ends of the whole line before trimming whitespace, so a
// trailing `#` directly before the line terminator survives.
fn wrap_heading(line: &str, level: usize) -> String {
    let inner = line.trim_matches('#').trim();
    format!("<h{level}>{inner}</h{level}>\n")
}
