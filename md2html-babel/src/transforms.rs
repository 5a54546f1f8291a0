//! Functional entry points
//!
//! Each function runs the line transformer and the block assembler over a whole document
//! and returns the concatenated HTML. A fresh [`BlockAssembler`] is used for every call.

use crate::block::BlockAssembler;
use crate::error::ConvertError;
use crate::inline::transform_line;
use crate::rules::ConversionRules;
use std::borrow::Cow;
use tracing::debug;

/// Convert Markdown source with the default rules
pub fn markdown_to_html(source: &str) -> String {
    let source = normalize_line_endings(source);
    render_lines(source_lines(&source), &ConversionRules::default())
}

/// Convert Markdown source with custom rules
pub fn markdown_to_html_with_rules(
    source: &str,
    rules: &ConversionRules,
) -> Result<String, ConvertError> {
    let source = normalize_line_endings(source);
    convert_lines(source_lines(&source), rules)
}

/// Convert an ordered sequence of lines
///
/// Lines may keep their terminators; headings and list items always end with `\n`, other
/// lines are emitted exactly as given. Unlike the source-text entry points, no line ending
/// normalization happens here.
pub fn convert_lines<'a, I>(lines: I, rules: &ConversionRules) -> Result<String, ConvertError>
where
    I: IntoIterator<Item = &'a str>,
{
    rules.validate()?;
    Ok(render_lines(lines, rules))
}

/// Rewrite `\r\n` and lone `\r` terminators to `\n`
///
/// A lone `\r` ends a line, so text after it starts a new one.
pub fn normalize_line_endings(source: &str) -> Cow<'_, str> {
    if source.contains('\r') {
        Cow::Owned(source.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(source)
    }
}

/// Split source text into lines, each keeping its `\n` terminator
pub fn source_lines(source: &str) -> impl Iterator<Item = &str> {
    source.split_inclusive('\n')
}

fn render_lines<'a, I>(lines: I, rules: &ConversionRules) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut assembler = BlockAssembler::new(rules);
    let mut line_count = 0usize;
    for line in lines {
        assembler.push_line(transform_line(line, rules));
        line_count += 1;
    }
    let fragments = assembler.finish();
    debug!(
        lines = line_count,
        fragments = fragments.len(),
        "converted document"
    );
    fragments.concat()
}
