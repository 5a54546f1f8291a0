//! Block assembler
//!
//!     Sequences transformed lines into HTML fragments, opening and closing the list and
//!     paragraph wrappers that span several lines. The assembler owns a [`BlockState`]
//!     record with one flag per block kind; nothing else survives from one line to the next.
//!
//!     For every line the steps are: unordered list, ordered list, paragraph, emission. The
//!     ordered list step looks at the line as the unordered step left it, so a `-` item that
//!     was already rewritten to `<li>` is never mistaken for a `*` item. After the last line
//!     [`BlockAssembler::finish`] closes whatever is still open, unordered list first, then
//!     ordered list, then paragraph.

use crate::inline::TransformedLine;
use crate::rules::ConversionRules;
use tracing::debug;

const PARAGRAPH_OPEN: &str = "<p>\n";
const PARAGRAPH_CLOSE: &str = "</p>\n";

/// The two list flavours, keyed by their marker character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    /// Leading character that makes a line an item of this list kind
    pub fn marker(self) -> char {
        match self {
            ListKind::Unordered => '-',
            ListKind::Ordered => '*',
        }
    }

    fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>\n",
            ListKind::Ordered => "<ol>\n",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>\n",
            ListKind::Ordered => "</ol>\n",
        }
    }
}

/// Blocks that are currently open
///
/// The two list flags are independent; nothing forces them to be mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockState {
    pub unordered_open: bool,
    pub ordered_open: bool,
    pub paragraph_open: bool,
}

impl BlockState {
    pub fn is_list_open(&self, kind: ListKind) -> bool {
        match kind {
            ListKind::Unordered => self.unordered_open,
            ListKind::Ordered => self.ordered_open,
        }
    }

    fn set_list_open(&mut self, kind: ListKind, open: bool) {
        match kind {
            ListKind::Unordered => self.unordered_open = open,
            ListKind::Ordered => self.ordered_open = open,
        }
    }

    /// Whether either list is open
    pub fn in_list(&self) -> bool {
        self.unordered_open || self.ordered_open
    }
}

/// Accumulates output fragments for one conversion
#[derive(Debug)]
pub struct BlockAssembler {
    state: BlockState,
    fragments: Vec<String>,
    line_break: String,
}

impl BlockAssembler {
    pub fn new(rules: &ConversionRules) -> Self {
        Self {
            state: BlockState::default(),
            fragments: Vec::new(),
            line_break: format!("{}\n", rules.line_break),
        }
    }

    /// Current block flags
    pub fn state(&self) -> BlockState {
        self.state
    }

    /// Fragments emitted so far
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Feed the next line of the document.
    pub fn push_line(&mut self, line: TransformedLine) {
        let TransformedLine {
            text,
            heading_level,
        } = line;

        let text = self.step_list(ListKind::Unordered, text);
        let text = self.step_list(ListKind::Ordered, text);

        let blank = text.trim().is_empty();

        // Any leading `#` run keeps a line out of paragraphs, even one too long for a heading.
        if heading_level == 0 && !self.state.in_list() {
            self.step_paragraph(blank);
        }

        if !blank {
            self.fragments.push(text);
        }
    }

    /// Close every open block and return the fragments in emission order.
    pub fn finish(mut self) -> Vec<String> {
        for kind in [ListKind::Unordered, ListKind::Ordered] {
            if self.state.is_list_open(kind) {
                self.close_list(kind);
            }
        }
        if self.state.paragraph_open {
            self.close_paragraph();
        }
        self.fragments
    }

    // The close check uses the marker the line carried on entry, so a run of items shares
    // one wrapper even though each item has been rewritten to `<li>` by then.
    fn step_list(&mut self, kind: ListKind, text: String) -> String {
        let marker = kind.marker();
        if !text.starts_with(marker) {
            if self.state.is_list_open(kind) {
                self.close_list(kind);
            }
            return text;
        }

        if !self.state.is_list_open(kind) {
            debug!(?kind, "opening list");
            self.fragments.push(kind.open_tag().to_string());
            self.state.set_list_open(kind, true);
        }
        format!("<li>{}</li>\n", text.trim_matches(marker).trim())
    }

    fn close_list(&mut self, kind: ListKind) {
        debug!(?kind, "closing list");
        self.fragments.push(kind.close_tag().to_string());
        self.state.set_list_open(kind, false);
    }

    fn step_paragraph(&mut self, blank: bool) {
        if !blank {
            if self.state.paragraph_open {
                self.fragments.push(self.line_break.clone());
            } else {
                debug!("opening paragraph");
                self.fragments.push(PARAGRAPH_OPEN.to_string());
                self.state.paragraph_open = true;
            }
        } else if self.state.paragraph_open {
            self.close_paragraph();
        }
    }

    fn close_paragraph(&mut self) {
        debug!("closing paragraph");
        self.fragments.push(PARAGRAPH_CLOSE.to_string());
        self.state.paragraph_open = false;
    }
}
