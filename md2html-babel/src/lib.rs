//! Line-oriented Markdown to HTML conversion
//!
//!     This crate converts a small Markdown dialect into HTML one line at a time. It supports
//!     headings, one bold and one italic pair per line, unordered (`-`) and ordered (`*`)
//!     lists, paragraphs, and two extensions: `[[text]]` is replaced by the MD5 digest of
//!     `text`, and `((text))` by `text` with every `C` and `c` removed.
//!
//!     This is a pure lib, that is, it powers the markdown2html binary but is shell agnostic:
//!     no code here reads files, prints, or looks at environment variables.
//!
//! Architecture
//!
//!     The work is split in two layers that run in lockstep for every line:
//!
//!     - Line transformer (./inline.rs): pure function from one source line to a rewritten
//!       line plus its heading level. It never looks at other lines.
//!     - Block assembler (./block.rs): consumes transformed lines in order, keeps the
//!       open/closed state of the list and paragraph wrappers, and emits HTML fragments.
//!
//!     Source text has `\r\n` and lone `\r` rewritten to `\n` before it is split into lines.
//!     The output is the concatenation of those fragments with no separator. Each fragment
//!     carries its own line terminator where it has one.
//!
//!     The file structure :
//!     .
//!     ├── error.rs            # ConvertError
//!     ├── rules.rs            # ConversionRules (tag names, removal set, line break)
//!     ├── inline.rs           # Line transformer
//!     ├── block.rs            # Block assembler
//!     ├── transforms.rs       # markdown_to_html and friends
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs              # mounts the modules below
//!     ├── conversion
//!     │   ├── document.rs     # whole-document conversions and fixtures
//!     │   └── properties.rs   # proptest invariants
//!     └── fixtures
//!
//! Known quirks
//!
//!     These are kept on purpose, as they are part of the dialect:
//!     - Only the first `**` pair and the first `__` pair of a line are converted.
//!     - Headings are stripped of `#` on both ends of the whole line, so `# a #\n` keeps its
//!       trailing `#` (the newline sits after it).
//!     - A heading line inside an open paragraph is emitted inside that paragraph.
//!     - Nothing is HTML-escaped.

pub mod block;
pub mod error;
pub mod inline;
pub mod rules;
pub mod transforms;

pub use block::{BlockAssembler, BlockState, ListKind};
pub use error::ConvertError;
pub use inline::{transform_line, TransformedLine};
pub use rules::ConversionRules;
pub use transforms::{
    convert_lines, markdown_to_html, markdown_to_html_with_rules, normalize_line_endings,
};
