//! # Inline Parsing
//!
//! Cursor-based inline parsing over the raw text of one block.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over paragraph,
//! blockquote, list item and table cell text. Headings and code blocks are
//! never inline-parsed.
//!
//! The scan is a single left-to-right pass. At each position it tries, in
//! order: a link, a code span, a `**`/`__` bold toggle, a `*`/`_` italic
//! toggle. Text between delimiters is flushed with the styles open at that
//! moment.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (PlainText, Bold, Italic, BoldItalic, Code, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Emphasis, Link)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with lookahead
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Raw Zones and Degradation
//!
//! Code spans and link text suppress all other parsing inside them.
//! Unclosed constructs degrade to the literal characters of the source, so
//! flattening the spans of malformed input gives the input back.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineSpan;
