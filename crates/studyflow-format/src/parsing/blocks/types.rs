use crate::parsing::span::LineSpan;

/// A structural unit of formatted output, still holding raw (not yet
/// inline-parsed) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A `#`-marked (or, in chat mode, promoted) heading.
    Header {
        /// 1 for `#` up to 4 for `####`.
        level: u8,
        text: String,
    },
    /// Consecutive list items sharing the same marker style.
    List { ordered: bool, items: Vec<String> },
    /// Consecutive `> ` lines joined by single spaces.
    Blockquote { text: String },
    /// `---`, `***` or `___`.
    HorizontalRule,
    /// Verbatim lines between code fences.
    CodeBlock {
        language: Option<String>,
        lines: Vec<String>,
    },
    /// One pipe-delimited table row.
    TableRow {
        cells: Vec<String>,
        /// True for the first row of a run of consecutive rows.
        is_header_row: bool,
    },
    /// A single non-blank line of prose.
    Paragraph { text: String },
    /// A deliberate blank line in the source.
    LineBreak,
}

/// A block together with the source lines it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub block: Block,
    pub span: LineSpan,
}
