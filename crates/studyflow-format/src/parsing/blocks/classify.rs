use crate::options::{FormatMode, FormatOptions};

use super::kinds::{BlockQuote, CodeFence, Header, ListItem, ListMarker, Table, ThematicBreak};

/// Classification of a single line, with its block marker stripped.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Empty or whitespace-only.
    Blank,
    /// A ```` ``` ```` line, with the language hint if one follows the fence.
    CodeFence { language: Option<String> },
    Header { level: u8, text: String },
    Blockquote(String),
    Rule,
    ListItem(String),
    NumberedListItem(String),
    /// Trimmed, non-empty cells in order.
    TableRow(Vec<String>),
    /// A `|---|---|` row: consumed without producing a block.
    TableSeparator,
    /// The full trimmed line.
    Paragraph(String),
}

/// Classifies individual lines for the block parsing phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier {
    options: FormatOptions,
}

impl LineClassifier {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Classifies a line into a [`LineClass`]. The first matching rule wins:
    /// blank, code fence, header, blockquote, rule, list item, table row,
    /// (chat mode only) title-like line, paragraph.
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return LineClass::Blank;
        }
        if let Some(language) = CodeFence::open(trimmed) {
            return LineClass::CodeFence { language };
        }
        if let Some((level, text)) = Header::parse(trimmed) {
            return LineClass::Header {
                level,
                text: text.to_string(),
            };
        }
        if let Some(text) = BlockQuote::strip_prefix(trimmed) {
            return LineClass::Blockquote(text.to_string());
        }
        if ThematicBreak::matches(trimmed) {
            return LineClass::Rule;
        }
        if let Some((marker, text)) = ListItem::parse(trimmed) {
            return match marker {
                ListMarker::Bullet => LineClass::ListItem(text.to_string()),
                ListMarker::Numbered => LineClass::NumberedListItem(text.to_string()),
            };
        }
        if Table::is_row(trimmed) {
            if Table::is_separator(trimmed) {
                return LineClass::TableSeparator;
            }
            return LineClass::TableRow(Table::cells(trimmed));
        }
        if self.options.mode == FormatMode::Chat
            && Header::looks_like_header(trimmed, self.options.heuristic_header_max_len)
        {
            return LineClass::Header {
                level: Header::clamp_level(self.options.heuristic_header_level),
                text: Header::heuristic_text(trimmed).to_string(),
            };
        }

        LineClass::Paragraph(trimmed.to_string())
    }
}
