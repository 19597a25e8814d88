use serde::Serialize;

/// A styled or plain run of text within a block.
///
/// Spans form a flat sequence. Styled variants hold plain text only; text
/// that is both bold and italic is a single `BoldItalic` span rather than
/// two nested ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InlineSpan {
    PlainText(String),
    Bold(String),
    Italic(String),
    BoldItalic(String),
    /// Verbatim contents of a backtick span.
    Code(String),
    Link { text: String, url: String },
}

impl InlineSpan {
    /// The visible text of the span (a link shows its text, not its url).
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::PlainText(t)
            | InlineSpan::Bold(t)
            | InlineSpan::Italic(t)
            | InlineSpan::BoldItalic(t)
            | InlineSpan::Code(t) => t,
            InlineSpan::Link { text, .. } => text,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, InlineSpan::Bold(_) | InlineSpan::BoldItalic(_))
    }

    pub fn is_italic(&self) -> bool {
        matches!(self, InlineSpan::Italic(_) | InlineSpan::BoldItalic(_))
    }
}
