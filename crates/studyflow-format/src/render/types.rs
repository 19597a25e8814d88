use serde::Serialize;

use crate::parsing::inline::InlineSpan;

/// One node of the render tree. Text-bearing nodes carry parsed spans, so a
/// UI never has to look at markup again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderNode {
    Header {
        level: u8,
        text: String,
    },
    List {
        ordered: bool,
        items: Vec<Vec<InlineSpan>>,
    },
    Blockquote {
        spans: Vec<InlineSpan>,
    },
    HorizontalRule,
    CodeBlock {
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        lines: Vec<String>,
    },
    TableRow {
        cells: Vec<Vec<InlineSpan>>,
        is_header_row: bool,
    },
    Paragraph {
        spans: Vec<InlineSpan>,
    },
    LineBreak,
}

impl RenderNode {
    /// Short label for the node kind, used in logs and snapshots.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RenderNode::Header { .. } => "Header",
            RenderNode::List { .. } => "List",
            RenderNode::Blockquote { .. } => "Blockquote",
            RenderNode::HorizontalRule => "HorizontalRule",
            RenderNode::CodeBlock { .. } => "CodeBlock",
            RenderNode::TableRow { .. } => "TableRow",
            RenderNode::Paragraph { .. } => "Paragraph",
            RenderNode::LineBreak => "LineBreak",
        }
    }
}
