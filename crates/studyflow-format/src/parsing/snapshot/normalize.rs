use serde::Serialize;

use crate::{
    parsing::{
        blocks::{Block, BlockNode},
        inline::InlineSpan,
    },
    render::{RenderNode, emit_block},
};

/// Snapshot of a formatted document for testing with `insta`.
#[derive(Debug, Serialize)]
pub struct Snap {
    /// All blocks in the document.
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block for testing.
#[derive(Debug, Serialize)]
pub struct BlockSnap {
    /// Block kind with its key attribute, e.g. "Header(2)", "List(ordered)".
    pub kind: String,
    /// Source line range as `start..end`.
    pub lines: String,
    /// Preview of the block's raw text (truncated for readability).
    pub text: String,
    /// One entry per inline-parsed text: the paragraph, each item or each cell.
    pub inline: Vec<String>,
}

/// Converts parsed blocks into a serializable snapshot for testing.
pub fn normalize(blocks: &[BlockNode]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| {
            let (kind, text) = match &b.block {
                Block::Header { level, text } => (format!("Header({level})"), text.clone()),
                Block::List { ordered, items } => (
                    format!("List({})", if *ordered { "ordered" } else { "bullet" }),
                    items.join(" / "),
                ),
                Block::Blockquote { text } => ("Blockquote".to_string(), text.clone()),
                Block::HorizontalRule => ("HorizontalRule".to_string(), String::new()),
                Block::CodeBlock { language, lines } => (
                    match language {
                        Some(lang) => format!("CodeBlock({lang})"),
                        None => "CodeBlock".to_string(),
                    },
                    lines.join("\n"),
                ),
                Block::TableRow {
                    cells,
                    is_header_row,
                } => (
                    if *is_header_row {
                        "TableRow(header)".to_string()
                    } else {
                        "TableRow".to_string()
                    },
                    cells.join(" | "),
                ),
                Block::Paragraph { text } => ("Paragraph".to_string(), text.clone()),
                Block::LineBreak => ("LineBreak".to_string(), String::new()),
            };

            let inline = match emit_block(b.block.clone()) {
                RenderNode::List { items: seqs, .. } | RenderNode::TableRow { cells: seqs, .. } => {
                    seqs.iter().map(|s| label_spans(s)).collect()
                }
                RenderNode::Blockquote { spans } | RenderNode::Paragraph { spans } => {
                    vec![label_spans(&spans)]
                }
                _ => vec![],
            };

            BlockSnap {
                kind,
                lines: format!("{}..{}", b.span.start, b.span.end),
                text: preview(&text, 60),
                inline,
            }
        })
        .collect();

    Snap { blocks }
}

/// Compact one-line form of a span sequence, e.g. `Bold[a] Text[ b]`.
pub fn label_spans(spans: &[InlineSpan]) -> String {
    spans
        .iter()
        .map(|s| match s {
            InlineSpan::PlainText(t) => format!("Text[{t}]"),
            InlineSpan::Bold(t) => format!("Bold[{t}]"),
            InlineSpan::Italic(t) => format!("Italic[{t}]"),
            InlineSpan::BoldItalic(t) => format!("BoldItalic[{t}]"),
            InlineSpan::Code(t) => format!("Code[{t}]"),
            InlineSpan::Link { text, url } => format!("Link[{text} -> {url}]"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncates to `max` characters with a "..." suffix if needed.
pub fn preview(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max).collect();
    out.push_str("...");
    out
}
