use crate::parsing::{
    blocks::{Block, BlockNode},
    inline::parse_inline,
};

use super::types::RenderNode;

/// Converts assembled blocks into render nodes, one per block, in order.
///
/// Paragraphs, blockquotes, list items and table cells are inline-parsed;
/// everything else is copied as is.
pub fn emit(blocks: Vec<BlockNode>) -> Vec<RenderNode> {
    blocks.into_iter().map(|b| emit_block(b.block)).collect()
}

pub fn emit_block(block: Block) -> RenderNode {
    match block {
        Block::Header { level, text } => RenderNode::Header { level, text },
        Block::List { ordered, items } => RenderNode::List {
            ordered,
            items: items.iter().map(|i| parse_inline(i)).collect(),
        },
        Block::Blockquote { text } => RenderNode::Blockquote {
            spans: parse_inline(&text),
        },
        Block::HorizontalRule => RenderNode::HorizontalRule,
        Block::CodeBlock { language, lines } => RenderNode::CodeBlock { language, lines },
        Block::TableRow {
            cells,
            is_header_row,
        } => RenderNode::TableRow {
            cells: cells.iter().map(|c| parse_inline(c)).collect(),
            is_header_row,
        },
        Block::Paragraph { text } => RenderNode::Paragraph {
            spans: parse_inline(&text),
        },
        Block::LineBreak => RenderNode::LineBreak,
    }
}
