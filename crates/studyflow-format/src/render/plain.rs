use crate::parsing::inline::InlineSpan;

use super::types::RenderNode;

/// Concatenates the visible text of a span sequence.
pub fn spans_to_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::text).collect()
}

/// Flattens a render tree to readable text, one line per output line.
///
/// Styling is dropped; list markers, quote prefixes and rules are written
/// out so structure stays visible.
pub fn to_plain_text(nodes: &[RenderNode]) -> String {
    let mut lines: Vec<String> = vec![];
    for node in nodes {
        match node {
            RenderNode::Header { text, .. } => lines.push(text.clone()),
            RenderNode::List { ordered, items } => {
                for (i, item) in items.iter().enumerate() {
                    let marker = if *ordered {
                        format!("{}.", i + 1)
                    } else {
                        "-".to_string()
                    };
                    lines.push(format!("{marker} {}", spans_to_text(item)));
                }
            }
            RenderNode::Blockquote { spans } => lines.push(format!("> {}", spans_to_text(spans))),
            RenderNode::HorizontalRule => lines.push("---".to_string()),
            RenderNode::CodeBlock { lines: code, .. } => lines.extend(code.iter().cloned()),
            RenderNode::TableRow { cells, .. } => lines.push(
                cells
                    .iter()
                    .map(|c| spans_to_text(c))
                    .collect::<Vec<_>>()
                    .join(" | "),
            ),
            RenderNode::Paragraph { spans } => lines.push(spans_to_text(spans)),
            RenderNode::LineBreak => lines.push(String::new()),
        }
    }
    lines.join("\n")
}
