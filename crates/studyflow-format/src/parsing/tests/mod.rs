//! Cross-stage tests for the parsing module: the block assembler and the
//! inline parser driven together through `format`.

use pretty_assertions::assert_eq;

use crate::{
    FormatOptions,
    format,
    parsing::{inline::InlineSpan, parse_blocks, snapshot},
    render::{RenderNode, plain::spans_to_text},
};

const SAMPLES: &[&str] = &[
    "",
    "\n\n\n",
    "# Title",
    "- a\n- b\n- c",
    "**bold** and *italic*",
    "[click](http://x.com)",
    "```\ncode line\n```",
    "```rust\nunterminated",
    "| a | b |\n|---|---|\n| c | d |",
    "|---|---|",
    "> one\n> two\n\n1. x\n2. y\n- z",
    "text\r\nwith\r\n\r\ncrlf",
    "***\n___\n---\n####\n##### five",
    "* * *\n**\n__\n`",
    "Key Concepts\nNotes:\nA sentence.",
];

#[test]
fn every_sample_satisfies_invariants() {
    for options in [FormatOptions::default(), FormatOptions::chat()] {
        for text in SAMPLES {
            let blocks = parse_blocks(text, options);
            snapshot::invariants(text, &blocks, options);
        }
    }
}

#[test]
fn header_list_and_code_examples() {
    assert_eq!(
        format("# Title"),
        vec![RenderNode::Header {
            level: 1,
            text: "Title".into()
        }]
    );

    assert_eq!(
        format("- a\n- b\n- c"),
        vec![RenderNode::List {
            ordered: false,
            items: vec![
                vec![InlineSpan::PlainText("a".into())],
                vec![InlineSpan::PlainText("b".into())],
                vec![InlineSpan::PlainText("c".into())],
            ],
        }]
    );

    assert_eq!(
        format("```\ncode **line**\n```"),
        vec![RenderNode::CodeBlock {
            language: None,
            lines: vec!["code **line**".into()],
        }]
    );
}

#[test]
fn paragraph_with_link() {
    assert_eq!(
        format("[click](http://x.com)"),
        vec![RenderNode::Paragraph {
            spans: vec![InlineSpan::Link {
                text: "click".into(),
                url: "http://x.com".into(),
            }],
        }]
    );
}

#[test]
fn paragraphs_and_blank_lines_are_each_accounted_for() {
    let text = "first\n\nsecond\nthird\n\n\nfourth";
    let nodes = format(text);
    let paragraphs = nodes
        .iter()
        .filter(|n| matches!(n, RenderNode::Paragraph { .. }))
        .count();
    let breaks = nodes
        .iter()
        .filter(|n| matches!(n, RenderNode::LineBreak))
        .count();
    assert_eq!(paragraphs, 4);
    assert_eq!(breaks, 3);
    assert_eq!(paragraphs + breaks, text.lines().count());
}

#[test]
fn unclosed_bold_paragraph_flattens_to_source() {
    let nodes = format("**unclosed bold");
    assert_eq!(nodes.len(), 1);
    match &nodes[0] {
        RenderNode::Paragraph { spans } => assert_eq!(spans_to_text(spans), "**unclosed bold"),
        other => panic!("expected Paragraph, got {other:?}"),
    }
}

#[test]
fn whitespace_only_input_is_a_single_line_break() {
    assert_eq!(format("   "), vec![RenderNode::LineBreak]);
}

#[test]
fn trailing_newline_adds_no_line_break() {
    assert_eq!(format("# T\n"), format("# T"));
}

#[test]
fn crlf_line_endings_are_stripped() {
    assert_eq!(
        format("```\r\nx\r\n```\r\n"),
        vec![RenderNode::CodeBlock {
            language: None,
            lines: vec!["x".into()],
        }]
    );
}
