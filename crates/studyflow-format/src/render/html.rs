//! HTML output using the `markdown-*` class names of the StudyFlow web
//! stylesheet. All text and attribute values are escaped here; spans and
//! nodes themselves are never pre-escaped.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::inline::InlineSpan;

use super::types::RenderNode;

/// Renders a whole tree wrapped in `<div class="markdown-content">`.
pub fn to_html(nodes: &[RenderNode]) -> String {
    let mut out = String::from(r#"<div class="markdown-content">"#);
    for node in nodes {
        write_node(&mut out, node);
    }
    out.push_str("</div>");
    out
}

/// Renders a span sequence without any block wrapper.
pub fn spans_to_html(spans: &[InlineSpan]) -> String {
    let mut out = String::new();
    write_spans(&mut out, spans);
    out
}

fn write_node(out: &mut String, node: &RenderNode) {
    match node {
        RenderNode::Header { level, text } => {
            // `#` renders as h2 so page titles keep h1.
            let tag = format!("h{}", level.saturating_add(1).min(6));
            out.push_str(&format!(r#"<{tag} class="markdown-{tag}">"#));
            out.push_str(&encode_text(text));
            out.push_str(&format!("</{tag}>"));
        }
        RenderNode::List { ordered, items } => {
            let tag = if *ordered { "ol" } else { "ul" };
            out.push_str(&format!(r#"<{tag} class="markdown-list">"#));
            for item in items {
                out.push_str(r#"<li class="markdown-li">"#);
                write_spans(out, item);
                out.push_str("</li>");
            }
            out.push_str(&format!("</{tag}>"));
        }
        RenderNode::Blockquote { spans } => {
            out.push_str(r#"<blockquote class="markdown-blockquote">"#);
            write_spans(out, spans);
            out.push_str("</blockquote>");
        }
        RenderNode::HorizontalRule => out.push_str(r#"<hr class="markdown-hr" />"#),
        RenderNode::CodeBlock { language, lines } => {
            out.push_str(r#"<pre class="markdown-pre"><code class="markdown-code-block"#);
            if let Some(lang) = language {
                out.push_str(" language-");
                out.push_str(&encode_double_quoted_attribute(lang));
            }
            out.push_str(r#"">"#);
            out.push_str(&encode_text(&lines.join("\n")));
            out.push_str("</code></pre>");
        }
        RenderNode::TableRow {
            cells,
            is_header_row,
        } => {
            if *is_header_row {
                out.push_str(r#"<div class="markdown-table-row markdown-table-header">"#);
            } else {
                out.push_str(r#"<div class="markdown-table-row">"#);
            }
            for cell in cells {
                out.push_str(r#"<div class="markdown-table-cell">"#);
                write_spans(out, cell);
                out.push_str("</div>");
            }
            out.push_str("</div>");
        }
        RenderNode::Paragraph { spans } => {
            out.push_str(r#"<p class="markdown-p">"#);
            write_spans(out, spans);
            out.push_str("</p>");
        }
        RenderNode::LineBreak => out.push_str("<br />"),
    }
}

fn write_spans(out: &mut String, spans: &[InlineSpan]) {
    for span in spans {
        match span {
            InlineSpan::PlainText(t) => out.push_str(&encode_text(t)),
            InlineSpan::Bold(t) => {
                out.push_str(r#"<strong class="markdown-strong">"#);
                out.push_str(&encode_text(t));
                out.push_str("</strong>");
            }
            InlineSpan::Italic(t) => {
                out.push_str(r#"<em class="markdown-em">"#);
                out.push_str(&encode_text(t));
                out.push_str("</em>");
            }
            InlineSpan::BoldItalic(t) => {
                out.push_str(r#"<strong class="markdown-strong"><em class="markdown-em">"#);
                out.push_str(&encode_text(t));
                out.push_str("</em></strong>");
            }
            InlineSpan::Code(t) => {
                out.push_str(r#"<code class="markdown-code">"#);
                out.push_str(&encode_text(t));
                out.push_str("</code>");
            }
            InlineSpan::Link { text, url } => {
                out.push_str(r#"<a class="markdown-a" href=""#);
                out.push_str(&encode_double_quoted_attribute(url));
                out.push_str(r#"" target="_blank" rel="noopener noreferrer">"#);
                out.push_str(&encode_text(text));
                out.push_str("</a>");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain(s: &str) -> InlineSpan {
        InlineSpan::PlainText(s.into())
    }

    #[test]
    fn empty_tree_is_just_the_wrapper() {
        assert_eq!(to_html(&[]), r#"<div class="markdown-content"></div>"#);
    }

    #[test]
    fn headers_shift_down_one_level() {
        let html = to_html(&[
            RenderNode::Header {
                level: 1,
                text: "Plan".into(),
            },
            RenderNode::Header {
                level: 4,
                text: "Detail".into(),
            },
        ]);
        assert!(html.contains(r#"<h2 class="markdown-h2">Plan</h2>"#));
        assert!(html.contains(r#"<h5 class="markdown-h5">Detail</h5>"#));
    }

    #[test]
    fn ordered_and_unordered_lists() {
        let html = to_html(&[
            RenderNode::List {
                ordered: false,
                items: vec![vec![plain("a")]],
            },
            RenderNode::List {
                ordered: true,
                items: vec![vec![plain("b")]],
            },
        ]);
        assert!(html.contains(r#"<ul class="markdown-list"><li class="markdown-li">a</li></ul>"#));
        assert!(html.contains(r#"<ol class="markdown-list"><li class="markdown-li">b</li></ol>"#));
    }

    #[test]
    fn spans_render_with_classes() {
        let html = spans_to_html(&[
            InlineSpan::Bold("b".into()),
            InlineSpan::Italic("i".into()),
            InlineSpan::BoldItalic("bi".into()),
            InlineSpan::Code("c".into()),
        ]);
        assert_eq!(
            html,
            concat!(
                r#"<strong class="markdown-strong">b</strong>"#,
                r#"<em class="markdown-em">i</em>"#,
                r#"<strong class="markdown-strong"><em class="markdown-em">bi</em></strong>"#,
                r#"<code class="markdown-code">c</code>"#,
            )
        );
    }

    #[test]
    fn links_open_in_new_tab() {
        let html = spans_to_html(&[InlineSpan::Link {
            text: "docs".into(),
            url: "http://x.com".into(),
        }]);
        assert_eq!(
            html,
            r#"<a class="markdown-a" href="http://x.com" target="_blank" rel="noopener noreferrer">docs</a>"#
        );
    }

    #[test]
    fn text_is_escaped() {
        let html = spans_to_html(&[plain("<script>alert('x')</script> & more")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; more"));
    }

    #[test]
    fn attribute_quotes_are_escaped() {
        let html = spans_to_html(&[InlineSpan::Link {
            text: "x".into(),
            url: r#"" onclick="evil"#.into(),
        }]);
        assert!(!html.contains(r#"" onclick=""#));
        assert!(html.contains("&quot;"));
    }

    #[test]
    fn code_block_with_language() {
        let html = to_html(&[RenderNode::CodeBlock {
            language: Some("rust".into()),
            lines: vec!["let a = 1 < 2;".into(), "done()".into()],
        }]);
        assert!(html.contains(
            "<pre class=\"markdown-pre\"><code class=\"markdown-code-block language-rust\">let a = 1 &lt; 2;\ndone()</code></pre>"
        ));
    }

    #[test]
    fn table_header_row_class() {
        let html = to_html(&[
            RenderNode::TableRow {
                cells: vec![vec![plain("Day")]],
                is_header_row: true,
            },
            RenderNode::TableRow {
                cells: vec![vec![plain("Mon")]],
                is_header_row: false,
            },
        ]);
        assert!(html.contains(
            r#"<div class="markdown-table-row markdown-table-header"><div class="markdown-table-cell">Day</div></div>"#
        ));
        assert!(html.contains(
            r#"<div class="markdown-table-row"><div class="markdown-table-cell">Mon</div></div>"#
        ));
    }

    #[test]
    fn rule_break_and_quote() {
        let html = to_html(&[
            RenderNode::HorizontalRule,
            RenderNode::LineBreak,
            RenderNode::Blockquote {
                spans: vec![plain("q")],
            },
        ]);
        assert_eq!(
            html,
            concat!(
                r#"<div class="markdown-content">"#,
                r#"<hr class="markdown-hr" />"#,
                "<br />",
                r#"<blockquote class="markdown-blockquote">q</blockquote>"#,
                "</div>"
            )
        );
    }
}
