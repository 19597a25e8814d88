use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, EmphasisKind, Link},
    types::InlineSpan,
};

/// Parses inline content into a sequence of [`InlineSpan`]s.
///
/// # Precedence
/// At each position a link is tried first, then a code span, then a bold
/// toggle, then an italic toggle. Links and code spans are raw zones: no
/// emphasis is recognised inside them.
///
/// # Returns
/// A flat sequence covering the visible text of `s`. Adjacent plain text is
/// merged. Unclosed emphasis, unmatched backticks and incomplete links come
/// back as literal text; this function never fails.
///
/// Runs in time linear in `s.len()`, including on long runs of unmatched
/// `[` or `` ` ``.
pub fn parse_inline(s: &str) -> Vec<InlineSpan> {
    let mut parser = InlineParser::new(s);
    parser.run();
    parser.finish()
}

/// An emphasis delimiter that has been opened but not closed yet.
#[derive(Debug, Clone, Copy)]
struct OpenDelimiter {
    kind: EmphasisKind,
    literal: &'static str,
    /// Output index of the first span styled by this delimiter.
    at: usize,
}

struct InlineParser<'a> {
    cur: Cursor<'a>,
    out: Vec<InlineSpan>,
    /// Start of the plain text not yet flushed.
    text_start: usize,
    /// Open delimiters, in the order they were opened.
    open: Vec<OpenDelimiter>,
    next_close: NextByte,
    next_url_close: NextByte,
    next_tick: NextByte,
}

impl<'a> InlineParser<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            cur: Cursor::new(s),
            out: vec![],
            text_start: 0,
            open: vec![],
            next_close: NextByte::new(Link::CLOSE),
            next_url_close: NextByte::new(Link::URL_CLOSE),
            next_tick: NextByte::new(CodeSpan::TICK),
        }
    }

    fn run(&mut self) {
        while !self.cur.eof() {
            let here = self.cur.i;

            let span = match try_parse_link(
                &mut self.cur,
                &mut self.next_close,
                &mut self.next_url_close,
            ) {
                Some(link) => Some(link),
                None => try_parse_code_span(&mut self.cur, &mut self.next_tick),
            };
            if let Some(span) = span {
                self.flush_text(here);
                self.push(span);
                self.text_start = self.cur.i;
                continue;
            }
            if let Some((kind, literal)) = Emphasis::at(&self.cur) {
                self.flush_text(here);
                self.cur.bump_n(literal.len());
                self.toggle(kind, literal);
                self.text_start = self.cur.i;
                continue;
            }
            self.cur.bump();
        }
        self.flush_text(self.cur.i);
    }

    fn is_open(&self, kind: EmphasisKind) -> bool {
        self.open.iter().any(|d| d.kind == kind)
    }

    fn toggle(&mut self, kind: EmphasisKind, literal: &'static str) {
        if let Some(pos) = self.open.iter().position(|d| d.kind == kind) {
            self.open.remove(pos);
        } else {
            self.open.push(OpenDelimiter {
                kind,
                literal,
                at: self.out.len(),
            });
        }
    }

    /// Emits the pending text up to `end`, styled by whatever is open.
    fn flush_text(&mut self, end: usize) {
        if end <= self.text_start {
            return;
        }
        let text = self.cur.slice(self.text_start, end).to_string();
        let span = match (
            self.is_open(EmphasisKind::Bold),
            self.is_open(EmphasisKind::Italic),
        ) {
            (true, true) => InlineSpan::BoldItalic(text),
            (true, false) => InlineSpan::Bold(text),
            (false, true) => InlineSpan::Italic(text),
            (false, false) => InlineSpan::PlainText(text),
        };
        self.push(span);
    }

    fn push(&mut self, span: InlineSpan) {
        push_merging(&mut self.out, span);
    }

    /// Degrades delimiters still open at end of input back to literal text.
    fn finish(mut self) -> Vec<InlineSpan> {
        // Most recently opened first, so earlier `at` indices stay valid.
        while let Some(d) = self.open.pop() {
            log::debug!(
                "unclosed {:?} delimiter {:?} kept as text",
                d.kind,
                d.literal
            );
            for span in &mut self.out[d.at..] {
                unstyle(span, d.kind);
            }
            self.out
                .insert(d.at, InlineSpan::PlainText(d.literal.to_string()));
        }

        let mut merged = Vec::with_capacity(self.out.len());
        for span in self.out {
            push_merging(&mut merged, span);
        }
        merged
    }
}

/// Appends `span`, folding it into a preceding plain-text span if both are plain.
fn push_merging(out: &mut Vec<InlineSpan>, span: InlineSpan) {
    if let (InlineSpan::PlainText(next), Some(InlineSpan::PlainText(prev))) =
        (&span, out.last_mut())
    {
        prev.push_str(next);
        return;
    }
    out.push(span);
}

/// Memoised forward search for one delimiter byte.
///
/// The scan only moves forward, so a hit found from `from` answers every
/// later search starting at or before the hit, and a miss answers every
/// later search. Each byte of the line is examined at most once per needle.
#[derive(Debug, Clone, Copy)]
struct NextByte {
    needle: u8,
    /// Start and result of the last real search.
    last: Option<(usize, Option<usize>)>,
}

impl NextByte {
    fn new(needle: u8) -> Self {
        Self { needle, last: None }
    }

    fn find(&mut self, cur: &Cursor<'_>, from: usize) -> Option<usize> {
        if let Some((searched_from, hit)) = self.last
            && searched_from <= from
        {
            match hit {
                None => return None,
                Some(h) if from <= h => return Some(h),
                Some(_) => {}
            }
        }
        let hit = cur.find_from(from, self.needle);
        self.last = Some((from, hit));
        hit
    }
}

/// Removes one style from a span in place.
fn unstyle(span: &mut InlineSpan, kind: EmphasisKind) {
    let replaced = match (kind, std::mem::replace(span, InlineSpan::PlainText(String::new()))) {
        (EmphasisKind::Bold, InlineSpan::Bold(t)) => InlineSpan::PlainText(t),
        (EmphasisKind::Bold, InlineSpan::BoldItalic(t)) => InlineSpan::Italic(t),
        (EmphasisKind::Italic, InlineSpan::Italic(t)) => InlineSpan::PlainText(t),
        (EmphasisKind::Italic, InlineSpan::BoldItalic(t)) => InlineSpan::Bold(t),
        (_, other) => other,
    };
    *span = replaced;
}

/// Attempts to parse `[text](url)` at the current position.
///
/// The `(` must follow the first `]` directly. Returns `None` without moving
/// the cursor if the pattern is incomplete.
fn try_parse_link(
    cur: &mut Cursor<'_>,
    next_close: &mut NextByte,
    next_url_close: &mut NextByte,
) -> Option<InlineSpan> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }
    let close = next_close.find(cur, cur.i + 1)?;
    if cur.peek_at(close + 1 - cur.i) != Some(Link::URL_OPEN) {
        return None;
    }
    let url_close = next_url_close.find(cur, close + 2)?;

    let text = cur.slice(cur.i + 1, close).to_string();
    let url = cur.slice(close + 2, url_close).to_string();
    cur.i = url_close + 1;
    Some(InlineSpan::Link { text, url })
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` without moving the cursor if there is no closing backtick.
fn try_parse_code_span(cur: &mut Cursor<'_>, next_tick: &mut NextByte) -> Option<InlineSpan> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }
    let close = next_tick.find(cur, cur.i + 1)?;

    let inner = cur.slice(cur.i + 1, close).to_string();
    cur.i = close + 1;
    Some(InlineSpan::Code(inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::parsing::inline::types::InlineSpan::{Bold, BoldItalic, Code, Italic, PlainText};

    fn plain(s: &str) -> InlineSpan {
        PlainText(s.into())
    }

    fn flatten(spans: &[InlineSpan]) -> String {
        spans.iter().map(InlineSpan::text).collect()
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("hello world"), vec![plain("hello world")]);
    }

    #[test]
    fn empty_input() {
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(
            parse_inline("**bold** and *italic*"),
            vec![
                Bold("bold".into()),
                plain(" and "),
                Italic("italic".into())
            ]
        );
    }

    #[test]
    fn underscore_delimiters() {
        assert_eq!(
            parse_inline("__strong__ _soft_"),
            vec![Bold("strong".into()), plain(" "), Italic("soft".into())]
        );
    }

    #[test]
    fn triple_star_is_bold_italic() {
        assert_eq!(parse_inline("***both***"), vec![BoldItalic("both".into())]);
    }

    #[test]
    fn overlapping_styles_split_into_runs() {
        assert_eq!(
            parse_inline("**a *b* c**"),
            vec![
                Bold("a ".into()),
                BoldItalic("b".into()),
                Bold(" c".into())
            ]
        );
    }

    #[test]
    fn parse_code_span() {
        assert_eq!(
            parse_inline("run `cargo test` now"),
            vec![plain("run "), Code("cargo test".into()), plain(" now")]
        );
    }

    #[test]
    fn code_span_suppresses_emphasis_and_links() {
        assert_eq!(
            parse_inline("`**x** [a](b)`"),
            vec![Code("**x** [a](b)".into())]
        );
    }

    #[test]
    fn parse_link() {
        assert_eq!(
            parse_inline("[click](http://x.com)"),
            vec![InlineSpan::Link {
                text: "click".into(),
                url: "http://x.com".into()
            }]
        );
    }

    #[test]
    fn link_text_is_not_inline_parsed() {
        assert_eq!(
            parse_inline("see [**docs**](u) here"),
            vec![
                plain("see "),
                InlineSpan::Link {
                    text: "**docs**".into(),
                    url: "u".into()
                },
                plain(" here")
            ]
        );
    }

    #[test]
    fn link_inside_bold_keeps_surrounding_style() {
        assert_eq!(
            parse_inline("**read [this](u) first**"),
            vec![
                Bold("read ".into()),
                InlineSpan::Link {
                    text: "this".into(),
                    url: "u".into()
                },
                Bold(" first".into())
            ]
        );
    }

    #[test]
    fn bracket_without_paren_is_literal() {
        assert_eq!(
            parse_inline("[note] (later)"),
            vec![plain("[note] (later)")]
        );
    }

    #[test]
    fn unclosed_link_is_literal() {
        assert_eq!(parse_inline("[text](http://x"), vec![plain("[text](http://x")]);
        assert_eq!(parse_inline("[never closed"), vec![plain("[never closed")]);
    }

    #[test]
    fn unclosed_code_span_becomes_text() {
        assert_eq!(parse_inline("`unclosed code"), vec![plain("`unclosed code")]);
    }

    #[test]
    fn unclosed_bold_degrades_to_source_text() {
        let spans = parse_inline("**unclosed bold");
        assert_eq!(spans, vec![plain("**unclosed bold")]);
    }

    #[test]
    fn unclosed_italic_after_closed_bold() {
        assert_eq!(
            parse_inline("**ok** then *dangling"),
            vec![Bold("ok".into()), plain(" then *dangling")]
        );
    }

    #[test]
    fn unclosed_outer_keeps_inner_closed_style() {
        assert_eq!(
            parse_inline("*a **b** c"),
            vec![plain("*a "), Bold("b".into()), plain(" c")]
        );
    }

    #[test]
    fn unclosed_triple_star_restores_all_delimiters() {
        assert_eq!(parse_inline("***x"), vec![plain("***x")]);
    }

    #[test]
    fn single_underscore_in_identifier_round_trips() {
        assert_eq!(parse_inline("snake_case"), vec![plain("snake_case")]);
    }

    #[rstest::rstest]
    #[case("**unclosed bold")]
    #[case("*dangling italic")]
    #[case("__half")]
    #[case("`tick and **star")]
    #[case("[x](y")]
    #[case("mixed ** and `")]
    fn malformed_input_flattens_to_itself(#[case] input: &str) {
        assert_eq!(flatten(&parse_inline(input)), input);
    }

    #[test]
    fn next_byte_reuses_hits_and_misses() {
        let cur = Cursor::new("a]b]c");
        let mut next = NextByte::new(b']');
        assert_eq!(next.find(&cur, 0), Some(1));
        assert_eq!(next.find(&cur, 1), Some(1));
        assert_eq!(next.find(&cur, 2), Some(3));
        assert_eq!(next.find(&cur, 4), None);
        assert_eq!(next.find(&cur, 5), None);
        // An earlier start than the cached one searches again.
        assert_eq!(next.find(&cur, 0), Some(1));
    }

    #[test]
    fn long_runs_of_unmatched_openers_stay_literal() {
        let n = 200_000;

        let brackets = format!("{}]", "[".repeat(n));
        assert_eq!(parse_inline(&brackets), vec![plain(&brackets)]);

        let dangling_urls = "[x](".repeat(n / 4);
        assert_eq!(parse_inline(&dangling_urls), vec![plain(&dangling_urls)]);
    }

    #[test]
    fn links_resume_after_a_dangling_url() {
        assert_eq!(
            parse_inline("[a](b [c](d)"),
            vec![InlineSpan::Link {
                text: "a".into(),
                url: "b [c](d".into()
            }]
        );
        assert_eq!(
            parse_inline("[a] x [b](c)"),
            vec![
                plain("[a] x "),
                InlineSpan::Link {
                    text: "b".into(),
                    url: "c".into()
                }
            ]
        );
    }

    #[test]
    fn non_ascii_text_is_preserved() {
        assert_eq!(
            parse_inline("Café **über** naïve"),
            vec![plain("Café "), Bold("über".into()), plain(" naïve")]
        );
    }
}
