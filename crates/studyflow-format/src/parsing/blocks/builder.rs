use crate::{options::FormatOptions, parsing::span::LineSpan};

use super::{
    classify::{LineClass, LineClassifier},
    kinds::CodeFence,
    types::{Block, BlockNode},
};

/// The single accumulator that may be open while lines are pushed.
#[derive(Debug)]
enum OpenBlock {
    None,
    List {
        ordered: bool,
        items: Vec<String>,
        start: usize,
    },
    Blockquote {
        lines: Vec<String>,
        start: usize,
    },
    /// Rows are emitted immediately; this only remembers that the header
    /// row of the current run has been seen.
    Table,
    Fence {
        language: Option<String>,
        lines: Vec<String>,
        start: usize,
    },
}

pub struct BlockBuilder {
    classifier: LineClassifier,
    open: OpenBlock,
    /// Index of the next line to be pushed.
    line: usize,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new(options: FormatOptions) -> Self {
        Self {
            classifier: LineClassifier::new(options),
            open: OpenBlock::None,
            line: 0,
            out: vec![],
        }
    }

    /// Feeds the next source line (without its line terminator).
    pub fn push(&mut self, raw: &str) {
        let line = self.line;
        self.line += 1;

        if self.in_fence() {
            self.consume_fence_line(raw, line);
            return;
        }

        let class = self.classifier.classify(raw);
        log::trace!("line {line}: {class:?}");

        match class {
            LineClass::Blank => {
                self.flush(line);
                self.emit(Block::LineBreak, LineSpan::single(line));
            }
            LineClass::CodeFence { language } => {
                self.flush(line);
                self.open = OpenBlock::Fence {
                    language,
                    lines: vec![],
                    start: line,
                };
            }
            LineClass::Header { level, text } => {
                self.flush(line);
                self.emit(Block::Header { level, text }, LineSpan::single(line));
            }
            LineClass::Rule => {
                self.flush(line);
                self.emit(Block::HorizontalRule, LineSpan::single(line));
            }
            LineClass::ListItem(text) => self.push_list_item(false, text, line),
            LineClass::NumberedListItem(text) => self.push_list_item(true, text, line),
            LineClass::Blockquote(text) => {
                if let OpenBlock::Blockquote { lines, .. } = &mut self.open {
                    lines.push(text);
                } else {
                    self.flush(line);
                    self.open = OpenBlock::Blockquote {
                        lines: vec![text],
                        start: line,
                    };
                }
            }
            LineClass::TableRow(cells) => {
                let is_header_row = !matches!(self.open, OpenBlock::Table);
                if is_header_row {
                    self.flush(line);
                    self.open = OpenBlock::Table;
                }
                self.emit(
                    Block::TableRow {
                        cells,
                        is_header_row,
                    },
                    LineSpan::single(line),
                );
            }
            LineClass::TableSeparator => {
                // Consumed. Inside a table it keeps the run going.
                if !matches!(self.open, OpenBlock::Table) {
                    self.flush(line);
                }
            }
            LineClass::Paragraph(text) => {
                self.flush(line);
                self.emit(Block::Paragraph { text }, LineSpan::single(line));
            }
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        if let OpenBlock::Fence { start, .. } = &self.open {
            log::debug!("unterminated code fence opened at line {start}, emitting collected lines");
        }
        self.flush(self.line);
        log::debug!(
            "assembled {} blocks from {} lines",
            self.out.len(),
            self.line
        );
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.open, OpenBlock::Fence { .. })
    }

    fn consume_fence_line(&mut self, raw: &str, line: usize) {
        if CodeFence::is_delimiter(raw.trim()) {
            // Closing fence belongs to the block.
            self.flush(line + 1);
            return;
        }
        if let OpenBlock::Fence { lines, .. } = &mut self.open {
            lines.push(raw.to_string());
        }
    }

    fn push_list_item(&mut self, ordered: bool, text: String, line: usize) {
        match &mut self.open {
            OpenBlock::List {
                ordered: open_ordered,
                items,
                ..
            } if *open_ordered == ordered => items.push(text),
            _ => {
                self.flush(line);
                self.open = OpenBlock::List {
                    ordered,
                    items: vec![text],
                    start: line,
                };
            }
        }
    }

    fn emit(&mut self, block: Block, span: LineSpan) {
        self.out.push(BlockNode { block, span });
    }

    /// Closes the open accumulator, if any. `end` is the exclusive line index
    /// the closed block extends to.
    fn flush(&mut self, end: usize) {
        match std::mem::replace(&mut self.open, OpenBlock::None) {
            OpenBlock::None | OpenBlock::Table => {}
            OpenBlock::List {
                ordered,
                items,
                start,
            } => self.emit(Block::List { ordered, items }, LineSpan::new(start, end)),
            OpenBlock::Blockquote { lines, start } => self.emit(
                Block::Blockquote {
                    text: lines.join(" "),
                },
                LineSpan::new(start, end),
            ),
            OpenBlock::Fence {
                language,
                lines,
                start,
            } => self.emit(
                Block::CodeBlock { language, lines },
                LineSpan::new(start, end),
            ),
        }
    }
}
