use crate::{
    options::FormatOptions,
    parsing::parse_blocks,
    render::{RenderNode, emit},
};

/// The configured entry point: text in, render tree out.
///
/// A `Formatter` holds only its options, so one instance can be shared
/// freely between call sites and threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> FormatOptions {
        self.options
    }

    /// Formats `text` into render nodes. Never fails; malformed markup
    /// degrades to plain text.
    pub fn format(&self, text: &str) -> Vec<RenderNode> {
        let blocks = parse_blocks(text, self.options);
        let nodes = emit(blocks);
        log::debug!(
            "formatted {} bytes into {} nodes ({:?} mode)",
            text.len(),
            nodes.len(),
            self.options.mode
        );
        nodes
    }

    /// Like [`Formatter::format`], treating absent text as empty.
    pub fn format_opt(&self, text: Option<&str>) -> Vec<RenderNode> {
        text.map(|t| self.format(t)).unwrap_or_default()
    }
}

/// Formats `text` with the default (strict) options.
pub fn format(text: &str) -> Vec<RenderNode> {
    Formatter::default().format(text)
}

/// Formats optional text with the default options; `None` gives an empty tree.
pub fn format_opt(text: Option<&str>) -> Vec<RenderNode> {
    Formatter::default().format_opt(text)
}
