//! # Parsing
//!
//! Two-phase block parsing followed by per-block inline parsing.
//!
//! 1. **Line classification** (`blocks::classify`): every line is tagged with
//!    a [`LineClass`](blocks::LineClass) using local facts only.
//! 2. **Block assembly** (`blocks::builder`): a [`BlockBuilder`] folds the
//!    classified lines into [`BlockNode`]s, merging list items, quote lines
//!    and table rows.
//! 3. **Inline parsing** (`inline`): the raw text of each text-bearing block
//!    is scanned into [`InlineSpan`](inline::InlineSpan)s.
//!
//! Fenced code is a raw zone: its lines bypass classification and are never
//! inline-parsed.

pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod span;

#[cfg(test)]
mod tests;

use crate::options::FormatOptions;

use blocks::{BlockBuilder, BlockNode};

/// Splits `text` into lines and assembles them into blocks.
///
/// Both `\n` and `\r\n` line endings are accepted. A trailing newline does
/// not produce an extra blank line.
pub fn parse_blocks(text: &str, options: FormatOptions) -> Vec<BlockNode> {
    let mut builder = BlockBuilder::new(options);
    for line in text.lines() {
        builder.push(line);
    }
    builder.finish()
}
