//! # StudyFlow text formatter
//!
//! Turns the lightweight markup found in AI tutor replies and generated study
//! plans into a structured render tree that a presentation layer can draw
//! without re-reading any markup.
//!
//! ```
//! use studyflow_format::{InlineSpan, RenderNode, format};
//!
//! let nodes = format("**Tip:** review daily");
//! assert_eq!(
//!     nodes,
//!     vec![RenderNode::Paragraph {
//!         spans: vec![
//!             InlineSpan::Bold("Tip:".into()),
//!             InlineSpan::PlainText(" review daily".into()),
//!         ],
//!     }]
//! );
//! ```

pub mod formatter;
pub mod options;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use formatter::{Formatter, format, format_opt};
pub use options::{FormatMode, FormatOptions};
pub use parsing::{blocks::Block, inline::InlineSpan};
pub use render::RenderNode;
