//! Block-specific types that own their syntax markers.
//!
//! The classifier calls into these; it never hardcodes `#`, `>` or fences.

pub mod block_quote;
pub mod code_fence;
pub mod header;
pub mod list;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use header::Header;
pub use list::{ListItem, ListMarker};
pub use table::Table;
pub use thematic_break::ThematicBreak;
