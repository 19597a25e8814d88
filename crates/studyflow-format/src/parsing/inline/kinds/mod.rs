//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`CodeSpan`**: `TICK` - raw zone that suppresses other parsing
//! - **`Emphasis`**: `BOLD` (`**`, `__`) and `ITALIC` (`*`, `_`) toggles
//! - **`Link`**: `OPEN`, `CLOSE`, `URL_OPEN`, `URL_CLOSE` for `[text](url)`
//!
//! The parser calls these constants; it never hardcodes `` ` `` or `[`.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, EmphasisKind};
pub use link::Link;
