//! # Rendering
//!
//! - **`types`**: `RenderNode`, the tree handed to a presentation layer
//! - **`emit`**: `emit()` converts assembled blocks into render nodes
//! - **`html`**: `to_html()` produces escaped markup with `markdown-*` classes
//! - **`plain`**: `to_plain_text()` flattens nodes back to readable text

pub mod emit;
pub mod html;
pub mod plain;
pub mod types;

pub use emit::{emit, emit_block};
pub use types::RenderNode;
