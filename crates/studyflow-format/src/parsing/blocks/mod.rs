//! # Block Parsing
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a [`LineClass`]
//!    carrying its payload with the block marker stripped
//! 2. **Block Construction** (`builder`): a [`BlockBuilder`] keeps a single
//!    open accumulator and emits [`BlockNode`]s as blocks open and close
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockNode`)
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Header, ...)
//! - **`classify`**: `LineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no classification or inline parsing inside
//! - Every non-blank line ends up in exactly one block, except table separator rows
//! - Block spans are ascending and never overlap

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
pub use types::{Block, BlockNode};
