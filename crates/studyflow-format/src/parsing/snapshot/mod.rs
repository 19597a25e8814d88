//! # Snapshot Testing Support
//!
//! Utilities for testing the formatter via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed blocks to a stable `Snap` format for
//!   `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (spans ordered
//!   and in bounds, every non-blank line accounted for exactly once)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
