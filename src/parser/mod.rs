//! Data file parser.
//!
//! Turns the tab-separated input file into four numeric streams. Sub-modules
//! split the work into focused areas:
//!
//! - [`source`] – File I/O abstraction (filesystem vs. in-memory)
//! - [`tokenizer`] – Per-stream token buffers and read cursors
//! - [`value`] – Decimal parsing with comma tolerance

pub mod source;
pub mod tokenizer;
pub mod value;

pub use source::*;
pub use tokenizer::{StreamBuffers, StreamCursor};
pub use value::parse_value;
