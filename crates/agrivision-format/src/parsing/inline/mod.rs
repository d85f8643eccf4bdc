//! # Inline Parsing
//!
//! Cursor-based emphasis parsing over one line of text.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over each content
//! span a block owns (header text, list item text, paragraph line). Lines are
//! parsed independently, so emphasis never spans a newline.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, Strong, Emphasis)
//! - **`kinds`**: inline types with owned delimiters (Strong, Emphasis)
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! `**` is tried before `*`. Text inside a closed `Strong` is parsed again
//! for italics only.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineNode;
