//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters.
//!
//! - **`Strong`**: `DELIM = b"**"`
//! - **`Emphasis`**: `DELIM = b'*'`, plus the rule for which characters may
//!   sit inside a delimiter
//!
//! The parser calls these constants; it never hardcodes `*` or `**`.

pub mod emphasis;
pub mod strong;

pub use emphasis::Emphasis;
pub use strong::Strong;
