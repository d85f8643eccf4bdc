//! # Block Kinds
//!
//! Each block kind owns its syntax. The classifier calls these types and
//! never hardcodes `#`, `---` or list markers itself.

pub mod header;
pub mod list_item;
pub mod rule;

pub use header::{Header, HeaderMatch};
pub use list_item::{ListItem, MarkerMatch};
pub use rule::Rule;
