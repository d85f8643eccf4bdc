//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    holding only local facts (blank, rule, header level, list marker kind,
//!    content span).
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps at most one
//!    open paragraph or list and emits `BlockNode`s as they close. Inline
//!    parsing runs on each content span as the block is emitted.
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode`, `BlockKind`, `ListKind`, `InlineText`
//! - **`kinds`**: block types that own their markers (Header, ListItem, Rule)
//! - **`classify`**: `LineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Blocks come out in source order.
//! - Every content span lies inside its block span.
//! - Empty list items never produce content.

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier, LineKind};
pub use types::{BlockKind, BlockNode, InlineText, ListKind};
