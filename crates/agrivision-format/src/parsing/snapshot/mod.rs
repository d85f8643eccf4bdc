//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: converts a parsed tree to a stable, serializable `Snap`
//!   and to a compact text outline for `insta` inline snapshots
//! - **`invariants`**: runtime checks for parser correctness (spans in bounds,
//!   child spans contained in parents, inline nodes tiling their line)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize, outline};
