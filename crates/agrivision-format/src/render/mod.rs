//! # Rendering
//!
//! Second pass of the formatter: walks a [`crate::parsing::ParsedDoc`] and
//! writes HTML. `escape` is the only place source text is turned into
//! markup-safe output.

pub mod escape;
pub mod html;

pub use html::HtmlRenderer;
