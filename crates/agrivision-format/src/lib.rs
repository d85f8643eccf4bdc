//! Formatting of free-form backend text into safe HTML fragments, plus the
//! small pieces of presentation logic that surround it.
//!
//! ```
//! use agrivision_format::format;
//!
//! assert_eq!(format(Some("**bold**")), "<p><strong>bold</strong></p>");
//! ```

pub mod api;
pub mod formatter;
pub mod options;
pub mod parsing;
pub mod prediction;
pub mod recommendation;
pub mod render;

// Re-export key types for easier usage
pub use api::{ApiError, check_upload, decode_prediction, decode_recommendation, render_error};
pub use formatter::{Formatter, format};
pub use options::{ClassNames, Dialect, FormatOptions, UnknownDialect};
pub use prediction::{PredictionResult, PredictionView};
pub use recommendation::{FieldConditions, RecommendationView};
