//! Formatting options and the named dialects that bundle them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub const DEFAULT_FALLBACK: &str = "No information available.";

/// CSS classes attached to the generated tags. `None` emits a bare tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Class for the `<ul>` wrapper.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<String>,
    /// Class for each `<li>` of a numbered list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numbered_item: Option<String>,
    /// Prefix for header classes; the HTML level is appended (`prefix2`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_prefix: Option<String>,
    /// Class for `<hr>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    /// Class for `<p>` blocks produced from text (not the fallback).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<String>,
}

/// Everything a [`crate::Formatter`] needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Text shown in a lone `<p>` when there is nothing to format.
    pub fallback: String,
    /// Also escape `"` as `&quot;` in text.
    pub escape_quotes: bool,
    pub classes: ClassNames,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Dialect::Plain.options()
    }
}

/// Named option sets, one per place the web app formats text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// No classes, default fallback.
    #[default]
    Plain,
    /// Disease treatment advice from the prediction endpoint.
    Treatment,
    /// Fertilizer recommendation text.
    Recommendation,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Plain, Dialect::Treatment, Dialect::Recommendation];

    pub fn options(self) -> FormatOptions {
        let numbered_item = Some("numbered".to_string());
        match self {
            Dialect::Plain => FormatOptions {
                fallback: DEFAULT_FALLBACK.to_string(),
                escape_quotes: false,
                classes: ClassNames {
                    numbered_item,
                    ..ClassNames::default()
                },
            },
            Dialect::Treatment => FormatOptions {
                fallback: "No treatment information available.".to_string(),
                escape_quotes: true,
                classes: ClassNames {
                    list: Some("treatment-list".to_string()),
                    ..ClassNames::default()
                },
            },
            Dialect::Recommendation => FormatOptions {
                fallback: "No recommendation available.".to_string(),
                escape_quotes: false,
                classes: ClassNames {
                    list: Some("fertilizer-list".to_string()),
                    numbered_item,
                    header_prefix: Some("fertilizer-h".to_string()),
                    rule: Some("fertilizer-hr".to_string()),
                    paragraph: Some("fertilizer-paragraph".to_string()),
                },
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Plain => "plain",
            Dialect::Treatment => "treatment",
            Dialect::Recommendation => "recommendation",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect '{0}' (expected plain, treatment or recommendation)")]
pub struct UnknownDialect(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDialect(s.to_string()))
    }
}
