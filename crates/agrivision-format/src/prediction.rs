//! Presentation of a disease prediction returned by `POST /api/predict`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::{Formatter, options::Dialect, render::escape::push_escaped};

/// Leading decimal number of a string, the way a browser's `parseFloat`
/// reads `"85%"` or `"91.2 percent"`.
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("number pattern is valid")
});

/// Parses the numeric prefix of `s`, ignoring leading whitespace.
fn leading_number(s: &str) -> Option<f64> {
    let m = LEADING_NUMBER.find(s.trim_start())?;
    m.as_str().parse::<f64>().ok().filter(|n| n.is_finite())
}

pub const UNKNOWN_CLASS: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const ZERO_CONFIDENCE: &str = "0.00";

/// The `result` object of a prediction response. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PredictionResult {
    /// Model class label, e.g. `Tomato___Early_blight`.
    #[serde(rename = "class")]
    pub class_name: Option<String>,
    pub confidence: Option<Confidence>,
    pub description: Option<String>,
    /// Free-form treatment advice, formatted with [`Dialect::Treatment`].
    pub treatment: Option<String>,
}

/// Confidence as sent by the server: usually a percentage number, sometimes
/// a pre-formatted string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Number(f64),
    Text(String),
}

impl Confidence {
    /// Display string with two decimals for numbers. Strings that start with
    /// a number are kept as sent, minus a trailing `%`; anything else becomes
    /// `0.00`.
    pub fn display(&self) -> String {
        match self {
            Confidence::Number(n) if n.is_finite() => format!("{n:.2}"),
            Confidence::Number(_) => ZERO_CONFIDENCE.to_string(),
            Confidence::Text(s) => match leading_number(s) {
                Some(_) => s.trim().trim_end_matches('%').trim_end().to_string(),
                None => ZERO_CONFIDENCE.to_string(),
            },
        }
    }

    /// Numeric value used for the confidence band.
    pub fn value(&self) -> f64 {
        match self {
            Confidence::Number(n) if n.is_finite() => *n,
            Confidence::Text(s) => leading_number(s).unwrap_or(0.0),
            Confidence::Number(_) => 0.0,
        }
    }
}

/// Coarse confidence band shown next to the percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn from_percent(p: f64) -> Self {
        if p >= 80.0 {
            ConfidenceLevel::High
        } else if p >= 60.0 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "#16a34a",
            ConfidenceLevel::Medium => "#f59e0b",
            ConfidenceLevel::Low => "#dc2626",
        }
    }
}

/// Turns a class label into a title: underscores become spaces, runs of
/// whitespace collapse, and each word starts upper-case.
pub fn display_name(class_name: &str) -> String {
    let spaced = class_name.replace('_', " ");
    let mut out = String::with_capacity(spaced.len());
    for (i, word) in spaced.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let mut prev_is_word = false;
        for c in word.chars() {
            if !prev_is_word && c.is_alphanumeric() {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            prev_is_word = c.is_alphanumeric();
        }
    }
    out
}

/// Everything the result card shows, with defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub name: String,
    /// Percentage with two decimals, without the `%` sign.
    pub confidence: String,
    pub level: ConfidenceLevel,
    pub description: String,
    /// Treatment advice already formatted as HTML.
    pub treatment_html: String,
}

impl PredictionView {
    pub fn from_result(r: &PredictionResult) -> Self {
        Self::with_formatter(r, &Formatter::with_dialect(Dialect::Treatment))
    }

    pub fn with_formatter(r: &PredictionResult, formatter: &Formatter) -> Self {
        let name = r
            .class_name
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .map(display_name)
            .unwrap_or_else(|| UNKNOWN_CLASS.to_string());
        let (confidence, value) = match &r.confidence {
            Some(c) => (c.display(), c.value()),
            None => (ZERO_CONFIDENCE.to_string(), 0.0),
        };
        let description = r
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(NO_DESCRIPTION)
            .to_string();

        Self {
            name,
            confidence,
            level: ConfidenceLevel::from_percent(value),
            description,
            treatment_html: formatter.format(r.treatment.as_deref()),
        }
    }

    /// Renders the result card fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<div class=\"result-card\"><h3>");
        push_escaped(&mut out, &self.name, true);
        out.push_str("</h3><div class=\"confidence-badge\" style=\"--conf-color: ");
        out.push_str(self.level.color());
        out.push_str("\"><span class=\"conf-value\">");
        push_escaped(&mut out, &self.confidence, true);
        out.push_str("%</span><span class=\"conf-level\">");
        out.push_str(self.level.label());
        out.push_str("</span></div><p>");
        push_escaped(&mut out, &self.description, true);
        out.push_str("</p><div class=\"treatment\">");
        out.push_str(&self.treatment_html);
        out.push_str("</div></div>");
        out
    }
}
