use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::types::ListKind;

/// A numbered marker (`12.`) or a bullet (`-`, `*`, `•`), then whitespace.
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.|[-*•])\s+").expect("list marker pattern is valid"));

/// List item block type.
///
/// A marker must be followed by whitespace; `-` or `1.` alone is plain text.
pub struct ListItem;

/// A list marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch {
    pub kind: ListKind,
    /// Byte offset where the item text begins (after marker and whitespace).
    pub content_start: usize,
}

impl ListItem {
    pub const NUMBER_SUFFIX: char = '.';

    /// Detects a list marker at the start of `s` (leading whitespace already removed).
    pub fn detect(s: &str) -> Option<MarkerMatch> {
        let caps = LIST_MARKER.captures(s)?;
        let marker = caps.get(1)?.as_str();
        let kind = if marker.ends_with(Self::NUMBER_SUFFIX) {
            ListKind::Numbered
        } else {
            ListKind::Bulleted
        };
        Some(MarkerMatch {
            kind,
            content_start: caps.get(0)?.end(),
        })
    }
}
