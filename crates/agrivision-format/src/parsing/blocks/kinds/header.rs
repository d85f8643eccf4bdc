use std::sync::LazyLock;

use regex::Regex;

/// `#` to `###`, whitespace, then text ending in a non-space character.
static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,3})\s+(.*\S)").expect("header pattern is valid"));

/// Header block type.
///
/// One `#` renders as `h2`, so the page title stays the only `h1`.
pub struct Header;

/// A header found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMatch {
    /// HTML heading level (2 to 4).
    pub level: u8,
    /// Byte offset of the header text within the examined string.
    pub content_start: usize,
    /// Byte offset just past the header text.
    pub content_end: usize,
}

impl Header {
    /// Maps a count of `#` marks to an HTML heading level.
    pub fn html_level(marks: usize) -> u8 {
        // The pattern caps marks at three.
        (marks as u8) + 1
    }

    /// Detects a header at the start of `s` (leading whitespace already removed).
    pub fn detect(s: &str) -> Option<HeaderMatch> {
        let caps = HEADER.captures(s)?;
        let marks = caps.get(1)?;
        let text = caps.get(2)?;
        Some(HeaderMatch {
            level: Self::html_level(marks.len()),
            content_start: text.start(),
            content_end: text.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", 2)]
    #[case("## Title", 3)]
    #[case("### Title", 4)]
    fn levels_map_to_h2_through_h4(#[case] line: &str, #[case] level: u8) {
        let m = Header::detect(line).unwrap();
        assert_eq!(m.level, level);
        assert_eq!(&line[m.content_start..m.content_end], "Title");
    }

    #[rstest]
    #[case("#### Too deep")]
    #[case("#NoSpace")]
    #[case("#   ")]
    #[case("#")]
    #[case("plain # text")]
    fn non_headers(#[case] line: &str) {
        assert_eq!(Header::detect(line), None);
    }

    #[test]
    fn trailing_whitespace_excluded_from_content() {
        let line = "## Soil care  \t";
        let m = Header::detect(line).unwrap();
        assert_eq!(&line[m.content_start..m.content_end], "Soil care");
    }
}
