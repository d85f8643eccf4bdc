use crate::parsing::source::{LineRef, Span};

use super::{
    kinds::{Header, ListItem, Rule},
    types::ListKind,
};

/// What a single line is, judged without looking at its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only.
    Blank,
    /// `---`.
    Rule,
    /// A header with its HTML level.
    Header { level: u8 },
    /// A list item. Its content is empty when only whitespace follows the
    /// marker, so `- ` is an empty item that the builder drops. The marker is
    /// matched before trailing whitespace is trimmed; trimming first would
    /// turn `- ` into the text line `-`.
    ListItem { kind: ListKind },
    /// Anything else.
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, Copy)]
pub struct LineClass {
    /// Full byte span of this line in the source.
    pub line: Span,
    pub kind: LineKind,
    /// Byte span of the line's inline text after stripping markers and
    /// surrounding whitespace.
    pub content: Span,
}

/// Classifies individual lines for the block parsing phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence: blank, rule, header, list item, text.
    pub fn classify(&self, src: &str, lr: &LineRef<'_>) -> LineClass {
        let body = lr.text.trim_end_matches(['\r', '\n']);
        let body_span = Span::new(lr.span.start, lr.span.start + body.len());
        let trimmed = body_span.trimmed(src);
        let class = |kind, content| LineClass {
            line: lr.span,
            kind,
            content,
        };

        if trimmed.is_empty() {
            return class(LineKind::Blank, trimmed);
        }

        let text = &src[trimmed.start..trimmed.end];
        if Rule::matches(text) {
            return class(LineKind::Rule, Span::new(trimmed.end, trimmed.end));
        }

        if let Some(h) = Header::detect(text) {
            let content = Span::new(trimmed.start + h.content_start, trimmed.start + h.content_end);
            return class(LineKind::Header { level: h.level }, content);
        }

        // Markers are matched against the untrimmed tail so that `- ` keeps
        // its whitespace and reads as an empty item rather than as text.
        let lead = trimmed.start;
        let tail = &src[lead..body_span.end];
        if let Some(m) = ListItem::detect(tail) {
            let content = Span::new(lead + m.content_start, body_span.end).trimmed(src);
            return class(LineKind::ListItem { kind: m.kind }, content);
        }

        class(LineKind::Text, trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::source::lines_with_spans;
    use rstest::rstest;

    fn classify_one(src: &str) -> (LineKind, String) {
        let lr = lines_with_spans(src).next().unwrap();
        let c = LineClassifier.classify(src, &lr);
        (c.kind, src[c.content.start..c.content.end].to_string())
    }

    #[rstest]
    #[case("   \t", LineKind::Blank, "")]
    #[case("  ---  \n", LineKind::Rule, "")]
    #[case("## Nitrogen\n", LineKind::Header { level: 3 }, "Nitrogen")]
    #[case("  - Water daily ", LineKind::ListItem { kind: ListKind::Bulleted }, "Water daily")]
    #[case("3. Apply compost\r\n", LineKind::ListItem { kind: ListKind::Numbered }, "Apply compost")]
    #[case("- ", LineKind::ListItem { kind: ListKind::Bulleted }, "")]
    #[case("-", LineKind::Text, "-")]
    #[case("1.", LineKind::Text, "1.")]
    #[case("  Plain words  ", LineKind::Text, "Plain words")]
    #[case("#### Four marks", LineKind::Text, "#### Four marks")]
    fn classifies_lines(#[case] src: &str, #[case] kind: LineKind, #[case] content: &str) {
        assert_eq!(classify_one(src), (kind, content.to_string()));
    }

    #[test]
    fn spans_are_absolute() {
        let src = "first\n  - second";
        let lr = lines_with_spans(src).nth(1).unwrap();
        let c = LineClassifier.classify(src, &lr);
        assert_eq!(c.line, Span::new(6, 16));
        assert_eq!(c.content, Span::new(10, 16));
    }
}
