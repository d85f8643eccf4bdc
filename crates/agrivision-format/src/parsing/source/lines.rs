use super::span::Span;

/// A reference to a single line of the source with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of this line in the source (includes newline if present).
    pub span: Span,
    /// The line text, borrowed from the source.
    pub text: &'a str,
}

/// Returns an iterator over lines with their byte spans.
///
/// Newline characters are kept on each line so that spans stay contiguous
/// and cover the whole input.
pub fn lines_with_spans(src: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    src.split_inclusive('\n').map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line,
        }
    })
}
