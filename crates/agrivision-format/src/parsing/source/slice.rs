use super::span::Span;

/// Borrows the text for a span from the source.
pub fn slice(src: &str, sp: Span) -> &str {
    &src[sp.start..sp.end]
}

/// Extracts text for a span, truncating to at most `max` bytes with a "..."
/// suffix if needed. The cut is moved back to a char boundary.
///
/// Used for human-readable snapshot output.
pub fn preview(src: &str, sp: Span, max: usize) -> String {
    let s = slice(src, sp);
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &s[..cut])
}
