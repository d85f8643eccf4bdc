use crate::parsing::source::Span;

use super::{
    cursor::Cursor,
    kinds::{Emphasis, Strong},
    types::InlineNode,
};

/// Which inline kinds may open at the current nesting level.
#[derive(Clone, Copy)]
struct Allow {
    strong: bool,
    emphasis: bool,
}

/// Parses one line of inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the source where `s` begins (for absolute span positions)
/// - `s`: The text to parse (a header, list item, or paragraph line)
///
/// # Precedence
/// Bold is resolved before italics. A `Strong` node is closed before its
/// inner text is examined, so an italic span can never straddle a bold
/// boundary. An italic span may still wrap one or more whole bold spans.
///
/// # Returns
/// Nodes covering the entire input. Unmatched delimiters stay in `Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    parse_with(
        base,
        s,
        Allow {
            strong: true,
            emphasis: true,
        },
    )
}

fn parse_with(base: usize, s: &str, allow: Allow) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        if allow.strong {
            if let Some(node) = try_parse_strong(&mut cur, allow) {
                flush_text(&mut out, text_start, node.span().start);
                text_start = node.span().end;
                out.push(node);
                continue;
            }
            if cur.starts_with(Strong::DELIM.as_bytes()) {
                // Unterminated: both stars stay literal.
                cur.bump_n(Strong::DELIM.len());
                continue;
            }
        }
        if allow.emphasis {
            if let Some(node) = try_parse_emphasis(&mut cur, allow) {
                flush_text(&mut out, text_start, node.span().start);
                text_start = node.span().end;
                out.push(node);
                continue;
            }
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Returns the local end (exclusive, past the closer) of a bold span opening
/// at local offset `open`, if one closes with non-empty text.
fn strong_end(s: &str, open: usize) -> Option<usize> {
    let inner_start = open + Strong::DELIM.len();
    let inner_end = inner_start + s.get(inner_start..)?.find(Strong::DELIM)?;
    (inner_end > inner_start).then_some(inner_end + Strong::DELIM.len())
}

/// Attempts to parse `**text**` at the current position.
///
/// The nearest closing `**` ends the span. Returns `None` without moving the
/// cursor when there is no closer or the inner text is empty.
fn try_parse_strong(cur: &mut Cursor<'_>, allow: Allow) -> Option<InlineNode> {
    if !cur.starts_with(Strong::DELIM.as_bytes()) {
        return None;
    }

    let open = cur.i;
    let end = strong_end(cur.s, open)?;
    let d = Strong::DELIM.len();

    let start = cur.pos();
    let children = parse_with(
        cur.base + open + d,
        &cur.s[open + d..end - d],
        Allow {
            strong: false,
            emphasis: allow.emphasis,
        },
    );
    cur.bump_n(end - open);

    Some(InlineNode::Strong {
        full: Span {
            start,
            end: cur.pos(),
        },
        children,
    })
}

/// Attempts to parse `*text*` at the current position.
///
/// Requires that the opening `*` is not part of a longer run, that the text
/// hugs both delimiters, and that the closing `*` is not followed by
/// another `*`. Whole `**bold**` spans inside the text are stepped over when
/// bold may nest here; a closer right after one of them needs no hugging
/// character. Returns `None` without moving the cursor otherwise.
fn try_parse_emphasis(cur: &mut Cursor<'_>, allow: Allow) -> Option<InlineNode> {
    if cur.peek() != Some(Emphasis::DELIM) || cur.prev() == Some(Emphasis::DELIM) {
        return None;
    }
    if !cur.char_at(1).is_some_and(Emphasis::hugs) {
        return None;
    }

    let s = cur.s;
    let bytes = s.as_bytes();
    let body = cur.i + 1;
    let mut from = body;
    let mut last_strong_end = None;
    let close = loop {
        let k = from + s[from..].find([Emphasis::DELIM as char, '\n'])?;
        if bytes[k] != Emphasis::DELIM {
            return None;
        }
        if bytes.get(k + 1) != Some(&Emphasis::DELIM) {
            break k;
        }
        if !allow.strong {
            return None;
        }
        let end = strong_end(s, k)?;
        last_strong_end = Some(end);
        from = end;
    };

    let after_strong = last_strong_end == Some(close);
    if !after_strong && !s[body..close].chars().next_back().is_some_and(Emphasis::hugs) {
        return None;
    }
    if bytes.get(close + 1) == Some(&Emphasis::DELIM) {
        return None;
    }

    let open = cur.i;
    let start = cur.pos();
    let children = parse_with(
        cur.base + body,
        &s[body..close],
        Allow {
            strong: allow.strong,
            emphasis: false,
        },
    );
    cur.bump_n(close + 1 - open);

    Some(InlineNode::Emphasis {
        full: Span {
            start,
            end: cur.pos(),
        },
        children,
    })
}
