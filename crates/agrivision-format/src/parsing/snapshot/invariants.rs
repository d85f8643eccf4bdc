use crate::parsing::{
    blocks::{BlockKind, BlockNode},
    inline::{InlineNode, kinds::Strong},
    source::Span,
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - All block spans are within source bounds and in source order
/// - Content spans are contained within their block spans
/// - Inline nodes tile their content span with no gaps or overlaps
/// - Rules have no content and headers have exactly one line
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(src: &str, blocks: &[BlockNode]) {
    let n = src.len();
    let mut prev_end = 0usize;
    for b in blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (source len: {})",
            b.span,
            n
        );
        assert!(
            b.span.start >= prev_end,
            "blocks out of order: {:?} starts before {}",
            b.span,
            prev_end
        );
        prev_end = b.span.end;

        match b.kind {
            BlockKind::Rule => assert!(b.content.is_empty(), "rule with content"),
            BlockKind::Header { level } => {
                assert!((2..=4).contains(&level), "header level {level}");
                assert_eq!(b.content.len(), 1, "header must have one line");
            }
            BlockKind::List { .. } | BlockKind::Paragraph => {
                assert!(!b.content.is_empty(), "empty {:?}", b.kind)
            }
        }

        for line in &b.content {
            assert!(
                b.span.contains(line.span),
                "content span not contained in block span: content {:?}, block {:?}",
                line.span,
                b.span
            );
            check_tiling(line.span, &line.nodes);
        }
    }
}

fn check_tiling(parent: Span, nodes: &[InlineNode]) {
    let mut at = parent.start;
    for node in nodes {
        let sp = node.span();
        assert_eq!(sp.start, at, "gap or overlap before {node:?} in {parent:?}");
        match node {
            InlineNode::Strong { full, children } => {
                let d = Strong::DELIM.len();
                check_tiling(Span::new(full.start + d, full.end - d), children);
            }
            InlineNode::Emphasis { full, children } => {
                check_tiling(Span::new(full.start + 1, full.end - 1), children);
            }
            InlineNode::Text(_) => {}
        }
        at = sp.end;
    }
    assert_eq!(at, parent.end, "inline nodes stop short of {parent:?}");
}
