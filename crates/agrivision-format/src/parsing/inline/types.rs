use crate::parsing::source::Span;

/// A parsed inline node with byte spans into the source.
///
/// Text is never copied into the tree; the renderer slices and escapes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any emphasis span.
    Text(Span),
    /// `**bold**`. Children are `Text` and `Emphasis` nodes covering the
    /// inner span. Inside an italic span the children are `Text` only.
    Strong {
        /// Full span including both `**` delimiters.
        full: Span,
        children: Vec<InlineNode>,
    },
    /// `*italic*`. Children are `Text` and whole `Strong` nodes covering
    /// the inner span.
    Emphasis {
        /// Full span including both `*` delimiters.
        full: Span,
        children: Vec<InlineNode>,
    },
}

impl InlineNode {
    /// Returns the full span of any node variant.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::Strong { full, .. } | InlineNode::Emphasis { full, .. } => *full,
        }
    }
}
