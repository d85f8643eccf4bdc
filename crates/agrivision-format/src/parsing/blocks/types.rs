use crate::parsing::{inline::InlineNode, source::Span};

/// Whether a list was opened by a bullet or a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-`, `*` or `•` markers.
    Bulleted,
    /// `N.` markers.
    Numbered,
}

/// The kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// A `#` to `###` header, stored as its HTML level (2 to 4).
    Header { level: u8 },
    /// A `---` horizontal rule. Has no content.
    Rule,
    /// A run of list items. Mixed runs take the kind of the first item.
    List { kind: ListKind },
    /// Consecutive plain lines.
    Paragraph,
}

/// One line of inline content: a header's text, a list item, or a
/// paragraph line.
#[derive(Debug, Clone)]
pub struct InlineText {
    /// Byte span of the text after marker stripping and trimming.
    pub span: Span,
    /// Inline nodes covering `span` exactly.
    pub nodes: Vec<InlineNode>,
}

/// A parsed block node with its kind, span and inline content.
#[derive(Debug, Clone)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// Full byte span of the block, from its first line to its last.
    pub span: Span,
    /// Content lines in source order. Empty for rules; one entry for headers;
    /// one per item for lists; one per line for paragraphs.
    pub content: Vec<InlineText>,
}
