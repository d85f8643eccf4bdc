use serde::Serialize;

use crate::parsing::{
    ParsedDoc,
    blocks::BlockKind,
    inline::InlineNode,
    source::{preview, slice},
};

/// Snapshot of a parsed document for testing.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Snap {
    /// All blocks in the document.
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct BlockSnap {
    /// Block kind as a string (e.g., "Header(3)", "List(Numbered)").
    pub kind: String,
    /// Byte span as (start, end) tuple.
    pub span: (usize, usize),
    /// Preview of block text (truncated for readability).
    pub text: String,
    /// Inline nodes, one vector per content line.
    pub lines: Vec<Vec<InlineSnap>>,
}

/// Snapshot of a single inline node.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct InlineSnap {
    /// Node kind as a string ("Text", "Strong", "Emphasis").
    pub kind: String,
    /// Byte span as (start, end) tuple.
    pub span: (usize, usize),
    /// Preview of node text (truncated for readability).
    pub text: String,
    /// Nested nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<InlineSnap>,
}

fn kind_label(kind: BlockKind) -> String {
    match kind {
        BlockKind::Header { level } => format!("Header({level})"),
        BlockKind::Rule => "Rule".to_string(),
        BlockKind::List { kind } => format!("List({kind:?})"),
        BlockKind::Paragraph => "Paragraph".to_string(),
    }
}

fn inline_snap(src: &str, node: &InlineNode) -> InlineSnap {
    let (kind, children): (&str, &[InlineNode]) = match node {
        InlineNode::Text(_) => ("Text", &[]),
        InlineNode::Strong { children, .. } => ("Strong", children),
        InlineNode::Emphasis { children, .. } => ("Emphasis", children),
    };
    let sp = node.span();
    InlineSnap {
        kind: kind.into(),
        span: (sp.start, sp.end),
        text: preview(src, sp, 60),
        children: children.iter().map(|c| inline_snap(src, c)).collect(),
    }
}

/// Converts a parsed tree into a serializable snapshot.
pub fn normalize(src: &str, doc: &ParsedDoc) -> Snap {
    let blocks = doc
        .blocks
        .iter()
        .map(|b| BlockSnap {
            kind: kind_label(b.kind),
            span: (b.span.start, b.span.end),
            text: preview(src, b.span, 80),
            lines: b
                .content
                .iter()
                .map(|line| line.nodes.iter().map(|n| inline_snap(src, n)).collect())
                .collect(),
        })
        .collect();

    Snap { blocks }
}

fn outline_nodes(src: &str, nodes: &[InlineNode], out: &mut String) {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match node {
            InlineNode::Text(sp) => out.push_str(&format!("{:?}", slice(src, *sp))),
            InlineNode::Strong { children, .. } => {
                out.push_str("Strong(");
                outline_nodes(src, children, out);
                out.push(')');
            }
            InlineNode::Emphasis { children, .. } => {
                out.push_str("Em(");
                outline_nodes(src, children, out);
                out.push(')');
            }
        }
    }
}

/// Renders a parsed tree as one line per block, for inline snapshots.
///
/// ```text
/// Header(4): "Title"
/// List(Bulleted): "a" | Strong("b")
/// ```
pub fn outline(src: &str, doc: &ParsedDoc) -> String {
    doc.blocks
        .iter()
        .map(|b| {
            let mut out = kind_label(b.kind);
            for (i, line) in b.content.iter().enumerate() {
                out.push_str(if i == 0 { ": " } else { " | " });
                outline_nodes(src, &line.nodes, &mut out);
            }
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}
