use crate::parsing::{inline::parse_inline, source::Span};

use super::{
    classify::{LineClass, LineKind},
    types::{BlockKind, BlockNode, InlineText, ListKind},
};

#[derive(Debug)]
enum OpenBlock {
    None,
    Paragraph {
        start: usize,
        last_line_end: usize,
        lines: Vec<Span>,
    },
    List {
        kind: ListKind,
        start: usize,
        last_line_end: usize,
        items: Vec<Span>,
    },
}

/// Phase 2 of block parsing: folds classified lines into blocks.
///
/// At most one paragraph or list is open at a time. Blank lines, headers and
/// rules close it; a list item closes an open paragraph and a text line
/// closes an open list.
pub struct BlockBuilder<'a> {
    src: &'a str,
    open: OpenBlock,
    out: Vec<BlockNode>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            open: OpenBlock::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        match c.kind {
            LineKind::Blank => self.close(),
            LineKind::Rule => {
                self.close();
                self.out.push(BlockNode {
                    kind: BlockKind::Rule,
                    span: c.line,
                    content: vec![],
                });
            }
            LineKind::Header { level } => {
                self.close();
                let content = vec![self.inline(c.content)];
                self.out.push(BlockNode {
                    kind: BlockKind::Header { level },
                    span: c.line,
                    content,
                });
            }
            LineKind::ListItem { kind } => self.extend_list(kind, c),
            LineKind::Text => self.extend_paragraph(c),
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.close();
        self.out
    }

    fn extend_list(&mut self, kind: ListKind, c: &LineClass) {
        if matches!(self.open, OpenBlock::Paragraph { .. }) {
            self.close();
        }
        match &mut self.open {
            OpenBlock::List {
                last_line_end,
                items,
                ..
            } => {
                *last_line_end = c.line.end;
                items.push(c.content);
            }
            _ => {
                self.open = OpenBlock::List {
                    kind,
                    start: c.line.start,
                    last_line_end: c.line.end,
                    items: vec![c.content],
                };
            }
        }
    }

    fn extend_paragraph(&mut self, c: &LineClass) {
        if matches!(self.open, OpenBlock::List { .. }) {
            self.close();
        }
        match &mut self.open {
            OpenBlock::Paragraph {
                last_line_end,
                lines,
                ..
            } => {
                *last_line_end = c.line.end;
                lines.push(c.content);
            }
            _ => {
                self.open = OpenBlock::Paragraph {
                    start: c.line.start,
                    last_line_end: c.line.end,
                    lines: vec![c.content],
                };
            }
        }
    }

    fn close(&mut self) {
        match std::mem::replace(&mut self.open, OpenBlock::None) {
            OpenBlock::None => {}
            OpenBlock::Paragraph {
                start,
                last_line_end,
                lines,
            } => {
                let content = lines.into_iter().map(|sp| self.inline(sp)).collect();
                self.out.push(BlockNode {
                    kind: BlockKind::Paragraph,
                    span: Span::new(start, last_line_end),
                    content,
                });
            }
            OpenBlock::List {
                kind,
                start,
                last_line_end,
                items,
            } => {
                let content: Vec<_> = items
                    .into_iter()
                    .filter(|sp| !sp.is_empty())
                    .map(|sp| self.inline(sp))
                    .collect();
                if content.is_empty() {
                    log::debug!("dropping list at {start}..{last_line_end}: every item is empty");
                    return;
                }
                self.out.push(BlockNode {
                    kind: BlockKind::List { kind },
                    span: Span::new(start, last_line_end),
                    content,
                });
            }
        }
    }

    fn inline(&self, sp: Span) -> InlineText {
        InlineText {
            span: sp,
            nodes: parse_inline(sp.start, &self.src[sp.start..sp.end]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{
        blocks::LineClassifier,
        source::{lines_with_spans, slice},
    };

    fn build(src: &str) -> Vec<BlockNode> {
        let mut b = BlockBuilder::new(src);
        for lr in lines_with_spans(src) {
            b.push(&LineClassifier.classify(src, &lr));
        }
        b.finish()
    }

    fn kinds(blocks: &[BlockNode]) -> Vec<BlockKind> {
        blocks.iter().map(|b| b.kind).collect()
    }

    #[test]
    fn list_then_paragraph_after_blank_line() {
        let blocks = build("- a\n- b\n\nPlain text");
        assert_eq!(
            kinds(&blocks),
            vec![
                BlockKind::List {
                    kind: ListKind::Bulleted
                },
                BlockKind::Paragraph
            ]
        );
        assert_eq!(blocks[0].content.len(), 2);
    }

    #[test]
    fn text_line_interrupts_list_without_reordering() {
        let src = "1. one\nnote\n2. two";
        let blocks = build(src);
        assert_eq!(blocks.len(), 3);
        assert_eq!(slice(src, blocks[1].content[0].span), "note");
        assert_eq!(slice(src, blocks[2].content[0].span), "two");
    }

    #[test]
    fn mixed_markers_share_first_kind() {
        let blocks = build("2. first\n- second\n* third");
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].kind,
            BlockKind::List {
                kind: ListKind::Numbered
            }
        );
        assert_eq!(blocks[0].content.len(), 3);
    }

    #[test]
    fn paragraph_keeps_each_line() {
        let src = "line one\nline two\n";
        let blocks = build(src);
        assert_eq!(kinds(&blocks), vec![BlockKind::Paragraph]);
        assert_eq!(blocks[0].content.len(), 2);
        assert_eq!(blocks[0].span, Span::new(0, src.len()));
    }

    #[test]
    fn header_and_rule_close_open_blocks() {
        let blocks = build("intro\n# Title\n- x\n---\nend");
        assert_eq!(
            kinds(&blocks),
            vec![
                BlockKind::Paragraph,
                BlockKind::Header { level: 2 },
                BlockKind::List {
                    kind: ListKind::Bulleted
                },
                BlockKind::Rule,
                BlockKind::Paragraph,
            ]
        );
    }

    #[test]
    fn empty_items_are_omitted() {
        let src = "- \n- kept\n-  ";
        let blocks = build(src);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content.len(), 1);
        assert_eq!(slice(src, blocks[0].content[0].span), "kept");
    }

    #[test]
    fn list_of_only_empty_items_is_dropped() {
        assert!(build("- \n* ").is_empty());
    }

    #[test]
    fn blank_only_input_has_no_blocks() {
        assert!(build("\n \n\t\n").is_empty());
    }
}
