pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod source;

use blocks::{BlockBuilder, BlockNode, LineClassifier};
use source::lines_with_spans;

/// The block/inline tree for one piece of raw text.
#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

impl ParsedDoc {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Parses raw text into blocks with their inline content resolved.
///
/// Never fails: anything that is not a header, rule or list item ends up as
/// paragraph text.
pub fn parse_document(src: &str) -> ParsedDoc {
    let classifier = LineClassifier;
    let mut builder = BlockBuilder::new(src);

    for lr in lines_with_spans(src) {
        let lc = classifier.classify(src, &lr);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

#[cfg(test)]
mod tests;
