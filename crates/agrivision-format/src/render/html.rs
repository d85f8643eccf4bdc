use crate::{
    options::FormatOptions,
    parsing::{
        ParsedDoc,
        blocks::{BlockKind, BlockNode, InlineText, ListKind},
        inline::InlineNode,
        source::slice,
    },
};

use super::escape::{push_class, push_escaped};

/// Renders a parsed tree to an HTML fragment.
///
/// Structural tags come only from the tree; source text reaches the output
/// only through [`push_escaped`].
pub struct HtmlRenderer<'a> {
    src: &'a str,
    options: &'a FormatOptions,
    out: String,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(src: &'a str, options: &'a FormatOptions) -> Self {
        Self {
            src,
            options,
            out: String::with_capacity(src.len() + src.len() / 2),
        }
    }

    pub fn render(mut self, doc: &ParsedDoc) -> String {
        for block in &doc.blocks {
            self.block(block);
        }
        self.out
    }

    /// Renders a lone paragraph holding the escaped fallback text.
    pub fn fallback(options: &FormatOptions) -> String {
        let mut out = String::from("<p>");
        push_escaped(&mut out, &options.fallback, options.escape_quotes);
        out.push_str("</p>");
        out
    }

    fn block(&mut self, b: &BlockNode) {
        let options = self.options;
        let classes = &options.classes;
        match b.kind {
            BlockKind::Header { level } => {
                let class = classes
                    .header_prefix
                    .as_ref()
                    .map(|prefix| format!("{prefix}{level}"));
                self.open(&format!("h{level}"), class.as_deref());
                self.lines(&b.content, "");
                self.close(&format!("h{level}"));
            }
            BlockKind::Rule => {
                self.out.push_str("<hr");
                push_class(&mut self.out, classes.rule.as_deref());
                self.out.push('>');
            }
            BlockKind::List { kind } => {
                let item_class = match kind {
                    ListKind::Numbered => classes.numbered_item.as_deref(),
                    ListKind::Bulleted => None,
                };
                self.open("ul", classes.list.as_deref());
                for item in &b.content {
                    self.open("li", item_class);
                    self.inline(&item.nodes);
                    self.close("li");
                }
                self.close("ul");
            }
            BlockKind::Paragraph => {
                self.open("p", classes.paragraph.as_deref());
                self.lines(&b.content, "<br>");
                self.close("p");
            }
        }
    }

    fn lines(&mut self, lines: &[InlineText], sep: &str) {
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                self.out.push_str(sep);
            }
            self.inline(&line.nodes);
        }
    }

    fn inline(&mut self, nodes: &[InlineNode]) {
        for node in nodes {
            match node {
                InlineNode::Text(sp) => self.text(slice(self.src, *sp)),
                InlineNode::Strong { children, .. } => {
                    self.out.push_str("<strong>");
                    self.inline(children);
                    self.out.push_str("</strong>");
                }
                InlineNode::Emphasis { children, .. } => {
                    self.out.push_str("<em>");
                    self.inline(children);
                    self.out.push_str("</em>");
                }
            }
        }
    }

    fn text(&mut self, text: &str) {
        push_escaped(&mut self.out, text, self.options.escape_quotes);
    }

    fn open(&mut self, tag: &str, class: Option<&str>) {
        self.out.push('<');
        self.out.push_str(tag);
        push_class(&mut self.out, class);
        self.out.push('>');
    }

    fn close(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{options::Dialect, parsing::parse_document};
    use pretty_assertions::assert_eq;

    fn render(src: &str, dialect: Dialect) -> String {
        let options = dialect.options();
        HtmlRenderer::new(src, &options).render(&parse_document(src))
    }

    #[test]
    fn header_levels() {
        assert_eq!(
            render("# a\n## b\n### c", Dialect::Plain),
            "<h2>a</h2><h3>b</h3><h4>c</h4>"
        );
    }

    #[test]
    fn recommendation_classes() {
        assert_eq!(
            render("## Plan\n---\n1. Mix\nDone", Dialect::Recommendation),
            "<h3 class=\"fertilizer-h3\">Plan</h3>\
             <hr class=\"fertilizer-hr\">\
             <ul class=\"fertilizer-list\"><li class=\"numbered\">Mix</li></ul>\
             <p class=\"fertilizer-paragraph\">Done</p>"
        );
    }

    #[test]
    fn bulleted_items_have_no_class() {
        assert_eq!(
            render("- a\n- b", Dialect::Treatment),
            "<ul class=\"treatment-list\"><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn treatment_numbered_items_have_no_class() {
        assert_eq!(
            render("1. Prune\n2. Spray", Dialect::Treatment),
            "<ul class=\"treatment-list\"><li>Prune</li><li>Spray</li></ul>"
        );
    }

    #[test]
    fn paragraph_lines_joined_with_br() {
        assert_eq!(
            render("one\ntwo\nthree", Dialect::Plain),
            "<p>one<br>two<br>three</p>"
        );
    }

    #[test]
    fn emphasis_text_is_escaped() {
        assert_eq!(
            render("*a<b* and **c&d**", Dialect::Plain),
            "<p><em>a&lt;b</em> and <strong>c&amp;d</strong></p>"
        );
    }

    #[test]
    fn fallback_is_escaped() {
        let mut options = FormatOptions::default();
        options.fallback = "<none>".to_string();
        assert_eq!(HtmlRenderer::fallback(&options), "<p>&lt;none&gt;</p>");
    }
}
