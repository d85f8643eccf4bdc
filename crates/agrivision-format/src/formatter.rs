use crate::{
    options::{Dialect, FormatOptions},
    parsing::{ParsedDoc, parse_document},
    render::HtmlRenderer,
};

/// Turns loosely structured text from the backend into a safe HTML fragment.
///
/// A `Formatter` holds only its options; every call is independent, so one
/// instance can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn with_dialect(dialect: Dialect) -> Self {
        Self::new(dialect.options())
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Formats `text`, falling back to the configured paragraph when there is
    /// nothing to show.
    ///
    /// Never fails. Text that is not a header, rule or list is rendered as a
    /// paragraph.
    pub fn format(&self, text: Option<&str>) -> String {
        let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
            log::debug!("no text to format, using fallback");
            return HtmlRenderer::fallback(&self.options);
        };

        let doc = self.parse(text);
        if doc.is_empty() {
            log::debug!("text of {} bytes produced no blocks, using fallback", text.len());
            return HtmlRenderer::fallback(&self.options);
        }
        HtmlRenderer::new(text, &self.options).render(&doc)
    }

    /// Parses without rendering, for callers that present the tree some
    /// other way.
    pub fn parse(&self, text: &str) -> ParsedDoc {
        parse_document(text)
    }
}

/// Formats `text` with the default options.
pub fn format(text: Option<&str>) -> String {
    Formatter::default().format(text)
}
