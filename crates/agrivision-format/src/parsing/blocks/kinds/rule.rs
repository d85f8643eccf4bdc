/// Horizontal rule block type with owned delimiter constant.
pub struct Rule;

impl Rule {
    /// The only spelling recognised as a rule, after trimming.
    pub const MARKER: &'static str = "---";

    pub fn matches(trimmed: &str) -> bool {
        trimmed == Self::MARKER
    }
}
