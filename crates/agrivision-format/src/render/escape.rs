use html_escape::{encode_double_quoted_attribute, encode_text};

/// Appends `text` to `out` with HTML-sensitive characters escaped.
///
/// `&`, `<` and `>` are always escaped; `"` only when `quotes` is set.
pub fn push_escaped(out: &mut String, text: &str, quotes: bool) {
    if quotes {
        out.push_str(&encode_double_quoted_attribute(text));
    } else {
        out.push_str(&encode_text(text));
    }
}

/// Appends a `class="..."` attribute when a class is configured.
pub fn push_class(out: &mut String, class: Option<&str>) {
    if let Some(class) = class {
        out.push_str(" class=\"");
        push_escaped(out, class, true);
        out.push('"');
    }
}
