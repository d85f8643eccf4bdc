/// Italic span type with owned delimiter constant.
///
/// The delimiter must hug its text: `*word*` is emphasis, `2 * 3 * 4` is
/// literal.
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: u8 = b'*';

    /// Whether `c` may sit directly inside a delimiter.
    pub fn hugs(c: char) -> bool {
        !c.is_whitespace() && c != Self::DELIM as char
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_hug_delimiter() {
        assert!(Emphasis::hugs('a'));
        assert!(Emphasis::hugs('•'));
    }

    #[test]
    fn whitespace_and_stars_do_not_hug() {
        assert!(!Emphasis::hugs(' '));
        assert!(!Emphasis::hugs('\t'));
        assert!(!Emphasis::hugs('*'));
    }
}
