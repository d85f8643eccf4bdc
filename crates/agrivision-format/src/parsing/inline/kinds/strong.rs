/// Bold span type with owned delimiter constant.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static str = "**";
}
