/// Debate comment link type.
///
/// A bracket tag made only of ASCII digits addresses a numbered comment on
/// the titled node rather than a nodetype.
pub struct Comment;

impl Comment {
    pub const ANCHOR_PREFIX: &'static str = "debatecomment_";

    /// True when `tag` is a non-empty run of ASCII digits.
    pub fn is_id(tag: &str) -> bool {
        !tag.is_empty() && tag.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn anchor(id: &str) -> String {
        format!("{}{id}", Self::ANCHOR_PREFIX)
    }
}
