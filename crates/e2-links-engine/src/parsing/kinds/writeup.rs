use std::sync::LazyLock;

use regex::Regex;

/// Writeup-by-author link type with the owned `by` keyword.
pub struct Writeup;

static BARE_BY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^by\s*$").unwrap());

impl Writeup {
    pub const BY_PREFIX: &'static str = "by ";

    /// Returns the author from a `by <author>` tag, trimmed.
    ///
    /// The keyword is matched ASCII case-insensitively and must be followed
    /// by a literal space. Returns `None` if the author part is empty.
    pub fn author(tag: &str) -> Option<&str> {
        let prefix = tag.get(..Self::BY_PREFIX.len())?;
        if !prefix.eq_ignore_ascii_case(Self::BY_PREFIX) {
            return None;
        }
        let author = crate::render::text::trim(&tag[Self::BY_PREFIX.len()..]);
        (!author.is_empty()).then_some(author)
    }

    /// True for a tag that is only the keyword, such as the `by` in `[title[by ]]`.
    pub fn is_bare_keyword(tag: &str) -> bool {
        BARE_BY.is_match(tag)
    }
}
