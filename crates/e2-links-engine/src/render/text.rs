//! String helpers shared by the classifier and the HTML renderer.

use std::borrow::Cow;
use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;

/// Bytes left unescaped by a URL-component encoder: ASCII alphanumerics
/// plus `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Escapes `&`, `<`, `>`, `"` and `'` for use in HTML text or attributes.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    let escaped = html_escape::encode_double_quoted_attribute(s);
    if escaped.contains('\'') {
        Cow::Owned(escaped.replace('\'', "&#039;"))
    } else {
        escaped
    }
}

/// Removes anything shaped like a tag (`<...>`).
///
/// No tag semantics: `<b>x</b>` becomes `x`, and a `<` that is never closed
/// is kept as-is.
pub fn strip_html(s: &str) -> Cow<'_, str> {
    TAG.replace_all(s, "")
}

/// Trims whitespace the way browser `String.prototype.trim` does.
///
/// Unlike [`str::trim`] this also strips the byte-order mark `U+FEFF` and
/// keeps `U+0085`.
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

/// Percent-encodes `s` as a single URL path component.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}
