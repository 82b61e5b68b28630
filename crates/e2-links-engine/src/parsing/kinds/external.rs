/// External link type with the owned empty-display fallback.
pub struct External;

impl External {
    /// Display text used when a pipe is present but nothing follows it.
    pub const EMPTY_DISPLAY: &'static str = "[link]";

    /// Chooses the display text for an external link.
    ///
    /// The pipe check runs against the raw bracket text, not the captured
    /// display, so `[url|]` and `[url| ]` both fall back to [`Self::EMPTY_DISPLAY`].
    pub fn display(url: &str, after_pipe: Option<&str>, raw: &str) -> String {
        if raw.contains(super::Bracket::PIPE) {
            match after_pipe.map(crate::render::text::trim) {
                Some(d) if !d.is_empty() => d.to_string(),
                _ => Self::EMPTY_DISPLAY.to_string(),
            }
        } else {
            url.to_string()
        }
    }
}
