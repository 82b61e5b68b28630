//! # Bracket Link Parsing
//!
//! Turns a string with E2 `[bracket]` links into an ordered list of
//! [`Segment`]s.
//!
//! ## Modules
//!
//! - **`scanner`**: finds bracket expressions with a bounded-depth cursor scan
//! - **`classify`**: decides which link variant one bracket holds, if any
//! - **`kinds`**: owned delimiters and keywords (`[`, `]`, `|`, `by`, ...)
//! - **`types`**: `Segment`, `Link` and `LinkKind`
//! - **`cursor`**, **`span`**: scanning primitives
//!
//! ## Losslessness
//!
//! Bracket text that does not classify is kept as a `Text` segment, so the
//! segments always concatenate back to the input.

pub mod classify;
pub mod cursor;
pub mod kinds;
pub mod scanner;
pub mod span;
pub mod types;

#[cfg(test)]
mod tests;

pub use classify::classify;
pub use scanner::{BracketMatch, scan_brackets};
pub use span::Span;
pub use types::{Link, LinkKind, Segment, reconstruct};

/// Splits `text` into text and link segments.
pub fn tokenize(text: &str) -> Vec<Segment> {
    let mut out = vec![];
    let mut text_start = 0;

    fn flush_text(out: &mut Vec<Segment>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(Segment::text(&s[start..end]));
        }
    }

    for m in scan_brackets(text) {
        flush_text(&mut out, text, text_start, m.full.start);

        let raw = m.full.slice(text);
        match classify(m.inner.slice(text), raw) {
            Some(link) => out.push(Segment::Link(link)),
            None => {
                log::debug!("keeping {raw:?} at byte {} as text", m.full.start);
                out.push(Segment::text(raw));
            }
        }
        text_start = m.full.end;
    }

    flush_text(&mut out, text, text_start, text.len());
    out
}
