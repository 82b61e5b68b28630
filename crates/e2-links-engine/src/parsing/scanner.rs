use super::{cursor::Cursor, kinds::Bracket, span::Span};

/// One bracket expression found by [`scan_brackets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketMatch {
    /// Full span including the outer `[` and `]`.
    pub full: Span,
    /// Span strictly inside the outer brackets.
    pub inner: Span,
}

/// Finds every bracket expression in `s`, left to right, without overlap.
///
/// An expression is `[` plain* ( `[` plain* `]` plain* )? `]` where plain is
/// any byte but a bracket, so at most one nested pair is accepted. A `[`
/// that does not start a complete expression is left for the caller as text
/// and scanning resumes at the next byte.
///
/// A failed attempt gives up at the fourth bracket it meets at the latest, so
/// each byte is looked at a bounded number of times and the scan is linear.
pub fn scan_brackets(s: &str) -> Vec<BracketMatch> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];

    while !cur.eof() {
        if let Some(m) = try_parse_bracket(&mut cur) {
            out.push(m);
            continue;
        }
        cur.bump();
    }

    out
}

/// Attempts to parse a bracket expression at the current position.
///
/// Returns `None` if not at `[` or if the expression isn't closed at the
/// allowed depth. On failure, cursor position is restored.
fn try_parse_bracket(cur: &mut Cursor<'_>) -> Option<BracketMatch> {
    if cur.peek() != Some(Bracket::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // [
    let inner_start = cur.pos();
    cur.bump_while(Bracket::is_plain);

    if cur.eat(Bracket::OPEN) {
        // The single permitted nested pair.
        cur.bump_while(Bracket::is_plain);
        if !cur.eat(Bracket::CLOSE) {
            *cur = saved;
            return None;
        }
        cur.bump_while(Bracket::is_plain);
    }

    if cur.peek() != Some(Bracket::CLOSE) {
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump(); // ]

    Some(BracketMatch {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}
