//! # Link Content Classification
//!
//! Decides what a single bracket's inner content links to. Rules run in a
//! fixed order and the first one that produces a verdict wins:
//!
//! 1. external URL (`https://url|display`)
//! 2. writeup by author (`title[by author]|display`)
//! 3. bracketed tag (`title[nodetype]`, `title[123]`)
//! 4. pipe with bracketed tag (`display|title[tag]`)
//! 5. pipelink (`title|display`)
//! 6. bare title
//!
//! Several patterns overlap, so reordering the rules changes results.

use std::sync::LazyLock;

use regex::Regex;

use super::{
    kinds::{Bracket, Comment, External, Writeup},
    types::{Link, LinkKind},
};
use crate::render::text::{strip_html, trim};

// Display text stops at any line terminator, not only `\n`.
static EXTERNAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(https?://[^|\[<>"]+)\s*(?:\|\s*([^\n\r\u{2028}\u{2029}]*))?$"#).unwrap()
});

static BY_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([^\[\]|]+?)\s*\[\s*by\s+(\S[^\[\]]*?)\s*\](?:\|([^\[\]]+))?$").unwrap()
});

static BRACKET_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\[\]|]+?)\s*\[\s*([^\[\]]+?)\s*\]$").unwrap());

static PIPE_BRACKET_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^|\[\]]+)\|([^\[\]]+)\[([^\]|]+)\]$").unwrap());

/// Outcome of a single classification rule.
#[derive(Debug)]
enum Verdict {
    Link { kind: LinkKind, display: String },
    /// The content is recognizably malformed; keep the bracket as text.
    Literal,
}

type Rule = fn(&str, &str) -> Option<Verdict>;

const RULES: [(&str, Rule); 6] = [
    ("external", external),
    ("writeup_by_author", writeup_by_author),
    ("bracket_tag", bracket_tag),
    ("pipe_bracket_tag", pipe_bracket_tag),
    ("pipelink", pipelink),
    ("bare_title", bare_title),
];

/// Classifies the content of one bracket expression.
///
/// `content` is the text strictly inside the outer brackets and `raw` the
/// full bracket text including them. Returns `None` when the content is
/// blank, strips down to nothing, or is rejected; the caller keeps `raw` as
/// plain text in that case.
pub fn classify(content: &str, raw: &str) -> Option<Link> {
    let content = trim(content);
    if content.is_empty() {
        return None;
    }

    for (name, rule) in RULES {
        let Some(verdict) = rule(content, raw) else {
            continue;
        };
        log::trace!("{raw:?} matched rule {name}");
        return match verdict {
            Verdict::Link { kind, display } => Some(Link::new(kind, display, raw)),
            Verdict::Literal => None,
        };
    }
    None
}

/// Strips tags and trims surrounding whitespace.
fn clean(s: &str) -> String {
    trim(&strip_html(s)).to_string()
}

fn link(kind: LinkKind, display: String) -> Option<Verdict> {
    Some(Verdict::Link { kind, display })
}

/// Typed, comment or writeup link for a `title[tag]` pair, by tag shape.
fn tagged(title: String, tag: &str) -> LinkKind {
    if Comment::is_id(tag) {
        LinkKind::Comment {
            anchor: Comment::anchor(tag),
            comment_id: tag.to_string(),
            title,
        }
    } else {
        LinkKind::Typed {
            title,
            nodetype: tag.to_lowercase(),
        }
    }
}

fn external(content: &str, raw: &str) -> Option<Verdict> {
    let caps = EXTERNAL.captures(content)?;
    let url = trim(&caps[1]).to_string();
    let display = External::display(&url, caps.get(2).map(|m| m.as_str()), raw);
    link(LinkKind::External { url }, display)
}

fn writeup_by_author(content: &str, _raw: &str) -> Option<Verdict> {
    let caps = BY_AUTHOR.captures(content)?;
    let title = clean(&caps[1]);
    let author = clean(&caps[2]);
    if title.is_empty() || author.is_empty() {
        return None;
    }

    let display = caps
        .get(3)
        .map(|m| clean(m.as_str()))
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| title.clone());
    link(LinkKind::UserWriteup { title, author }, display)
}

fn bracket_tag(content: &str, _raw: &str) -> Option<Verdict> {
    let caps = BRACKET_TAG.captures(content)?;
    let title = clean(&caps[1]);
    let tag = clean(&caps[2]);
    if title.is_empty() || tag.is_empty() {
        return None;
    }

    if Writeup::is_bare_keyword(&tag) {
        return Some(Verdict::Literal);
    }

    let display = title.clone();
    link(tagged(title, &tag), display)
}

fn pipe_bracket_tag(content: &str, _raw: &str) -> Option<Verdict> {
    let caps = PIPE_BRACKET_TAG.captures(content)?;
    let display = clean(&caps[1]);
    let title = clean(&caps[2]);
    let tag = clean(&caps[3]);
    if display.is_empty() || title.is_empty() || tag.is_empty() {
        return None;
    }

    if let Some(author) = Writeup::author(&tag) {
        let author = author.to_string();
        return link(LinkKind::UserWriteup { title, author }, display);
    }
    link(tagged(title, &tag), display)
}

fn pipelink(content: &str, _raw: &str) -> Option<Verdict> {
    if !content.contains(Bracket::PIPE) {
        return None;
    }
    // Only the first two pieces count; anything after a second pipe is dropped.
    let mut parts = content.split(Bracket::PIPE);
    let title = clean(parts.next().unwrap_or_default());
    let display = clean(parts.next().unwrap_or_default());
    if title.is_empty() {
        return None;
    }

    let display = if display.is_empty() {
        title.clone()
    } else {
        display
    };
    link(LinkKind::Internal { title }, display)
}

fn bare_title(content: &str, _raw: &str) -> Option<Verdict> {
    let title = clean(content);
    if title.is_empty() {
        return None;
    }
    let display = title.clone();
    link(LinkKind::Internal { title }, display)
}
