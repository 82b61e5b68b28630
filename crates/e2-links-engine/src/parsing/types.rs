use serde::Serialize;

use crate::render::text::encode_component;

/// One unit of tokenizer output.
///
/// Concatenating [`Segment::source_text`] over a tokenized string
/// reproduces the input exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Literal text, including bracket text that did not classify as a link.
    Text { content: String },
    /// A recognized link.
    Link(Link),
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    /// The exact source text this segment was cut from.
    pub fn source_text(&self) -> &str {
        match self {
            Segment::Text { content } => content,
            Segment::Link(link) => &link.raw,
        }
    }

    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Segment::Link(link) => Some(link),
            Segment::Text { .. } => None,
        }
    }
}

/// Rebuilds the original input from its segments.
pub fn reconstruct(segments: &[Segment]) -> String {
    segments.iter().map(Segment::source_text).collect()
}

/// A classified bracket link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    #[serde(flatten)]
    pub kind: LinkKind,
    /// Text to show the user. Tag-stripped for everything but external links.
    pub display: String,
    /// Path or URL the link points to, without any anchor.
    pub href: String,
    /// The full bracket text as it appeared in the source.
    pub raw: String,
}

impl Link {
    pub fn new(kind: LinkKind, display: impl Into<String>, raw: impl Into<String>) -> Self {
        let href = kind.href();
        Self {
            kind,
            display: display.into(),
            href,
            raw: raw.into(),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self.kind, LinkKind::External { .. })
    }

    /// `href` followed by `#anchor` when the link carries one.
    pub fn href_with_anchor(&self) -> String {
        match self.kind.anchor() {
            Some(anchor) => format!("{}#{anchor}", self.href),
            None => self.href.clone(),
        }
    }
}

/// The link variants the classifier can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum LinkKind {
    /// `[https://url]` or `[https://url|display]`.
    External { url: String },
    /// `[title]` or `[title|display]`.
    Internal { title: String },
    /// `[title[nodetype]]`; `nodetype` is lowercased.
    Typed { title: String, nodetype: String },
    /// `[title[by author]]`.
    UserWriteup { title: String, author: String },
    /// `[title[123]]`, a numbered debate comment on `title`.
    Comment {
        title: String,
        #[serde(rename = "commentId")]
        comment_id: String,
        anchor: String,
    },
}

impl LinkKind {
    /// Builds the link path. Titles and authors are percent-encoded as URL
    /// components; external URLs are passed through untouched.
    pub fn href(&self) -> String {
        match self {
            LinkKind::External { url } => url.clone(),
            LinkKind::Internal { title } | LinkKind::Comment { title, .. } => {
                format!("/title/{}", encode_component(title))
            }
            LinkKind::Typed { title, nodetype } => {
                format!("/{nodetype}/{}", encode_component(title))
            }
            LinkKind::UserWriteup { title, author } => format!(
                "/user/{}/writeups/{}",
                encode_component(author),
                encode_component(title)
            ),
        }
    }

    /// Node title for every variant except external links.
    pub fn title(&self) -> Option<&str> {
        match self {
            LinkKind::External { .. } => None,
            LinkKind::Internal { title }
            | LinkKind::Typed { title, .. }
            | LinkKind::UserWriteup { title, .. }
            | LinkKind::Comment { title, .. } => Some(title),
        }
    }

    pub fn nodetype(&self) -> Option<&str> {
        match self {
            LinkKind::Typed { nodetype, .. } => Some(nodetype),
            _ => None,
        }
    }

    pub fn author(&self) -> Option<&str> {
        match self {
            LinkKind::UserWriteup { author, .. } => Some(author),
            _ => None,
        }
    }

    pub fn anchor(&self) -> Option<&str> {
        match self {
            LinkKind::Comment { anchor, .. } => Some(anchor),
            _ => None,
        }
    }

    /// Stable lowercase name, matching the serialized `variant` tag.
    pub fn name(&self) -> &'static str {
        match self {
            LinkKind::External { .. } => "external",
            LinkKind::Internal { .. } => "internal",
            LinkKind::Typed { .. } => "typed",
            LinkKind::UserWriteup { .. } => "user_writeup",
            LinkKind::Comment { .. } => "comment",
        }
    }
}
