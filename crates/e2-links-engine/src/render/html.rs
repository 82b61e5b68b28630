use serde::{Deserialize, Serialize};

use super::text::escape_html;
use crate::parsing::{Link, LinkKind, Segment, tokenize};

/// Attribute values for generated anchors. Defaults match the markup the
/// site's stylesheets and link handlers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// `class` on node links (internal, typed, writeup, comment).
    pub internal_class: String,
    /// `class` on external links.
    pub external_class: String,
    /// `rel` on external links.
    pub external_rel: String,
    /// `target` on external links.
    pub external_target: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            internal_class: "e2-link".to_string(),
            external_class: "externalLink".to_string(),
            external_rel: "nofollow".to_string(),
            external_target: "_blank".to_string(),
        }
    }
}

/// Renders segments as HTML anchors.
///
/// Text segments are emitted verbatim, unescaped. Only link display text is
/// escaped; callers sanitize the surrounding text themselves.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: HtmlOptions,
}

impl HtmlRenderer {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Tokenizes `text` and renders the result.
    pub fn render_str(&self, text: &str) -> String {
        self.render(&tokenize(text))
    }

    pub fn render(&self, segments: &[Segment]) -> String {
        let mut out = String::new();
        for seg in segments {
            match seg {
                Segment::Text { content } => out.push_str(content),
                Segment::Link(link) => self.push_link(&mut out, link),
            }
        }
        out
    }

    fn push_link(&self, out: &mut String, link: &Link) {
        let display = escape_html(&link.display);
        let o = &self.options;
        match &link.kind {
            // url never contains quotes or angle brackets
            LinkKind::External { url } => out.push_str(&format!(
                r#"<a href="{url}" rel="{}" class="{}" target="{}">{display}</a>"#,
                escape_html(&o.external_rel),
                escape_html(&o.external_class),
                escape_html(&o.external_target),
            )),
            LinkKind::Internal { .. }
            | LinkKind::Typed { .. }
            | LinkKind::UserWriteup { .. }
            | LinkKind::Comment { .. } => out.push_str(&format!(
                r#"<a href="{}" class="{}">{display}</a>"#,
                link.href_with_anchor(),
                escape_html(&o.internal_class),
            )),
        }
    }
}

/// Renders `text` with default options.
pub fn to_html(text: &str) -> String {
    HtmlRenderer::default().render_str(text)
}
