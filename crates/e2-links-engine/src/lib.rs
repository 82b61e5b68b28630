pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::{Link, LinkKind, Segment, classify, reconstruct, tokenize};
pub use render::{HtmlOptions, HtmlRenderer, escape_html, strip_html, to_html};
