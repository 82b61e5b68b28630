//! # Rendering
//!
//! - **`html`**: segment list to an HTML string for previews
//! - **`text`**: escaping, tag stripping, trimming and URL-component encoding

pub mod html;
pub mod text;

pub use html::{HtmlOptions, HtmlRenderer, to_html};
pub use text::{encode_component, escape_html, strip_html};
