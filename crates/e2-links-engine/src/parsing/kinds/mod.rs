//! # Link Kinds
//!
//! Types that own the delimiters and keywords of the bracket-link syntax.
//!
//! ## Types
//!
//! - **`Bracket`**: `OPEN = b'['`, `CLOSE = b']'`, `PIPE = '|'`
//! - **`External`**: the `[link]` fallback for an empty pipe
//! - **`Comment`**: numeric comment ids and the debate anchor prefix
//! - **`Writeup`**: the `by <author>` keyword
//!
//! The scanner and classifier read these constants; they never hardcode
//! `[`, `]` or `debatecomment_` themselves.

pub mod bracket;
pub mod comment;
pub mod external;
pub mod writeup;

pub use bracket::Bracket;
pub use comment::Comment;
pub use external::External;
pub use writeup::Writeup;
