//! Rich-text accumulation: lexing, boundary classification, and span
//! building.
//!
//! The pipeline runs in three steps. [`segments`] splits an appended chunk
//! into alternating text and emoji runs. [`classify`] tags the whitespace
//! inside a text run as word, sentence, or line boundaries. [`RichText`]
//! consumes both to grow its span sequence, merging soft same-face
//! continuations into the previous span and splitting at hard breaks.
//!
//! # Examples
//!
//! ```
//! use emojitext::{FontFace, FontId, RichText, TextAlign};
//!
//! let face = FontFace::new(FontId(0), 12.0);
//! let (text, emojis) = RichText::new()
//!     .add(face, "Hello \u{1F30D} world")
//!     .to_text(200.0, 0.0, TextAlign::Left, TextAlign::Top, 0.0, 0.0);
//! let text = text.expect("non-empty layout");
//! assert_eq!(emojis.len(), 1);
//! assert_eq!(text.lines.len(), 1);
//! ```

mod boundary;
mod lexer;
mod rich;
mod span;

pub use boundary::{Boundary, BoundaryKind, classify};
pub use lexer::{Segment, Segments, is_emoji_char, is_emoji_cluster, segments};
pub use rich::{Emoji, RichText, emoji_text_box};
pub use span::TextSpan;
