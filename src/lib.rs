//! emojitext - rich text with separately rendered emoji
//!
//! Builds a rich text from styled chunks, fits it into a box, and extracts
//! the pictographic clusters as standalone placement records so they can be
//! drawn by an image renderer while the surrounding text goes through the
//! regular glyph pipeline.
//!
//! ```
//! use emojitext::{FontFace, FontId, RichText, TextAlign};
//!
//! let face = FontFace::new(FontId(0), 14.0);
//! let (text, emojis) = RichText::new()
//!     .add(face, "Fire drill \u{1F525} today. ")
//!     .add(face, "Stay calm")
//!     .to_text(300.0, 0.0, TextAlign::Left, TextAlign::Top, 0.0, 0.0);
//!
//! let text = text.expect("non-empty layout");
//! // The emoji is reported once, and its span is blanked in the layout.
//! assert_eq!(emojis.len(), 1);
//! assert_eq!(emojis[0].text, "\u{1F525}");
//! assert!(
//!     text.lines
//!         .iter()
//!         .flat_map(|line| &line.spans)
//!         .filter(|span| span.is_emoji)
//!         .all(|span| span.text.is_empty())
//! );
//! ```

// Crate-level lint configuration
#![allow(clippy::cast_precision_loss)] // Intentional for width/placement math
#![allow(clippy::module_name_repetitions)] // Allow TextSpan, TextAlign etc
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::float_cmp)] // Exact comparisons in tests are intentional

pub mod error;
pub mod face;
pub mod font;
pub mod layout;
pub mod text;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use face::{FontFace, FontId, FontStyle};
pub use font::{Woff2, Woff2Table, parse_woff2};
pub use layout::{Line, Text, TextAlign};
pub use text::{
    Boundary, BoundaryKind, Emoji, RichText, Segment, TextSpan, classify, emoji_text_box, segments,
};
