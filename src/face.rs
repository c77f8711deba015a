//! Font face references attached to text spans.
//!
//! A [`FontFace`] is an opaque styling reference: a font identity plus size,
//! scale, and attribute flags. The span builder only ever compares faces for
//! equality and uses the size/scale product for width and placement
//! arithmetic; glyph metrics and shaping live elsewhere.

use bitflags::bitflags;
use unicode_width::UnicodeWidthStr;

/// Opaque font identity.
///
/// Two faces referencing the same loaded font share a `FontId`. The
/// accumulator collects the distinct ids it has seen so a renderer knows
/// which fonts a laid-out text depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontId(pub u32);

bitflags! {
    /// Font attribute flags (bold, italic, etc.).
    ///
    /// Part of face identity: spans with differing styles never merge.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct FontStyle: u8 {
        /// Bold weight.
        const BOLD          = 0x01;
        /// Italic slant.
        const ITALIC        = 0x02;
        /// Underlined text.
        const UNDERLINE     = 0x04;
        /// Struck-through text.
        const STRIKETHROUGH = 0x08;
    }
}

/// A styled reference to a font: identity, size, scale, and attributes.
///
/// Equality is field-wise and is what the span builder consults when
/// deciding whether an appended chunk may extend the previous span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontFace {
    /// Font identity.
    pub font: FontId,
    /// Font size in layout units.
    pub size: f64,
    /// Additional scale factor applied on top of the size.
    pub scale: f64,
    /// Attribute flags.
    pub style: FontStyle,
}

impl FontFace {
    /// Create a face with the given font and size, unit scale, no attributes.
    #[must_use]
    pub fn new(font: FontId, size: f64) -> Self {
        Self {
            font,
            size,
            scale: 1.0,
            style: FontStyle::empty(),
        }
    }

    /// Set the scale factor.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the attribute flags.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Effective em size: size times scale.
    #[must_use]
    pub fn em(&self) -> f64 {
        self.size * self.scale
    }

    /// Approximate advance width of `text` in layout units.
    ///
    /// Display columns times half an em: an ASCII letter advances half an
    /// em, a wide (CJK) cluster a full em. Real glyph metrics are out of
    /// scope; the layout engine only needs a monotone width estimate.
    #[must_use]
    pub fn text_width(&self, text: &str) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let columns = UnicodeWidthStr::width(text) as f64;
        columns * self.em() * 0.5
    }
}
