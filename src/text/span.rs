//! Text spans: uniformly-styled slices of the accumulated buffer.

use crate::face::FontFace;
use crate::text::boundary::{Boundary, BoundaryKind, classify};

/// Width of an emoji span relative to its face's em size.
const EMOJI_WIDTH_FACTOR: f64 = 0.9;

/// A contiguous, uniformly-styled run of text, or a single emoji cluster.
///
/// Text spans copy their slice of the shared buffer and remember the byte
/// offset it came from; emoji spans carry the literal cluster. The layout
/// engine writes `dx`; the emoji extractor blanks `text` on emoji spans
/// after recording their placement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpan {
    /// Face the span is drawn with.
    pub face: FontFace,
    /// The span's text. Empty only after emoji-extraction blanking.
    pub text: String,
    /// Byte offset of the span's start in the accumulated buffer.
    pub start: usize,
    /// Whether this span is a single pictographic cluster.
    pub is_emoji: bool,
    /// Horizontal placement within the line, written by the layout engine.
    pub dx: f64,
    /// Extra advance per word boundary, written by justification.
    pub word_spacing: f64,
    /// Extra advance per sentence boundary.
    pub sentence_spacing: f64,
    /// Extra advance per glyph.
    pub glyph_spacing: f64,
    width: f64,
    boundaries: Vec<Boundary>,
}

impl TextSpan {
    /// Create a text span over `text`, located at buffer offset `start`.
    pub(crate) fn new_text(face: FontFace, text: &str, start: usize) -> Self {
        Self {
            face,
            text: text.to_string(),
            start,
            is_emoji: false,
            dx: 0.0,
            word_spacing: 0.0,
            sentence_spacing: 0.0,
            glyph_spacing: 0.0,
            width: face.text_width(text),
            boundaries: classify(text, 0, text.len()),
        }
    }

    /// Create an emoji span for a single cluster at buffer offset `start`.
    pub(crate) fn new_emoji(face: FontFace, cluster: &str, start: usize) -> Self {
        Self {
            face,
            text: cluster.to_string(),
            start,
            is_emoji: true,
            dx: 0.0,
            word_spacing: 0.0,
            sentence_spacing: 0.0,
            glyph_spacing: 0.0,
            width: face.em() * EMOJI_WIDTH_FACTOR,
            boundaries: vec![Boundary {
                kind: BoundaryKind::Eof,
                pos: cluster.len(),
                size: 0,
            }],
        }
    }

    /// Cached advance width, not counting justification spacing.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Advance width including justification word spacing.
    #[must_use]
    pub fn layout_width(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let words = self.word_boundary_count() as f64;
        self.width + self.word_spacing * words
    }

    /// Boundaries within the span, positions relative to the span start.
    #[must_use]
    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    /// Number of word boundaries inside the span.
    #[must_use]
    pub fn word_boundary_count(&self) -> usize {
        self.boundaries
            .iter()
            .filter(|b| b.kind == BoundaryKind::Word)
            .count()
    }

    /// Length of the span's text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the span's text is empty (only after extraction blanking).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset one past the span's end in the accumulated buffer.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Whether a same-face continuation appended after this span may merge
    /// into it.
    ///
    /// True when the span's trailing content is still "open": either its
    /// last recorded break before end-of-text is a soft word boundary, or
    /// it has no internal breaks at all and is not an emoji. The asymmetry
    /// between the two arms is deliberate and pinned by tests.
    pub(crate) fn is_continuable(&self) -> bool {
        if self.boundaries.len() > 1 {
            !self.boundaries[self.boundaries.len() - 2].is_hard()
        } else {
            !self.is_emoji
        }
    }

    /// Split the span at an internal boundary, dropping the boundary marker.
    ///
    /// Returns the fragments before and after `boundary`. Used by the
    /// layout engine for wrapping; emoji spans are never split.
    pub(crate) fn split_at_boundary(&self, boundary: Boundary) -> (Self, Self) {
        let head = Self::new_text(self.face, &self.text[..boundary.pos], self.start);
        let tail = Self::new_text(
            self.face,
            &self.text[boundary.end()..],
            self.start + boundary.end(),
        );
        (head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::FontId;

    fn face() -> FontFace {
        FontFace::new(FontId(1), 10.0)
    }

    #[test]
    fn test_text_span_boundaries() {
        let span = TextSpan::new_text(face(), "hello world", 0);
        assert!(!span.is_emoji);
        assert_eq!(span.boundaries().len(), 2);
        assert_eq!(span.word_boundary_count(), 1);
        assert_eq!(span.end(), 11);
    }

    #[test]
    fn test_emoji_span_shape() {
        let span = TextSpan::new_emoji(face().with_scale(2.0), "\u{1F600}", 4);
        assert!(span.is_emoji);
        // width = size * scale * 0.9
        assert!((span.width() - 18.0).abs() < 1e-9);
        assert_eq!(
            span.boundaries(),
            &[Boundary {
                kind: BoundaryKind::Eof,
                pos: "\u{1F600}".len(),
                size: 0
            }]
        );
        assert!((span.word_spacing).abs() < f64::EPSILON);
        assert!((span.glyph_spacing).abs() < f64::EPSILON);
    }

    #[test]
    fn test_continuable_single_boundary_text() {
        // One boundary (eof only): continuable unless emoji.
        let span = TextSpan::new_text(face(), "hello", 0);
        assert!(span.is_continuable());
        let emoji = TextSpan::new_emoji(face(), "\u{1F600}", 0);
        assert!(!emoji.is_continuable());
    }

    #[test]
    fn test_continuable_last_real_boundary() {
        let soft = TextSpan::new_text(face(), "hello world ", 0);
        assert!(soft.is_continuable());
        let hard = TextSpan::new_text(face(), "hello\n", 0);
        assert!(!hard.is_continuable());
        let sentence = TextSpan::new_text(face(), "Done. ", 0);
        assert!(!sentence.is_continuable());
    }

    #[test]
    fn test_split_at_boundary() {
        let span = TextSpan::new_text(face(), "hello world", 2);
        let word = span.boundaries()[0];
        let (head, tail) = span.split_at_boundary(word);
        assert_eq!(head.text, "hello");
        assert_eq!(head.start, 2);
        assert_eq!(tail.text, "world");
        assert_eq!(tail.start, 2 + 6);
    }
}
