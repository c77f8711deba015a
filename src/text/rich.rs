//! The rich-text accumulator: incremental span building and post-layout
//! emoji extraction.
//!
//! [`RichText`] owns the growing text buffer and the span sequence. Each
//! [`RichText::add`] call lexes the appended chunk into text and emoji
//! segments, classifies the text boundaries, and either merges the leading
//! segment into the previous span or starts new spans.
//! [`RichText::to_text`] fits the spans into a box and converts the emoji
//! spans that survived layout into standalone placement records.

use std::collections::BTreeSet;

use crate::face::{FontFace, FontId};
use crate::layout::{Text, TextAlign, fit};
use crate::text::boundary::{BoundaryKind, classify};
use crate::text::lexer::{Segment, segments};
use crate::text::span::TextSpan;

/// Horizontal inset of an extracted emoji relative to its face's em size,
/// so the glyph sits visually centered rather than flush-left.
const EMOJI_INSET_FACTOR: f64 = 0.05;

/// Placement of a single pictographic glyph after layout.
///
/// Produced by [`RichText::to_text`]; the corresponding span in the layout
/// result has its text blanked so a plain-text renderer skips it.
#[derive(Clone, Debug, PartialEq)]
pub struct Emoji {
    /// The emoji cluster to draw.
    pub text: String,
    /// Horizontal position within the box.
    pub x: f64,
    /// Baseline of the line the emoji sits on.
    pub y: f64,
    /// Size to draw the glyph at (the face's effective em).
    pub scale: f64,
}

/// Merge bookkeeping for the most recently appended span.
///
/// Carried alongside the span sequence so the extend-previous decision
/// never re-inspects the tail span's boundary list.
#[derive(Clone, Copy, Debug)]
struct TailState {
    face: FontFace,
    continuable: bool,
}

/// A rich text built up from styled chunks, fitted into a box on demand.
///
/// The accumulator is a plain single-writer builder: create it empty, call
/// [`add`](Self::add) any number of times, then consume it with
/// [`to_text`](Self::to_text).
#[derive(Clone, Debug, Default)]
pub struct RichText {
    text: String,
    spans: Vec<TextSpan>,
    fonts: BTreeSet<FontId>,
    tail: Option<TailState>,
}

impl RichText {
    /// Create an empty rich text.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated plain-text buffer.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The span sequence built so far.
    #[must_use]
    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    /// The distinct font identities referenced so far.
    #[must_use]
    pub fn fonts(&self) -> &BTreeSet<FontId> {
        &self.fonts
    }

    /// Append a chunk of text in the given face.
    ///
    /// If the buffer ends in whitespace and the chunk starts with
    /// whitespace, the chunk's leading whitespace character is dropped, so
    /// independently-sourced fragments do not double their inter-run
    /// spacing. Text segments are split at sentence and line boundaries; a
    /// leading soft continuation merges into the previous span when the
    /// faces match and that span is still open (see
    /// `TextSpan::is_continuable`). Emoji clusters become standalone spans.
    #[must_use]
    pub fn add(mut self, face: FontFace, chunk: &str) -> Self {
        let mut chunk = chunk;
        if let (Some(prev), Some(next)) = (self.text.chars().next_back(), chunk.chars().next()) {
            if prev.is_whitespace() && next.is_whitespace() {
                chunk = &chunk[next.len_utf8()..];
            }
        }

        let mut start = self.text.len();
        self.text.push_str(chunk);

        for segment in segments(chunk) {
            match segment {
                Segment::Text(txt) => {
                    let mut i = 0;
                    for boundary in classify(txt, 0, txt.len()) {
                        if boundary.is_hard() || boundary.kind == BoundaryKind::Eof {
                            let j = boundary.end();
                            if i < j {
                                if i == 0 && !boundary.is_hard() && self.tail_extends(face) {
                                    self.extend_tail(face, start + j);
                                } else {
                                    let span = TextSpan::new_text(
                                        face,
                                        &self.text[start + i..start + j],
                                        start + i,
                                    );
                                    self.push_span(span);
                                }
                            }
                            i = j;
                        }
                    }
                    start += txt.len();
                }
                Segment::Emoji(cluster) => {
                    self.push_span(TextSpan::new_emoji(face, cluster, start));
                    start += cluster.len();
                }
            }
        }

        self.fonts.insert(face.font);
        self
    }

    /// Whether the current segment may extend the previous span.
    fn tail_extends(&self, face: FontFace) -> bool {
        self.tail
            .is_some_and(|tail| tail.face == face && tail.continuable)
    }

    /// Replace the tail span with one reaching from its original start
    /// through buffer offset `end`, boundaries and width recomputed.
    fn extend_tail(&mut self, face: FontFace, end: usize) {
        if let Some(prev) = self.spans.pop() {
            let merged = TextSpan::new_text(face, &self.text[prev.start..end], prev.start);
            self.push_span(merged);
        }
    }

    fn push_span(&mut self, span: TextSpan) {
        self.tail = Some(TailState {
            face: span.face,
            continuable: span.is_continuable(),
        });
        self.spans.push(span);
    }

    /// Fit the accumulated spans into a box and extract emoji placements.
    ///
    /// `width` and `height` of 0.0 mean unconstrained in that axis.
    /// Returns the positioned layout (or `None` when nothing was added)
    /// plus the placement records of every emoji span that survived
    /// layout, in line-then-span traversal order. Each extracted span's
    /// text is blanked in the returned layout so a plain-text renderer
    /// does not draw it again.
    #[must_use]
    pub fn to_text(
        self,
        width: f64,
        height: f64,
        halign: TextAlign,
        valign: TextAlign,
        indent: f64,
        line_stretch: f64,
    ) -> (Option<Text>, Vec<Emoji>) {
        let text = fit(self.spans, width, height, halign, valign, indent, line_stretch);
        let Some(mut text) = text else {
            return (None, Vec::new());
        };
        if text.lines.is_empty() {
            return (Some(text), Vec::new());
        }

        let mut emojis = Vec::new();
        for line in &mut text.lines {
            for span in &mut line.spans {
                if span.is_emoji {
                    emojis.push(Emoji {
                        text: span.text.clone(),
                        x: span.dx + span.face.em() * EMOJI_INSET_FACTOR,
                        y: line.y,
                        scale: span.face.em(),
                    });
                    span.text.clear();
                }
            }
        }
        (Some(text), emojis)
    }
}

/// One-shot text formatter: build a rich text from a single chunk and fit
/// it into a box.
///
/// Equivalent to `RichText::new().add(face, s).to_text(...)`.
#[must_use]
pub fn emoji_text_box(
    face: FontFace,
    s: &str,
    width: f64,
    height: f64,
    halign: TextAlign,
    valign: TextAlign,
    indent: f64,
    line_stretch: f64,
) -> (Option<Text>, Vec<Emoji>) {
    RichText::new()
        .add(face, s)
        .to_text(width, height, halign, valign, indent, line_stretch)
}
