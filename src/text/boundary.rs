//! Boundary classification for text runs.
//!
//! [`classify`] scans a run for whitespace and tags each maximal whitespace
//! run as a word, sentence, or line boundary. The span builder splits spans
//! only at sentence/line/end-of-text boundaries; word boundaries are
//! informational and are consumed by the layout engine as wrap opportunities.

/// The kind of break a boundary represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryKind {
    /// Inter-word whitespace; a wrap opportunity, never a span split.
    Word,
    /// Whitespace following sentence-ending punctuation.
    Sentence,
    /// Whitespace containing a mandatory line break.
    Line,
    /// End of the classified range. Always last, size zero.
    Eof,
}

/// A classified break point within a text run.
///
/// `pos` is a byte offset relative to the start of the classified range;
/// `size` is the byte length of the boundary marker itself (zero for the
/// final end-of-text entry).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Boundary {
    pub kind: BoundaryKind,
    pub pos: usize,
    pub size: usize,
}

impl Boundary {
    /// Byte offset one past the boundary marker.
    #[must_use]
    pub fn end(&self) -> usize {
        self.pos + self.size
    }

    /// Whether this boundary forces a span split.
    #[must_use]
    pub fn is_hard(&self) -> bool {
        matches!(self.kind, BoundaryKind::Line | BoundaryKind::Sentence)
    }
}

fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn ends_sentence(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\u{2026}')
}

fn closes_quotation(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}')
}

/// Classify the boundaries of `text[start..end]`.
///
/// Returns an ordered list of boundaries with positions relative to
/// `start`. Each maximal whitespace run yields exactly one boundary: line
/// if the run contains a newline, sentence if the preceding word ends in
/// sentence punctuation (optionally followed by closing quotes or
/// brackets), word otherwise. The list always terminates with an
/// end-of-text boundary whose `pos` equals the range length.
///
/// # Panics
///
/// Panics if `start..end` is not a valid char-aligned range of `text`.
#[must_use]
pub fn classify(text: &str, start: usize, end: usize) -> Vec<Boundary> {
    let range = &text[start..end];
    let mut boundaries = Vec::new();

    let mut run_start = None;
    let mut run_newline = false;
    // True when the last word seen ends in sentence punctuation.
    let mut after_sentence = false;

    for (i, c) in range.char_indices() {
        if c.is_whitespace() {
            if run_start.is_none() {
                run_start = Some(i);
                run_newline = false;
            }
            run_newline |= is_newline(c);
        } else {
            if let Some(pos) = run_start.take() {
                boundaries.push(Boundary {
                    kind: run_kind(run_newline, after_sentence),
                    pos,
                    size: i - pos,
                });
                after_sentence = false;
            }
            if ends_sentence(c) {
                after_sentence = true;
            } else if !(after_sentence && closes_quotation(c)) {
                after_sentence = false;
            }
        }
    }

    if let Some(pos) = run_start {
        boundaries.push(Boundary {
            kind: run_kind(run_newline, after_sentence),
            pos,
            size: range.len() - pos,
        });
    }

    boundaries.push(Boundary {
        kind: BoundaryKind::Eof,
        pos: range.len(),
        size: 0,
    });
    boundaries
}

fn run_kind(newline: bool, after_sentence: bool) -> BoundaryKind {
    if newline {
        BoundaryKind::Line
    } else if after_sentence {
        BoundaryKind::Sentence
    } else {
        BoundaryKind::Word
    }
}
