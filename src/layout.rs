//! Box-fitting layout: positions a span sequence into lines.
//!
//! [`fit`] is a greedy line filler. Spans are first cut at their mandatory
//! line boundaries, then packed into lines of at most `width` layout units,
//! wrapping at word and sentence boundaries. Each placed span receives a
//! horizontal offset `dx`; each line a baseline `y`. A width or height of
//! zero means unconstrained in that axis; lines that do not fit a
//! constrained height are dropped.

use crate::text::{BoundaryKind, TextSpan};

/// Alignment of text within the box, horizontal or vertical.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Flush left (horizontal).
    #[default]
    Left,
    /// Flush right (horizontal).
    Right,
    /// Centered (either axis).
    Center,
    /// Stretched to fill the box (either axis).
    Justify,
    /// Flush top (vertical).
    Top,
    /// Flush bottom (vertical).
    Bottom,
}

/// Baseline position as a fraction of the em size.
const ASCENT_FACTOR: f64 = 0.8;
/// Depth below the baseline as a fraction of the em size.
const DESCENT_FACTOR: f64 = 0.2;

/// A single positioned line.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// Vertical baseline position.
    pub y: f64,
    /// Spans on this line, in left-to-right order, with `dx` assigned.
    pub spans: Vec<TextSpan>,
}

/// A laid-out text: an ordered sequence of positioned lines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Text {
    pub lines: Vec<Line>,
}

impl Text {
    /// Whether layout produced no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Bottom edge of the last line, or zero for an empty layout.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.lines.last().map_or(0.0, |line| {
            line.y + max_em(&line.spans) * DESCENT_FACTOR
        })
    }
}

fn max_em(spans: &[TextSpan]) -> f64 {
    spans.iter().map(|s| s.face.em()).fold(0.0, f64::max)
}

/// A filled line before vertical placement.
struct RawLine {
    spans: Vec<TextSpan>,
    /// First-line text indent carried into alignment.
    indent: f64,
    /// Whether the line ends at a mandatory break (exempt from justify).
    hard: bool,
}

/// Fit `spans` into a box of `width` by `height` layout units.
///
/// Returns `None` when the span sequence is empty. The result may contain
/// zero lines when a constrained height has no room for the first line.
#[must_use]
pub fn fit(
    spans: Vec<TextSpan>,
    width: f64,
    height: f64,
    halign: TextAlign,
    valign: TextAlign,
    indent: f64,
    line_stretch: f64,
) -> Option<Text> {
    if spans.is_empty() {
        return None;
    }

    let frags = explode(spans);
    let mut raw = pack(frags, width, indent);
    align_horizontal(&mut raw, width, halign);
    let mut text = place_vertical(raw, height, line_stretch);
    align_vertical(&mut text, height, valign);
    Some(text)
}

/// Cut spans at their mandatory line boundaries.
///
/// Returns fragments tagged with whether a hard break follows them.
fn explode(spans: Vec<TextSpan>) -> Vec<(TextSpan, bool)> {
    let mut frags: Vec<(TextSpan, bool)> = Vec::new();
    for span in spans {
        if span.is_emoji {
            frags.push((span, false));
            continue;
        }
        let mut rest = span;
        while let Some(b) = rest
            .boundaries()
            .iter()
            .copied()
            .find(|b| b.kind == BoundaryKind::Line)
        {
            let (head, tail) = rest.split_at_boundary(b);
            if head.is_empty() {
                // Leading newline: the break binds to the previous fragment.
                // With no previous fragment the empty head stays as a hard
                // placeholder so the first line is blank.
                if let Some(last) = frags.last_mut() {
                    last.1 = true;
                } else {
                    frags.push((head, true));
                }
            } else {
                frags.push((head, true));
            }
            rest = tail;
        }
        if !rest.is_empty() {
            frags.push((rest, false));
        }
    }
    frags
}

/// Pack fragments into lines of at most `width` units, wrapping at soft
/// boundaries. With `width` zero, only hard breaks start new lines.
fn pack(frags: Vec<(TextSpan, bool)>, width: f64, indent: f64) -> Vec<RawLine> {
    let mut raw: Vec<RawLine> = Vec::new();
    let mut cur: Vec<TextSpan> = Vec::new();
    let mut cur_w = indent;

    macro_rules! flush {
        ($hard:expr) => {
            raw.push(RawLine {
                spans: std::mem::take(&mut cur),
                indent: if raw.is_empty() { indent } else { 0.0 },
                hard: $hard,
            });
            cur_w = 0.0;
        };
    }

    for (frag, hard) in frags {
        let mut slot = Some(frag);
        while let Some(frag) = slot.take() {
            // Empty hard placeholders still fill a blank line; empty soft
            // tails from trailing-whitespace breaks are dropped.
            if frag.is_empty() && !hard {
                continue;
            }
            if width <= 0.0 || cur_w + frag.width() <= width {
                cur_w += frag.width();
                cur.push(frag);
            } else if let Some((head, tail)) = break_to_fit(&frag, width - cur_w) {
                cur.push(head);
                flush!(false);
                slot = Some(tail);
            } else if cur.is_empty() {
                // Nothing fits even on a fresh line: overflow rather than
                // drop content.
                cur_w += frag.width();
                cur.push(frag);
            } else {
                flush!(false);
                slot = Some(frag);
            }
        }
        if hard {
            flush!(true);
        }
    }
    if !cur.is_empty() {
        flush!(false);
    }
    raw
}

/// Split `span` at the last soft boundary whose prefix fits in `avail`
/// units. Emoji spans and spans with no fitting boundary return `None`.
fn break_to_fit(span: &TextSpan, avail: f64) -> Option<(TextSpan, TextSpan)> {
    if span.is_emoji {
        return None;
    }
    let mut best = None;
    for b in span.boundaries() {
        if b.kind == BoundaryKind::Eof || b.pos == 0 {
            continue;
        }
        if span.face.text_width(&span.text[..b.pos]) <= avail {
            best = Some(*b);
        } else {
            break;
        }
    }
    best.map(|b| span.split_at_boundary(b))
}

fn align_horizontal(raw: &mut [RawLine], width: f64, halign: TextAlign) {
    let count = raw.len();
    for (k, line) in raw.iter_mut().enumerate() {
        let content: f64 = line.spans.iter().map(TextSpan::layout_width).sum();
        let extra = if width > 0.0 {
            (width - line.indent - content).max(0.0)
        } else {
            0.0
        };

        let mut x = line.indent;
        match halign {
            TextAlign::Right => x += extra,
            TextAlign::Center => x += extra / 2.0,
            TextAlign::Justify if k + 1 < count && !line.hard => {
                // Stretch inter-word whitespace; emoji spans have no word
                // boundaries and keep zero spacing.
                let points: usize = line.spans.iter().map(TextSpan::word_boundary_count).sum();
                if points > 0 {
                    #[allow(clippy::cast_precision_loss)]
                    let spacing = extra / points as f64;
                    for span in &mut line.spans {
                        if !span.is_emoji {
                            span.word_spacing = spacing;
                        }
                    }
                }
            }
            _ => {}
        }

        for span in &mut line.spans {
            span.dx = x;
            x += span.layout_width();
        }
    }
}

/// Assign baselines top-down, dropping lines past a constrained height.
fn place_vertical(raw: Vec<RawLine>, height: f64, line_stretch: f64) -> Text {
    let mut lines = Vec::new();
    let mut y = 0.0;
    for (k, mut line) in raw.into_iter().enumerate() {
        let em = max_em(&line.spans);
        y = if k == 0 {
            em * ASCENT_FACTOR
        } else {
            y + em * (1.0 + line_stretch)
        };
        if height > 0.0 && y + em * DESCENT_FACTOR > height {
            break;
        }
        // Blank-line placeholders contribute their em above but do not
        // render.
        line.spans.retain(|s| !s.is_empty());
        lines.push(Line {
            y,
            spans: line.spans,
        });
    }
    Text { lines }
}

fn align_vertical(text: &mut Text, height: f64, valign: TextAlign) {
    if height <= 0.0 || text.lines.is_empty() {
        return;
    }
    let extra = (height - text.height()).max(0.0);
    let count = text.lines.len();
    match valign {
        TextAlign::Bottom => {
            for line in &mut text.lines {
                line.y += extra;
            }
        }
        TextAlign::Center => {
            for line in &mut text.lines {
                line.y += extra / 2.0;
            }
        }
        TextAlign::Justify if count > 1 => {
            #[allow(clippy::cast_precision_loss)]
            for (i, line) in text.lines.iter_mut().enumerate() {
                line.y += extra * i as f64 / (count - 1) as f64;
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::{FontFace, FontId};

    // face(10.0): ASCII chars are 5 units wide, em is 10.
    fn face() -> FontFace {
        FontFace::new(FontId(1), 10.0)
    }

    fn span(text: &str, start: usize) -> TextSpan {
        TextSpan::new_text(face(), text, start)
    }

    fn line_texts(text: &Text) -> Vec<Vec<String>> {
        text.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.text.clone()).collect())
            .collect()
    }

    #[test]
    fn test_empty_spans_is_none() {
        assert!(
            fit(Vec::new(), 100.0, 100.0, TextAlign::Left, TextAlign::Top, 0.0, 0.0).is_none()
        );
    }

    #[test]
    fn test_unconstrained_single_line() {
        let text = fit(
            vec![span("hello world", 0)],
            0.0,
            0.0,
            TextAlign::Left,
            TextAlign::Top,
            0.0,
            0.0,
        )
        .expect("layout");
        assert_eq!(line_texts(&text), vec![vec!["hello world".to_string()]]);
        assert!((text.lines[0].y - 8.0).abs() < 1e-9);
        assert!((text.lines[0].spans[0].dx).abs() < 1e-9);
    }

    #[test]
    fn test_leading_newline_blank_first_line() {
        let text = fit(
            vec![span("\nhello", 0)],
            0.0,
            0.0,
            TextAlign::Left,
            TextAlign::Top,
            0.0,
            0.0,
        )
        .expect("layout");
        assert_eq!(
            line_texts(&text),
            vec![vec![], vec!["hello".to_string()]]
        );
        // The blank line still advances by the face's em: 8, then 8 + 10.
        assert!((text.lines[0].y - 8.0).abs() < 1e-9);
        assert!((text.lines[1].y - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_at_word_boundary() {
        let text = fit(
            vec![span("aaaa bbbb", 0)],
            25.0,
            0.0,
            TextAlign::Left,
            TextAlign::Top,
            0.0,
            0.0,
        )
        .expect("layout");
        assert_eq!(
            line_texts(&text),
            vec![vec!["aaaa".to_string()], vec!["bbbb".to_string()]]
        );
        // Baselines: 8, then 8 + em.
        assert!((text.lines[1].y - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_hard_break_splits_line() {
        let text = fit(
            vec![span("first\n", 0), span("second", 6)],
            0.0,
            0.0,
            TextAlign::Left,
            TextAlign::Top,
            0.0,
            0.0,
        )
        .expect("layout");
        assert_eq!(
            line_texts(&text),
            vec![vec!["first".to_string()], vec!["second".to_string()]]
        );
    }

    #[test]
    fn test_overflowing_word_is_kept() {
        // No soft boundary fits: overflow instead of dropping content.
        let text = fit(
            vec![span("abcdefghij", 0)],
            20.0,
            0.0,
            TextAlign::Left,
            TextAlign::Top,
            0.0,
            0.0,
        )
        .expect("layout");
        assert_eq!(line_texts(&text), vec![vec!["abcdefghij".to_string()]]);
    }

    #[test]
    fn test_indent_first_line_only() {
        let text = fit(
            vec![span("aaaa bbbb", 0)],
            30.0,
            0.0,
            TextAlign::Left,
            TextAlign::Top,
            10.0,
            0.0,
        )
        .expect("layout");
        // indent 10 + "aaaa " (25) overflows 30: wrap after "aaaa".
        assert_eq!(text.lines.len(), 2);
        assert!((text.lines[0].spans[0].dx - 10.0).abs() < 1e-9);
        assert!((text.lines[1].spans[0].dx).abs() < 1e-9);
    }

    #[test]
    fn test_halign_right_and_center() {
        let right = fit(
            vec![span("aaaa", 0)],
            100.0,
            0.0,
            TextAlign::Right,
            TextAlign::Top,
            0.0,
            0.0,
        )
        .expect("layout");
        assert!((right.lines[0].spans[0].dx - 80.0).abs() < 1e-9);

        let center = fit(
            vec![span("aaaa", 0)],
            100.0,
            0.0,
            TextAlign::Center,
            TextAlign::Top,
            0.0,
            0.0,
        )
        .expect("layout");
        assert!((center.lines[0].spans[0].dx - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_justify_stretches_word_spacing() {
        let text = fit(
            vec![span("aa bb cc dd", 0)],
            50.0,
            0.0,
            TextAlign::Justify,
            TextAlign::Top,
            0.0,
            0.0,
        )
        .expect("layout");
        // Wraps to "aa bb cc" / "dd"; the first line is justified.
        assert_eq!(text.lines.len(), 2);
        let first = &text.lines[0].spans[0];
        // extra = 50 - 40 over 2 word boundaries.
        assert!((first.word_spacing - 5.0).abs() < 1e-9);
        assert!((first.layout_width() - 50.0).abs() < 1e-9);
        // The last line is never justified.
        let last = &text.lines[1].spans[0];
        assert!(last.word_spacing.abs() < f64::EPSILON);
    }

    #[test]
    fn test_height_drops_overflow_lines() {
        let text = fit(
            vec![span("aaaa bbbb", 0)],
            25.0,
            15.0,
            TextAlign::Left,
            TextAlign::Top,
            0.0,
            0.0,
        )
        .expect("layout");
        // Second line bottom would be 20 > 15.
        assert_eq!(text.lines.len(), 1);
    }

    #[test]
    fn test_height_too_small_for_any_line() {
        let text = fit(
            vec![span("aaaa", 0)],
            0.0,
            5.0,
            TextAlign::Left,
            TextAlign::Top,
            0.0,
            0.0,
        )
        .expect("layout");
        assert!(text.is_empty());
    }

    #[test]
    fn test_valign_bottom() {
        let text = fit(
            vec![span("aaaa", 0)],
            0.0,
            100.0,
            TextAlign::Left,
            TextAlign::Bottom,
            0.0,
            0.0,
        )
        .expect("layout");
        // used = 8 + 2; extra = 90; baseline 8 + 90.
        assert!((text.lines[0].y - 98.0).abs() < 1e-9);
    }

    #[test]
    fn test_line_stretch_advances_baselines() {
        let text = fit(
            vec![span("aaaa bbbb", 0)],
            25.0,
            0.0,
            TextAlign::Left,
            TextAlign::Top,
            0.0,
            0.5,
        )
        .expect("layout");
        // Second baseline advances by em * 1.5.
        assert!((text.lines[1].y - 23.0).abs() < 1e-9);
    }

    #[test]
    fn test_text_height() {
        let text = fit(
            vec![span("aaaa", 0)],
            0.0,
            0.0,
            TextAlign::Left,
            TextAlign::Top,
            0.0,
            0.0,
        )
        .expect("layout");
        assert!((text.height() - 10.0).abs() < 1e-9);
    }
}
