//! Splitting chunks into alternating text and emoji segments.
//!
//! [`segments`] walks a chunk by extended grapheme cluster and yields a lazy
//! sequence of tagged [`Segment`]s: maximal stretches of regular text, and
//! one segment per pictographic cluster. The segments partition the chunk
//! with no gaps or overlaps.

use unicode_segmentation::UnicodeSegmentation;

/// A maximal run produced by the lexer: either regular text or a single
/// emoji cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A maximal stretch of non-pictographic text.
    Text(&'a str),
    /// A single pictographic grapheme cluster (may be a ZWJ sequence).
    Emoji(&'a str),
}

impl Segment<'_> {
    /// The underlying substring, whichever kind this is.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Emoji(s) => s,
        }
    }
}

/// Lazy iterator over the text/emoji segments of a chunk.
///
/// Created by [`segments`].
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let mut clusters = self.rest.grapheme_indices(true);
        let (_, first) = clusters.next()?;
        if is_emoji_cluster(first) {
            self.rest = &self.rest[first.len()..];
            return Some(Segment::Emoji(first));
        }

        // Extend the text segment up to the next emoji cluster.
        let mut end = first.len();
        for (i, cluster) in clusters {
            if is_emoji_cluster(cluster) {
                end = i;
                break;
            }
            end = i + cluster.len();
        }
        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Segment::Text(text))
    }
}

/// Split `chunk` into alternating text and emoji segments.
#[must_use]
pub fn segments(chunk: &str) -> Segments<'_> {
    Segments { rest: chunk }
}

/// Whether a grapheme cluster renders as a pictographic symbol.
///
/// Decided by the leading scalar: the rest of the cluster (variation
/// selectors, skin tones, ZWJ continuations, flag pairs) follows the base.
/// Keycap sequences (`#`, `*`, or a digit followed by U+20E3) lead with an
/// ASCII scalar and therefore classify as text.
#[must_use]
pub fn is_emoji_cluster(cluster: &str) -> bool {
    cluster.chars().next().is_some_and(is_emoji_char)
}

/// Whether a scalar falls in the pictographic codepoint ranges.
///
/// Covers the main emoji blocks plus the legacy symbol ranges commonly
/// given emoji presentation. Deliberately excludes plain wide (CJK)
/// characters, which are text.
#[must_use]
pub fn is_emoji_char(c: char) -> bool {
    matches!(c,
        '\u{1F300}'..='\u{1F9FF}' |  // pictographs, emoticons, transport
        '\u{1FA00}'..='\u{1FAFF}' |  // symbols extended-A
        '\u{1F1E6}'..='\u{1F1FF}' |  // regional indicators (flags)
        '\u{2600}'..='\u{27BF}'   |  // misc symbols and dingbats
        '\u{231A}'..='\u{23FF}'   |  // watch, hourglass, media symbols
        '\u{25AA}'..='\u{25FE}'   |  // geometric shapes with emoji forms
        '\u{2934}'..='\u{2935}'   |
        '\u{2B05}'..='\u{2B55}'   |
        '\u{1F004}' |                // mahjong red dragon
        '\u{1F0CF}' |                // playing card black joker
        '\u{3030}' | '\u{303D}' | '\u{3297}' | '\u{3299}'
    )
}
