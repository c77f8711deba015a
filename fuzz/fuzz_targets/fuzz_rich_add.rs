//! Fuzz target for the span builder.
//!
//! Feeds arbitrary chunk sequences through RichText::add and checks that
//! the span sequence always tiles the buffer, then lays the result out.

#![no_main]

use emojitext::{FontFace, FontId, RichText, TextAlign};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|chunks: Vec<(u8, &str)>| {
    let mut rt = RichText::new();
    for (id, chunk) in &chunks {
        let face = FontFace::new(FontId(u32::from(*id % 4)), 10.0);
        rt = rt.add(face, chunk);
    }

    let mut cursor = 0;
    for span in rt.spans() {
        assert_eq!(span.start, cursor);
        assert!(!span.is_empty());
        cursor = span.end();
    }
    assert_eq!(cursor, rt.text().len());

    let (text, emojis) = rt.to_text(80.0, 120.0, TextAlign::Justify, TextAlign::Bottom, 5.0, 0.1);
    if let Some(text) = text {
        let emoji_spans = text
            .lines
            .iter()
            .flat_map(|l| &l.spans)
            .filter(|s| s.is_emoji)
            .count();
        assert_eq!(emojis.len(), emoji_spans);
    } else {
        assert!(emojis.is_empty());
    }
});
