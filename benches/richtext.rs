//! Span building and layout performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use emojitext::{FontFace, FontId, RichText, TextAlign, classify, segments};
use std::hint::black_box;

const PARAGRAPH: &str = "The quick brown fox jumps over the lazy dog. \
    Pack my box with five dozen liquor jugs! A wizard's job is to vex \
    chunks \u{1F600} of text. Emoji like \u{1F30D} and \u{1F680} mix in \
    freely, then the layout engine fits it all.";

fn bench_segments(c: &mut Criterion) {
    c.bench_function("segments_paragraph", |b| {
        b.iter(|| segments(black_box(PARAGRAPH)).count());
    });
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_paragraph", |b| {
        b.iter(|| classify(black_box(PARAGRAPH), 0, PARAGRAPH.len()));
    });
}

fn bench_add(c: &mut Criterion) {
    let face = FontFace::new(FontId(0), 12.0);

    c.bench_function("add_single_chunk", |b| {
        b.iter(|| RichText::new().add(face, black_box(PARAGRAPH)));
    });

    c.bench_function("add_word_chunks", |b| {
        b.iter(|| {
            PARAGRAPH
                .split_inclusive(' ')
                .fold(RichText::new(), |rt, word| rt.add(face, black_box(word)))
        });
    });
}

fn bench_to_text(c: &mut Criterion) {
    let face = FontFace::new(FontId(0), 12.0);

    c.bench_function("to_text_wrapped", |b| {
        b.iter(|| {
            RichText::new().add(face, black_box(PARAGRAPH)).to_text(
                200.0,
                0.0,
                TextAlign::Justify,
                TextAlign::Top,
                12.0,
                0.1,
            )
        });
    });
}

criterion_group!(
    benches,
    bench_segments,
    bench_classify,
    bench_add,
    bench_to_text
);
criterion_main!(benches);
