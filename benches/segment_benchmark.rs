//! Benchmarks for paraseg segmentation performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic page text of roughly book-page size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use paraseg::{
    normalize, PackerState, Page, PunctuationSplitter, SegmentOptions, Segmenter,
    SentenceSplitter, UnicodeSentenceSplitter,
};

/// Creates `page_count` pages of about 400 words each.
fn create_test_pages(page_count: usize) -> Vec<Page> {
    (0..page_count)
        .map(|i| {
            let mut text = String::new();
            for s in 0..40 {
                text.push_str(&format!(
                    "Sentence {} on page {} carries\nsome filler words for the benchmark run. ",
                    s, i
                ));
                if s % 10 == 9 {
                    text.push_str("\u{2022} Dr. Smith noted an e.g. clause \u{2014} fine.\n\n");
                }
            }
            Page::new(i as u32, text)
        })
        .collect()
}

/// Benchmark text normalization.
fn bench_normalize(c: &mut Criterion) {
    let page = &create_test_pages(1)[0];

    c.bench_function("normalize_page", |b| {
        b.iter(|| normalize(black_box(&page.text)));
    });
}

/// Benchmark the built-in sentence splitters.
fn bench_splitters(c: &mut Criterion) {
    let text = normalize(&create_test_pages(1)[0].text);
    let punctuation = PunctuationSplitter::new();
    let unicode = UnicodeSentenceSplitter::new();

    c.bench_function("split_punctuation", |b| {
        b.iter(|| punctuation.split(black_box(&text)));
    });

    c.bench_function("split_unicode", |b| {
        b.iter(|| unicode.split(black_box(&text)));
    });
}

/// Benchmark whole-document segmentation at various sizes.
fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");
    let options = SegmentOptions::new().with_max_words(120).with_max_chars(900);
    let sequential = Segmenter::builder()
        .with_options(options)
        .sequential()
        .build()
        .unwrap();
    let parallel = Segmenter::builder().with_options(options).build().unwrap();

    for page_count in [1, 10, 100].iter() {
        let pages = create_test_pages(*page_count);

        group.bench_function(format!("{}_pages_sequential", page_count), |b| {
            b.iter(|| {
                let mut state = PackerState::new();
                sequential.segment_sequential(&mut state, black_box(&pages))
            });
        });

        group.bench_function(format!("{}_pages_parallel", page_count), |b| {
            b.iter(|| {
                let mut state = PackerState::new();
                parallel.segment_parallel(&mut state, black_box(&pages))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_splitters, bench_segmentation);
criterion_main!(benches);
