//! Integration tests for pluggable sentence splitters.

use std::sync::Arc;

use paraseg::split::{SentenceSplitter, SplitterRegistry, DEFAULT_SPLITTER};
use paraseg::{Error, PackerState, SegmentOptions, Segmenter};

/// Mock splitter that breaks on semicolons.
struct SemicolonSplitter;

impl SentenceSplitter for SemicolonSplitter {
    fn name(&self) -> &str {
        "semicolon"
    }

    fn split(&self, text: &str) -> Vec<String> {
        text.split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Mock splitter that never finds a boundary.
struct WholeTextSplitter;

impl SentenceSplitter for WholeTextSplitter {
    fn name(&self) -> &str {
        "whole"
    }

    fn split(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            Vec::new()
        } else {
            vec![text.to_string()]
        }
    }
}

/// Mock splitter that finds no sentences at all.
struct SilentSplitter;

impl SentenceSplitter for SilentSplitter {
    fn name(&self) -> &str {
        "silent"
    }

    fn split(&self, _text: &str) -> Vec<String> {
        Vec::new()
    }
}

fn options() -> SegmentOptions {
    SegmentOptions::new().with_min_word_count(1).with_max_words(6)
}

#[test]
fn test_registry_register_custom() {
    let mut registry = SplitterRegistry::with_defaults();
    registry.register(Arc::new(SemicolonSplitter));

    assert!(registry.supports("semicolon"));
    assert!(registry.supports("SEMICOLON"));
    assert_eq!(registry.names(), vec!["punctuation", "semicolon", "unicode"]);
}

#[test]
fn test_registry_replaces_same_name() {
    let mut registry = SplitterRegistry::new();
    registry.register(Arc::new(SemicolonSplitter));
    registry.register(Arc::new(SemicolonSplitter));
    assert_eq!(registry.names().len(), 1);
}

#[test]
fn test_segmenter_uses_injected_splitter() {
    let segmenter = Segmenter::builder()
        .with_options(options())
        .with_splitter(Arc::new(SemicolonSplitter))
        .build()
        .unwrap();

    let records = segmenter.segment([("one two three; four five; six seven eight", 0u32)]);

    let texts: Vec<&str> = records.iter().map(|r| r.text()).collect();
    assert_eq!(texts, vec!["one two three four five", "six seven eight"]);
}

#[test]
fn test_segmenter_resolves_registered_name() {
    let mut registry = SplitterRegistry::new();
    registry.register(Arc::new(WholeTextSplitter));

    let segmenter = Segmenter::builder()
        .with_options(options())
        .with_registry(registry)
        .with_splitter_name("whole")
        .build()
        .unwrap();

    let records = segmenter.segment([("a b c d e f g h i j. k l.", 0u32)]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].word_count(), 12);
}

#[test]
fn test_unavailable_splitter_is_fatal() {
    let result = Segmenter::builder()
        .with_options(options())
        .with_registry(SplitterRegistry::new())
        .build();

    match result {
        Err(Error::CollaboratorUnavailable(msg)) => assert!(msg.contains(DEFAULT_SPLITTER)),
        other => panic!("expected CollaboratorUnavailable, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_builtin_splitters_agree_on_plain_prose() {
    let registry = SplitterRegistry::with_defaults();
    let text = "The river rose overnight. Roads were closed! Was anyone hurt? Nobody was.";

    let punctuation = registry.resolve("punctuation").unwrap().split(text);
    let unicode = registry.resolve("unicode").unwrap().split(text);

    assert_eq!(punctuation, unicode);
    assert_eq!(punctuation.len(), 4);
}

#[test]
fn test_page_without_sentences_counts_as_skipped() {
    let segmenter = Segmenter::builder()
        .with_options(options())
        .with_splitter(Arc::new(SilentSplitter))
        .build()
        .unwrap();
    let mut state = PackerState::new();

    let (records, stats) =
        segmenter.segment_document(&mut state, [("plenty of words on this page", 0u32)]);

    assert!(records.is_empty());
    assert_eq!(stats.pages_seen, 1);
    assert_eq!(stats.pages_skipped, 1);
    assert_eq!(state.counter(), 1);
}
