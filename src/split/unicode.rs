//! UAX #29 sentence splitter.

use unicode_segmentation::UnicodeSegmentation;

use super::SentenceSplitter;

/// Splits on Unicode sentence boundaries (Unicode Standard Annex #29).
///
/// Handles decimals, ellipses and non-Latin terminators, but has no notion
/// of abbreviations: `"Dr. Smith"` is two sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSplitter;

impl UnicodeSentenceSplitter {
    /// Create a new splitter.
    pub fn new() -> Self {
        Self
    }
}

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn name(&self) -> &str {
        "unicode"
    }

    fn split(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}
