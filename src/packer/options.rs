//! Packing thresholds and their validation.

use crate::error::{Error, Result};

/// Default minimum number of words for a page to be packed.
pub const DEFAULT_MIN_WORD_COUNT: usize = 10;

/// Default word ceiling per paragraph.
pub const DEFAULT_MAX_WORDS: usize = 500;

/// Default character ceiling per paragraph.
pub const DEFAULT_MAX_CHARS: usize = 5000;

/// Size thresholds for paragraph packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentOptions {
    /// Pages with fewer words than this produce no paragraphs
    pub min_word_count: usize,

    /// Word ceiling; reaching it closes the current paragraph
    pub max_words: usize,

    /// Character ceiling; reaching it closes the current paragraph
    pub max_chars: usize,
}

impl SegmentOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum page word count.
    pub fn with_min_word_count(mut self, count: usize) -> Self {
        self.min_word_count = count;
        self
    }

    /// Set the word ceiling.
    pub fn with_max_words(mut self, words: usize) -> Self {
        self.max_words = words;
        self
    }

    /// Set the character ceiling.
    pub fn with_max_chars(mut self, chars: usize) -> Self {
        self.max_chars = chars;
        self
    }

    /// Check that every threshold is positive.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("min_word_count", self.min_word_count),
            ("max_words", self.max_words),
            ("max_chars", self.max_chars),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(Error::Configuration(format!(
                    "{} must be a positive integer",
                    name
                )));
            }
        }
        Ok(())
    }
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            min_word_count: DEFAULT_MIN_WORD_COUNT,
            max_words: DEFAULT_MAX_WORDS,
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}
