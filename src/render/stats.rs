//! Segmentation statistics.

use crate::model::ParagraphRecord;
use serde::{Deserialize, Serialize};

/// Counters collected while segmenting a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentStats {
    /// Pages that entered the packer
    pub pages_seen: u32,

    /// Pages that produced no records (too short, or no sentences found)
    pub pages_skipped: u32,

    /// Paragraph records emitted
    pub paragraph_count: u32,

    /// Words across all emitted records
    pub word_count: u64,

    /// Characters across all emitted records
    pub char_count: u64,

    /// Largest record, in words
    pub max_paragraph_words: u32,
}

impl SegmentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one page and the records it produced.
    ///
    /// A page that produced nothing counts as skipped.
    pub fn add_page(&mut self, records: &[ParagraphRecord]) {
        self.pages_seen += 1;
        if records.is_empty() {
            self.pages_skipped += 1;
        }
        for record in records {
            self.add_record(record);
        }
    }

    /// Account for one emitted record.
    pub fn add_record(&mut self, record: &ParagraphRecord) {
        let words = record.word_count();
        self.paragraph_count += 1;
        self.word_count += words as u64;
        self.char_count += record.char_count() as u64;
        self.max_paragraph_words = self.max_paragraph_words.max(words as u32);
    }

    /// Average record size in words (0 when nothing was emitted).
    pub fn mean_paragraph_words(&self) -> f64 {
        if self.paragraph_count == 0 {
            0.0
        } else {
            self.word_count as f64 / self.paragraph_count as f64
        }
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &SegmentStats) {
        self.pages_seen += other.pages_seen;
        self.pages_skipped += other.pages_skipped;
        self.paragraph_count += other.paragraph_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
        self.max_paragraph_words = self.max_paragraph_words.max(other.max_paragraph_words);
    }
}
