//! Paragraph record, the packer's output unit.

use serde::{Deserialize, Serialize};

use crate::normalize::{char_count, word_count};

/// A block of one or more whole sentences bounded by size ceilings.
///
/// Word and character counts are derived from `text` on demand and are
/// never stored, so they cannot drift from the content. Serialized rows
/// still carry them as `word_count` / `char_count` columns; on
/// deserialization those columns are ignored and recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RecordRow", try_from = "RecordRow")]
pub struct ParagraphRecord {
    text: String,
    page: u32,
    paragraph_index: u32,
}

impl ParagraphRecord {
    /// Build a record from already-joined paragraph text.
    ///
    /// Returns `None` when `text` is empty or whitespace only.
    pub fn new(text: impl Into<String>, page: u32, paragraph_index: u32) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            text,
            page,
            paragraph_index,
        })
    }

    /// Packed paragraph content, sentences joined by single spaces.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based page number the paragraph came from.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Document-wide sequence value shared by all paragraphs of a page.
    pub fn paragraph_index(&self) -> u32 {
        self.paragraph_index
    }

    /// Number of whitespace-delimited tokens in the text.
    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }

    /// Length of the text in characters.
    pub fn char_count(&self) -> usize {
        char_count(&self.text)
    }

    /// Consume the record, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Flat row layout used on the wire.
#[derive(Serialize, Deserialize)]
struct RecordRow {
    text: String,
    page: u32,
    paragraph_index: u32,
    #[serde(default)]
    word_count: usize,
    #[serde(default)]
    char_count: usize,
}

impl From<ParagraphRecord> for RecordRow {
    fn from(record: ParagraphRecord) -> Self {
        Self {
            word_count: record.word_count(),
            char_count: record.char_count(),
            text: record.text,
            page: record.page,
            paragraph_index: record.paragraph_index,
        }
    }
}

impl TryFrom<RecordRow> for ParagraphRecord {
    type Error = String;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        ParagraphRecord::new(row.text, row.page, row.paragraph_index)
            .ok_or_else(|| "paragraph record text must not be empty".to_string())
    }
}
