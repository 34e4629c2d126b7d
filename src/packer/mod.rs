//! Greedy sentence packing into bounded paragraphs.
//!
//! The packer walks a page's sentences once, left to right, accumulating
//! them into a buffer while the running word and character totals stay
//! strictly below the configured ceilings. The sentence that would reach
//! either ceiling closes the buffer as a [`ParagraphRecord`] and starts the
//! next one. Sentences are never cut: a sentence that is larger than the
//! ceilings on its own becomes a paragraph by itself.
//!
//! Document-wide numbering lives in an explicit [`PackerState`] owned by the
//! caller, one per document.

mod options;

pub use options::{SegmentOptions, DEFAULT_MAX_CHARS, DEFAULT_MAX_WORDS, DEFAULT_MIN_WORD_COUNT};

use std::sync::Arc;

use crate::error::Result;
use crate::model::ParagraphRecord;
use crate::normalize::{char_count, word_count};
use crate::split::SentenceSplitter;

/// Sentences buffered for the paragraph currently being built.
#[derive(Debug, Clone, Default)]
struct SentenceBuffer {
    sentences: Vec<String>,
    words: usize,
    chars: usize,
}

impl SentenceBuffer {
    fn fits(&self, words: usize, chars: usize, options: &SegmentOptions) -> bool {
        self.words + words < options.max_words && self.chars + chars < options.max_chars
    }

    fn push(&mut self, sentence: &str, words: usize, chars: usize) {
        self.sentences.push(sentence.to_string());
        self.words += words;
        self.chars += chars;
    }

    fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    fn clear(&mut self) {
        self.sentences.clear();
        self.words = 0;
        self.chars = 0;
    }

    /// Emit the buffered sentences as one record and reset.
    fn flush(&mut self, page: u32, sequence: u32) -> Option<ParagraphRecord> {
        if self.is_empty() {
            return None;
        }
        let text = self.sentences.join(" ");
        log::trace!(
            "flushing {} sentences ({} words, {} chars) from page {}",
            self.sentences.len(),
            self.words,
            self.chars,
            page
        );
        self.clear();
        ParagraphRecord::new(text, page, sequence)
    }
}

/// Per-document packing state.
///
/// Holds the running sequence counter and the in-progress sentence buffer.
/// Create one per document and drop it after the last page; never share one
/// between documents processed concurrently.
#[derive(Debug, Clone, Default)]
pub struct PackerState {
    counter: u32,
    buffer: SentenceBuffer,
}

impl PackerState {
    /// Create a fresh state; the first page processed gets sequence 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state whose next page gets sequence `counter + 1`.
    pub fn starting_at(counter: u32) -> Self {
        Self {
            counter,
            ..Self::default()
        }
    }

    /// Sequence value assigned to the most recently processed page.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Advance the counter by one and return the new value.
    ///
    /// Called once per page entering the packer, and once more at each
    /// document boundary by [`crate::Segmenter::finish_document`].
    pub fn advance(&mut self) -> u32 {
        self.counter = self.counter.saturating_add(1);
        self.counter
    }

    /// Advance the counter by `pages` without processing them.
    pub fn skip(&mut self, pages: u32) {
        self.counter = self.counter.saturating_add(pages);
    }

    /// Reset to the state of a freshly created document.
    pub fn reset(&mut self) {
        self.counter = 0;
        self.buffer.clear();
    }
}

/// Packs normalized page text into paragraph records.
#[derive(Clone)]
pub struct ParagraphPacker {
    splitter: Arc<dyn SentenceSplitter>,
    options: SegmentOptions,
}

impl ParagraphPacker {
    /// Create a packer, validating the thresholds.
    pub fn new(splitter: Arc<dyn SentenceSplitter>, options: SegmentOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { splitter, options })
    }

    /// Packing thresholds.
    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    /// The injected sentence splitter.
    pub fn splitter(&self) -> &dyn SentenceSplitter {
        self.splitter.as_ref()
    }

    /// Pack one page, advancing the document counter in `state`.
    ///
    /// `text` is expected to be normalized already. `page_index` is the
    /// caller's zero-based ordinal; records carry `page_index + 1`. The
    /// counter advances exactly once, even when the page is too short and
    /// yields nothing, and that one value is the `paragraph_index` of every
    /// record from this page.
    pub fn process_page(
        &self,
        state: &mut PackerState,
        text: &str,
        page_index: u32,
    ) -> Vec<ParagraphRecord> {
        let sequence = state.advance();
        self.pack_into(&mut state.buffer, text, page_index, sequence)
    }

    /// Pack one page with a pre-assigned sequence value.
    ///
    /// Used when pages are fanned out to workers: the caller numbers pages
    /// up front so no worker touches a shared counter.
    pub fn pack_page(&self, text: &str, page_index: u32, sequence: u32) -> Vec<ParagraphRecord> {
        let mut buffer = SentenceBuffer::default();
        self.pack_into(&mut buffer, text, page_index, sequence)
    }

    fn pack_into(
        &self,
        buffer: &mut SentenceBuffer,
        text: &str,
        page_index: u32,
        sequence: u32,
    ) -> Vec<ParagraphRecord> {
        let page = page_index.saturating_add(1);
        let page_words = word_count(text);
        if page_words < self.options.min_word_count {
            log::debug!(
                "skipping page {}: {} words (minimum {})",
                page,
                page_words,
                self.options.min_word_count
            );
            return Vec::new();
        }

        let mut records = Vec::new();
        for sentence in self.splitter.split(text) {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }
            let words = word_count(sentence);
            let chars = char_count(sentence);

            if buffer.fits(words, chars, &self.options) {
                buffer.push(sentence, words, chars);
                continue;
            }

            records.extend(buffer.flush(page, sequence));
            if words >= self.options.max_words || chars >= self.options.max_chars {
                log::warn!(
                    "page {}: sentence of {} words, {} chars exceeds ceilings; kept whole",
                    page,
                    words,
                    chars
                );
            }
            buffer.push(sentence, words, chars);
        }
        records.extend(buffer.flush(page, sequence));

        log::debug!(
            "page {}: {} words packed into {} paragraphs",
            page,
            page_words,
            records.len()
        );
        records
    }
}

impl std::fmt::Debug for ParagraphPacker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParagraphPacker")
            .field("splitter", &self.splitter.name())
            .field("options", &self.options)
            .finish()
    }
}
