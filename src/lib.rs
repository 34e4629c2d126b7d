//! # paraseg
//!
//! Bounded paragraph segmentation for extracted page text.
//!
//! This library turns raw page text (as produced by a PDF or OCR extractor)
//! into an ordered sequence of paragraph records whose size stays under a
//! word ceiling and a character ceiling, ready for storage, indexing or
//! machine translation.
//!
//! ## Quick Start
//!
//! ```
//! use paraseg::{Segmenter, SegmentOptions};
//!
//! fn main() -> paraseg::Result<()> {
//!     let options = SegmentOptions::new()
//!         .with_min_word_count(3)
//!         .with_max_words(12)
//!         .with_max_chars(500);
//!     let segmenter = Segmenter::new(options)?;
//!
//!     let pages = vec![
//!         ("Extracted text of\nthe first page. It wraps across lines.", 0u32),
//!         ("Page two is here. It also has text.", 1u32),
//!     ];
//!     for record in segmenter.segment(pages) {
//!         println!("page {}: {}", record.page(), record.text());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Normalization**: non-ASCII is dropped, whitespace collapsed ([`normalize()`])
//! - **Sentence splitting**: pluggable [`SentenceSplitter`] implementations
//! - **Packing**: greedy, sentence-granular, strict ceilings ([`ParagraphPacker`])
//! - **Numbering**: explicit per-document [`PackerState`]
//! - **Parallel processing**: uses Rayon with pre-assigned page sequence numbers

pub mod error;
pub mod model;
pub mod normalize;
pub mod packer;
pub mod render;
mod segmenter;
pub mod split;
pub mod stream;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Page, ParagraphRecord};
pub use normalize::normalize;
pub use packer::{PackerState, ParagraphPacker, SegmentOptions};
pub use render::{JsonFormat, PageSelection, SegmentStats};
pub use segmenter::{Segmenter, SegmenterBuilder};
pub use split::{PunctuationSplitter, SentenceSplitter, SplitterRegistry, UnicodeSentenceSplitter};
pub use stream::ParagraphStream;

/// Segment a single block of text as one page with the given thresholds.
///
/// # Example
///
/// ```
/// use paraseg::{segment_text, SegmentOptions};
///
/// let options = SegmentOptions::new().with_min_word_count(1).with_max_words(4);
/// let records = segment_text("One two three. Four five. Six.", options)?;
/// assert_eq!(records.len(), 2);
/// # Ok::<(), paraseg::Error>(())
/// ```
pub fn segment_text(text: &str, options: SegmentOptions) -> Result<Vec<ParagraphRecord>> {
    let segmenter = Segmenter::builder()
        .with_options(options)
        .sequential()
        .build()?;
    Ok(segmenter.segment([Page::new(0, text)]))
}

/// Segment pages split out of a text dump on `delimiter` (e.g. form feed).
pub fn segment_delimited(
    text: &str,
    delimiter: &str,
    options: SegmentOptions,
) -> Result<Vec<ParagraphRecord>> {
    let segmenter = Segmenter::new(options)?;
    Ok(segmenter.segment(Page::split_text(text, delimiter)))
}
