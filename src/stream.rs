//! Streaming segmentation for memory-efficient processing of long documents.
//!
//! [`ParagraphStream`] pulls pages from any iterator on demand and yields
//! records one at a time, so a document never has to be held in memory as a
//! whole. Records and numbering are identical to [`Segmenter::segment`].
//!
//! # Example
//!
//! ```
//! use paraseg::{PackerState, SegmentOptions, Segmenter};
//!
//! let segmenter = Segmenter::new(SegmentOptions::new().with_min_word_count(1))?;
//! let mut state = PackerState::new();
//! let pages = vec![("Page one text.", 0u32), ("Page two text.", 1u32)];
//!
//! for record in segmenter.stream(&mut state, pages) {
//!     println!("p{} #{}: {}", record.page(), record.paragraph_index(), record.text());
//! }
//! assert_eq!(state.counter(), 2);
//! # Ok::<(), paraseg::Error>(())
//! ```

use std::collections::VecDeque;

use crate::model::{Page, ParagraphRecord};
use crate::packer::PackerState;
use crate::Segmenter;

/// Iterator over the paragraph records of a page sequence.
pub struct ParagraphStream<'a, I> {
    segmenter: &'a Segmenter,
    state: &'a mut PackerState,
    pages: I,
    pending: VecDeque<ParagraphRecord>,
    pages_processed: u32,
}

impl<'a, I> ParagraphStream<'a, I>
where
    I: Iterator,
    I::Item: Into<Page>,
{
    /// Create a stream over `pages`.
    pub fn new(segmenter: &'a Segmenter, state: &'a mut PackerState, pages: I) -> Self {
        Self {
            segmenter,
            state,
            pages,
            pending: VecDeque::new(),
            pages_processed: 0,
        }
    }

    /// Number of pages pulled from the source so far.
    pub fn pages_processed(&self) -> u32 {
        self.pages_processed
    }

    /// Current document counter.
    pub fn counter(&self) -> u32 {
        self.state.counter()
    }
}

impl<I> Iterator for ParagraphStream<'_, I>
where
    I: Iterator,
    I::Item: Into<Page>,
{
    type Item = ParagraphRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.pending.pop_front() {
                return Some(record);
            }
            let page: Page = self.pages.next()?.into();
            self.pages_processed += 1;
            self.pending
                .extend(self.segmenter.process_page(self.state, &page));
        }
    }
}
