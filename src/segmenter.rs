//! Document-level driver: normalize each page, pack it, collect records.

use std::sync::Arc;

use rayon::prelude::*;

use crate::error::Result;
use crate::model::{Page, ParagraphRecord};
use crate::normalize::normalize;
use crate::packer::{PackerState, ParagraphPacker, SegmentOptions};
use crate::render::{PageSelection, SegmentStats};
use crate::split::{SentenceSplitter, SplitterRegistry, DEFAULT_SPLITTER};
use crate::stream::ParagraphStream;

/// Segments whole documents into paragraph records.
///
/// A `Segmenter` is immutable and can be shared freely; all per-document
/// numbering lives in the [`PackerState`] passed to it.
#[derive(Debug, Clone)]
pub struct Segmenter {
    packer: ParagraphPacker,
    pages: PageSelection,
    parallel: bool,
}

impl Segmenter {
    /// Create a segmenter with the default splitter and the given thresholds.
    pub fn new(options: SegmentOptions) -> Result<Self> {
        Self::builder().with_options(options).build()
    }

    /// Start building a segmenter.
    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::new()
    }

    /// The underlying packer.
    pub fn packer(&self) -> &ParagraphPacker {
        &self.packer
    }

    /// Packing thresholds.
    pub fn options(&self) -> &SegmentOptions {
        self.packer.options()
    }

    /// Page selection applied before packing.
    pub fn page_selection(&self) -> &PageSelection {
        &self.pages
    }

    /// Whether [`Segmenter::segment`] fans pages out across threads.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Normalize and pack a single page.
    ///
    /// Pages outside the selection are ignored and do not advance `state`.
    pub fn process_page(&self, state: &mut PackerState, page: &Page) -> Vec<ParagraphRecord> {
        if !self.pages.includes_page(page) {
            log::trace!("page {} not selected", page.number());
            return Vec::new();
        }
        let text = normalize(&page.text);
        self.packer.process_page(state, &text, page.index)
    }

    /// Segment one whole document with a fresh state.
    pub fn segment<I, P>(&self, pages: I) -> Vec<ParagraphRecord>
    where
        I: IntoIterator<Item = P>,
        P: Into<Page>,
    {
        let mut state = PackerState::new();
        self.segment_document(&mut state, pages).0
    }

    /// Segment pages against an existing state, returning records and stats.
    pub fn segment_document<I, P>(
        &self,
        state: &mut PackerState,
        pages: I,
    ) -> (Vec<ParagraphRecord>, SegmentStats)
    where
        I: IntoIterator<Item = P>,
        P: Into<Page>,
    {
        let pages: Vec<Page> = pages.into_iter().map(Into::into).collect();
        let (records, stats) = if self.parallel {
            self.segment_parallel(state, &pages)
        } else {
            self.segment_sequential(state, &pages)
        };

        log::info!(
            "segmented {} pages into {} paragraphs ({} skipped)",
            stats.pages_seen,
            stats.paragraph_count,
            stats.pages_skipped
        );
        (records, stats)
    }

    /// Process pages one after another on the calling thread.
    pub fn segment_sequential(
        &self,
        state: &mut PackerState,
        pages: &[Page],
    ) -> (Vec<ParagraphRecord>, SegmentStats) {
        let mut records = Vec::new();
        let mut stats = SegmentStats::new();
        for page in pages.iter().filter(|p| self.pages.includes_page(p)) {
            let page_records = self.process_page(state, page);
            stats.add_page(&page_records);
            records.extend(page_records);
        }
        (records, stats)
    }

    /// Process pages across rayon workers.
    ///
    /// Each selected page is numbered before fan-out, so the result is
    /// identical to [`Segmenter::segment_sequential`] and `state` ends at
    /// the same counter value.
    pub fn segment_parallel(
        &self,
        state: &mut PackerState,
        pages: &[Page],
    ) -> (Vec<ParagraphRecord>, SegmentStats) {
        let selected: Vec<&Page> = pages
            .iter()
            .filter(|p| self.pages.includes_page(p))
            .collect();
        let start = state.counter();

        let per_page: Vec<Vec<ParagraphRecord>> = selected
            .par_iter()
            .enumerate()
            .map(|(offset, page)| {
                let sequence = start.saturating_add(offset as u32).saturating_add(1);
                let text = normalize(&page.text);
                self.packer.pack_page(&text, page.index, sequence)
            })
            .collect();
        state.skip(selected.len() as u32);

        let mut stats = SegmentStats::new();
        let mut records = Vec::new();
        for page_records in per_page {
            stats.add_page(&page_records);
            records.extend(page_records);
        }
        (records, stats)
    }

    /// Lazily segment pages, yielding records one at a time.
    pub fn stream<'a, I>(
        &'a self,
        state: &'a mut PackerState,
        pages: I,
    ) -> ParagraphStream<'a, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: Into<Page>,
    {
        ParagraphStream::new(self, state, pages.into_iter())
    }

    /// Close a document and return the state for the next one.
    ///
    /// The returned state continues numbering one step past the finished
    /// document, leaving a gap that marks the document boundary. Use
    /// [`PackerState::new`] instead to restart numbering at 1.
    pub fn finish_document(&self, state: PackerState) -> PackerState {
        PackerState::starting_at(state.counter().saturating_add(1))
    }
}

/// Builder for [`Segmenter`].
///
/// # Example
///
/// ```
/// use paraseg::{Segmenter, SegmentOptions};
///
/// let segmenter = Segmenter::builder()
///     .with_options(SegmentOptions::new().with_min_word_count(1).with_max_words(50))
///     .with_splitter_name("unicode")
///     .sequential()
///     .build()?;
///
/// let records = segmenter.segment([("First page. It has text.", 0u32)]);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].page(), 1);
/// # Ok::<(), paraseg::Error>(())
/// ```
pub struct SegmenterBuilder {
    options: SegmentOptions,
    splitter: Option<Arc<dyn SentenceSplitter>>,
    splitter_name: String,
    registry: Option<SplitterRegistry>,
    pages: PageSelection,
    parallel: bool,
}

impl SegmenterBuilder {
    /// Create a builder with default thresholds and splitter.
    pub fn new() -> Self {
        Self {
            options: SegmentOptions::default(),
            splitter: None,
            splitter_name: DEFAULT_SPLITTER.to_string(),
            registry: None,
            pages: PageSelection::All,
            parallel: true,
        }
    }

    /// Set packing thresholds.
    pub fn with_options(mut self, options: SegmentOptions) -> Self {
        self.options = options;
        self
    }

    /// Use a specific splitter instance.
    pub fn with_splitter(mut self, splitter: Arc<dyn SentenceSplitter>) -> Self {
        self.splitter = Some(splitter);
        self
    }

    /// Use a registered splitter by name, resolved at build time.
    pub fn with_splitter_name(mut self, name: impl Into<String>) -> Self {
        self.splitter = None;
        self.splitter_name = name.into();
        self
    }

    /// Resolve splitter names against a custom registry.
    pub fn with_registry(mut self, registry: SplitterRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Validate thresholds, resolve the splitter and build.
    ///
    /// Fails with [`crate::Error::Configuration`] on invalid thresholds and
    /// [`crate::Error::CollaboratorUnavailable`] when the splitter name is
    /// unknown. Both surface before any page is processed.
    pub fn build(self) -> Result<Segmenter> {
        self.options.validate()?;
        let splitter = match self.splitter {
            Some(splitter) => splitter,
            None => self
                .registry
                .unwrap_or_default()
                .resolve(&self.splitter_name)?,
        };
        log::debug!(
            "building segmenter: splitter '{}', {:?}",
            splitter.name(),
            self.options
        );
        Ok(Segmenter {
            packer: ParagraphPacker::new(splitter, self.options)?,
            pages: self.pages,
            parallel: self.parallel,
        })
    }
}

impl Default for SegmenterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::split::PunctuationSplitter;

    fn segmenter(parallel: bool) -> Segmenter {
        Segmenter::builder()
            .with_options(
                SegmentOptions::new()
                    .with_min_word_count(3)
                    .with_max_words(8),
            )
            .with_parallel(parallel)
            .build()
            .unwrap()
    }

    fn pages() -> Vec<Page> {
        vec![
            Page::new(0, "The first page\nhas two lines. And a second sentence here."),
            Page::new(1, "Tiny."),
            Page::new(2, "Caf\u{e9} society met today. Everyone attended the meeting. It ran long."),
        ]
    }

    #[test]
    fn test_builder_defaults() {
        let segmenter = Segmenter::builder().build().unwrap();
        assert!(segmenter.is_parallel());
        assert_eq!(*segmenter.options(), SegmentOptions::default());
        assert_eq!(segmenter.packer().splitter().name(), DEFAULT_SPLITTER);
    }

    #[test]
    fn test_builder_unknown_splitter() {
        let result = Segmenter::builder().with_splitter_name("spacy").build();
        assert!(matches!(result, Err(Error::CollaboratorUnavailable(_))));
    }

    #[test]
    fn test_builder_invalid_options() {
        let result = Segmenter::new(SegmentOptions::new().with_min_word_count(0));
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_builder_custom_registry() {
        let mut registry = SplitterRegistry::new();
        registry.register(Arc::new(PunctuationSplitter::without_abbreviations()));
        let segmenter = Segmenter::builder()
            .with_registry(registry)
            .with_splitter_name("PUNCTUATION")
            .build()
            .unwrap();
        assert_eq!(segmenter.packer().splitter().name(), "punctuation");
    }

    #[test]
    fn test_segment_normalizes_and_numbers() {
        let records = segmenter(false).segment(pages());

        let rows: Vec<(&str, u32, u32)> = records
            .iter()
            .map(|r| (r.text(), r.page(), r.paragraph_index()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("The first page has two lines.", 1, 1),
                ("And a second sentence here.", 1, 1),
                ("Caf society met today.", 3, 3),
                ("Everyone attended the meeting. It ran long.", 3, 3),
            ]
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut seq_state = PackerState::new();
        let mut par_state = PackerState::new();
        let (seq, seq_stats) = segmenter(false).segment_sequential(&mut seq_state, &pages());
        let (par, par_stats) = segmenter(true).segment_parallel(&mut par_state, &pages());

        assert_eq!(seq, par);
        assert_eq!(seq_stats, par_stats);
        assert_eq!(seq_state.counter(), par_state.counter());
        assert_eq!(par_state.counter(), 3);
    }

    #[test]
    fn test_page_selection_skips_without_counting() {
        let segmenter = Segmenter::builder()
            .with_options(SegmentOptions::new().with_min_word_count(3).with_max_words(8))
            .with_pages(PageSelection::Pages(vec![3]))
            .build()
            .unwrap();
        let mut state = PackerState::new();

        let (records, stats) = segmenter.segment_document(&mut state, pages());

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.page() == 3 && r.paragraph_index() == 1));
        assert_eq!(stats.pages_seen, 1);
        assert_eq!(state.counter(), 1);
    }

    #[test]
    fn test_stats() {
        let mut state = PackerState::new();
        let (_, stats) = segmenter(false).segment_document(&mut state, pages());
        assert_eq!(stats.pages_seen, 3);
        assert_eq!(stats.pages_skipped, 1);
        assert_eq!(stats.paragraph_count, 4);
    }

    #[test]
    fn test_finish_document_continues_numbering() {
        let segmenter = segmenter(false);
        let mut state = PackerState::new();
        segmenter.segment_document(&mut state, pages());
        assert_eq!(state.counter(), 3);

        let mut next = segmenter.finish_document(state);
        let (records, _) = segmenter.segment_document(&mut next, pages());
        assert_eq!(records[0].paragraph_index(), 5);
        assert_eq!(records[0].page(), 1);
    }

    #[test]
    fn test_last_page_ordinal() {
        let page = Page::new(u32::MAX, "Last page text. It has enough words.");
        for parallel in [false, true] {
            let records = segmenter(parallel).segment([page.clone()]);
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].page(), u32::MAX);
        }

        let selected = Segmenter::builder()
            .with_options(SegmentOptions::new().with_min_word_count(3).with_max_words(8))
            .with_pages(PageSelection::Range(u32::MAX - 1..=u32::MAX))
            .build()
            .unwrap();
        assert_eq!(selected.segment([page]).len(), 1);
    }

    #[test]
    fn test_finish_document_at_counter_limit() {
        let segmenter = segmenter(false);
        let next = segmenter.finish_document(PackerState::starting_at(u32::MAX));
        assert_eq!(next.counter(), u32::MAX);
    }

    #[test]
    fn test_segment_is_deterministic() {
        let segmenter = segmenter(true);
        assert_eq!(segmenter.segment(pages()), segmenter.segment(pages()));
    }
}
