//! Page-level input types.

use serde::{Deserialize, Serialize};

/// Form feed, the page separator written by `pdftotext` and friends.
pub const FORM_FEED: &str = "\u{0C}";

/// One unit of source text submitted to the packer as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Zero-based page ordinal as supplied by the caller
    pub index: u32,

    /// Raw page text (normalized by the segmenter before packing)
    pub text: String,
}

impl Page {
    /// Create a page from its zero-based index and raw text.
    pub fn new(index: u32, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// The 1-based page number recorded on paragraphs from this page.
    ///
    /// Saturates at `u32::MAX`, matching the `page` of records from the
    /// packer.
    pub fn number(&self) -> u32 {
        self.index.saturating_add(1)
    }

    /// Split a text dump into pages on `delimiter`, numbering from zero.
    ///
    /// A trailing delimiter does not produce an extra empty page.
    pub fn split_text(text: &str, delimiter: &str) -> Vec<Page> {
        if delimiter.is_empty() {
            return vec![Page::new(0, text)];
        }

        let mut parts: Vec<&str> = text.split(delimiter).collect();
        if parts.len() > 1 && parts.last().is_some_and(|p| p.trim().is_empty()) {
            parts.pop();
        }

        parts
            .into_iter()
            .enumerate()
            .map(|(i, part)| Page::new(i as u32, part))
            .collect()
    }
}

impl<S: Into<String>> From<(S, u32)> for Page {
    fn from((text, index): (S, u32)) -> Self {
        Page::new(index, text)
    }
}
