//! Page selection.

use crate::error::{Error, Result};
use crate::model::Page;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Which pages enter the packer.
///
/// Page numbers here are 1-indexed, matching the `page` field of emitted
/// records. Pages left out never reach the packer and so do not advance
/// the document counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// Every page
    #[default]
    All,
    /// A range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Specific pages (1-indexed, sorted, unique)
    Pages(Vec<u32>),
}

impl PageSelection {
    /// Check if a 1-indexed page number is selected.
    pub fn includes(&self, number: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&number),
            PageSelection::Pages(pages) => pages.binary_search(&number).is_ok(),
        }
    }

    /// Check if a page is selected.
    pub fn includes_page(&self, page: &Page) -> bool {
        self.includes(page.number())
    }

    /// Parse a page selection string (e.g., "all", "1-10", "1,3,5-7").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(PageSelection::All);
        }

        if !s.contains(',') {
            if let Some((start, end)) = s.split_once('-') {
                return Ok(PageSelection::Range(parse_range(start, end)?));
            }
        }

        let mut pages = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if let Some((start, end)) = part.split_once('-') {
                pages.extend(parse_range(start, end)?);
            } else {
                pages.push(parse_page(part)?);
            }
        }

        pages.sort_unstable();
        pages.dedup();
        Ok(PageSelection::Pages(pages))
    }
}

impl FromStr for PageSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_page(s: &str) -> Result<u32> {
    let page: u32 = s
        .trim()
        .parse()
        .map_err(|_| Error::InvalidPageRange(format!("'{}' is not a page number", s.trim())))?;
    if page == 0 {
        return Err(Error::InvalidPageRange("pages are numbered from 1".into()));
    }
    Ok(page)
}

fn parse_range(start: &str, end: &str) -> Result<RangeInclusive<u32>> {
    let start = parse_page(start)?;
    let end = parse_page(end)?;
    if start > end {
        return Err(Error::InvalidPageRange(format!(
            "range {}-{} runs backwards",
            start, end
        )));
    }
    Ok(start..=end)
}
