//! Page text normalization.
//!
//! Extracted page text arrives with hard line wraps, stray non-ASCII glyphs
//! (ligatures, bullets, private-use characters) and uneven spacing. Before
//! packing, every page goes through [`normalize`], which reduces it to a
//! single line of printable ASCII separated by single spaces.

use std::sync::LazyLock;

use regex::Regex;

/// Characters outside printable ASCII, excluding ASCII whitespace.
///
/// Non-ASCII is dropped rather than transliterated.
static UNPRINTABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\x09-\x0D\x20-\x7E]+").expect("unprintable pattern is valid")
});

/// Runs of whitespace, newlines included.
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Normalize raw page text.
///
/// Drops every character outside printable ASCII, collapses each run of
/// whitespace (newline runs included) into one space, and trims both ends.
///
/// # Example
///
/// ```
/// use paraseg::normalize;
///
/// assert_eq!(normalize("  caf\u{e9}\n\n  au   lait "), "caf au lait");
/// ```
pub fn normalize(raw: &str) -> String {
    let ascii = UNPRINTABLE.replace_all(raw, "");
    WHITESPACE.replace_all(&ascii, " ").trim().to_string()
}

/// Number of whitespace-delimited tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Length of `text` in characters.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
