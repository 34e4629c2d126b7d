//! Deterministic punctuation-based sentence splitter.

use std::collections::HashSet;

use super::SentenceSplitter;

/// English abbreviations that end in a period without ending a sentence.
///
/// Stored lowercase, without the trailing period.
static ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e", "cf",
    "al", "inc", "ltd", "co", "corp", "dept", "est", "approx", "fig", "figs", "eq", "no", "nos",
    "vol", "vols", "pp", "ch", "sec", "ed", "eds", "rev", "gen", "gov", "u.s", "u.k", "a.m",
    "p.m", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

/// Splits on `.`, `!` and `?` followed by whitespace or end of text.
///
/// Closing quotes and brackets directly after the terminator stay with the
/// sentence. A period does not end a sentence when the word it closes is a
/// known abbreviation or a single-letter initial.
#[derive(Debug, Clone)]
pub struct PunctuationSplitter {
    abbreviations: HashSet<String>,
}

impl PunctuationSplitter {
    /// Create a splitter with the built-in English abbreviation list.
    pub fn new() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Create a splitter that treats every terminator as a boundary.
    pub fn without_abbreviations() -> Self {
        Self {
            abbreviations: HashSet::new(),
        }
    }

    /// Add abbreviations (case-insensitive, trailing period optional).
    pub fn with_abbreviations<I, S>(mut self, abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for abbr in abbreviations {
            let key = abbr.as_ref().trim().trim_end_matches('.').to_lowercase();
            if !key.is_empty() {
                self.abbreviations.insert(key);
            }
        }
        self
    }

    /// Whether the word ending at a period is an abbreviation or initial.
    fn is_abbreviation(&self, before_period: &str) -> bool {
        let Some(word) = before_period.split_whitespace().last() else {
            return false;
        };
        let word = word.trim_start_matches(['(', '[', '{', '"', '\'']);
        let mut letters = word.chars();
        if matches!((letters.next(), letters.next()), (Some(c), None) if c.is_alphabetic()) {
            return true;
        }
        self.abbreviations.contains(&word.to_lowercase())
    }
}

impl Default for PunctuationSplitter {
    fn default() -> Self {
        Self::new()
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '\u{2019}' | '\u{201D}')
}

impl SentenceSplitter for PunctuationSplitter {
    fn name(&self) -> &str {
        "punctuation"
    }

    fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, c) = chars[i];
            if !is_terminator(c) {
                i += 1;
                continue;
            }

            let mut j = i + 1;
            while j < chars.len() && (is_terminator(chars[j].1) || is_closer(chars[j].1)) {
                j += 1;
            }
            let end = chars.get(j).map_or(text.len(), |&(p, _)| p);
            let at_break = chars.get(j).map_or(true, |&(_, next)| next.is_whitespace());
            let lone_period = c == '.' && !chars[i + 1..j].iter().any(|&(_, t)| is_terminator(t));

            if at_break && !(lone_period && self.is_abbreviation(&text[start..pos])) {
                let sentence = text[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                start = end;
            }
            i = j;
        }

        let rest = text[start..].trim();
        if !rest.is_empty() {
            sentences.push(rest.to_string());
        }
        sentences
    }
}
