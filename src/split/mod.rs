//! Sentence splitting capability.
//!
//! The packer does not detect sentence boundaries itself. It is handed a
//! [`SentenceSplitter`] and trusts whatever sequence it returns. Two
//! deterministic splitters ship with the crate; heavier detectors (NLP
//! models, language-specific rules) plug in by implementing the trait and
//! registering with a [`SplitterRegistry`].
//!
//! # Example
//!
//! ```
//! use paraseg::split::{SplitterRegistry, SentenceSplitter};
//!
//! let registry = SplitterRegistry::with_defaults();
//! let splitter = registry.resolve("punctuation").unwrap();
//! let sentences = splitter.split("Dr. Watson arrived. He was late.");
//! assert_eq!(sentences, vec!["Dr. Watson arrived.", "He was late."]);
//! ```

mod punctuation;
mod unicode;

pub use punctuation::PunctuationSplitter;
pub use unicode::UnicodeSentenceSplitter;

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Name of the splitter used when none is configured.
pub const DEFAULT_SPLITTER: &str = "punctuation";

/// Trait for sentence boundary detectors.
///
/// Implementations must not fail: any input, including empty or
/// whitespace-only text, yields a (possibly empty) ordered sequence.
/// Anything that can fail (loading a model, reading rules) belongs in the
/// constructor, before a splitter is handed to the packer.
pub trait SentenceSplitter: Send + Sync {
    /// Registry name of this splitter (lowercase).
    fn name(&self) -> &str;

    /// Split `text` into sentences, in order.
    fn split(&self, text: &str) -> Vec<String>;
}

/// Registry mapping splitter names to implementations.
pub struct SplitterRegistry {
    splitters: BTreeMap<String, Arc<dyn SentenceSplitter>>,
}

impl SplitterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            splitters: BTreeMap::new(),
        }
    }

    /// Create a registry with the built-in splitters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PunctuationSplitter::new()));
        registry.register(Arc::new(UnicodeSentenceSplitter::new()));
        registry
    }

    /// Register a splitter under its own name, replacing any previous one.
    pub fn register(&mut self, splitter: Arc<dyn SentenceSplitter>) {
        log::debug!("registering sentence splitter '{}'", splitter.name());
        self.splitters
            .insert(splitter.name().to_lowercase(), splitter);
    }

    /// Get a splitter by name (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn SentenceSplitter>> {
        self.splitters.get(&name.to_lowercase()).cloned()
    }

    /// Resolve a splitter by name, failing if it is not registered.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn SentenceSplitter>> {
        self.get_by_name(name).ok_or_else(|| {
            Error::CollaboratorUnavailable(format!(
                "no sentence splitter named '{}' (available: {})",
                name,
                self.names().join(", ")
            ))
        })
    }

    /// Check if a splitter is registered.
    pub fn supports(&self, name: &str) -> bool {
        self.splitters.contains_key(&name.to_lowercase())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.splitters.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for SplitterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_with_defaults() {
        let registry = SplitterRegistry::with_defaults();
        assert!(registry.supports("punctuation"));
        assert!(registry.supports("Unicode"));
        assert!(!registry.supports("spacy"));
        assert_eq!(registry.names(), vec!["punctuation", "unicode"]);
    }

    #[test]
    fn test_registry_resolve_unknown() {
        let registry = SplitterRegistry::with_defaults();
        let result = registry.resolve("en_core_web_sm");
        assert!(matches!(result, Err(Error::CollaboratorUnavailable(_))));
    }

    #[test]
    fn test_registry_empty() {
        let registry = SplitterRegistry::new();
        assert!(registry.names().is_empty());
        assert!(registry.resolve(DEFAULT_SPLITTER).is_err());
    }

    #[test]
    fn test_default_splitter_is_registered() {
        let registry = SplitterRegistry::default();
        let splitter = registry.resolve(DEFAULT_SPLITTER).unwrap();
        assert_eq!(splitter.name(), DEFAULT_SPLITTER);
    }
}
