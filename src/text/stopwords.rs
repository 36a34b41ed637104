//! Stop-word filtering over identifier sub-words.
//!
//! A `StopwordSet` is an explicit value built at construction time and
//! passed into tokenizer calls; there is no global singleton. The bundled
//! sets are the `stop-words` crate's English corpus and a list of
//! programming filler terms that carry no signal in identifiers.

use std::collections::HashSet;

/// Filler terms common in identifiers across codebases
const PROGRAMMING_TERMS: &[&str] = &[
    "get", "set", "new", "make", "create", "init", "impl", "fn", "let", "mut", "pub", "use",
    "mod", "crate", "struct", "enum", "trait", "type", "self", "super", "return", "value",
    "values", "data", "item", "items", "obj", "object", "tmp", "temp", "result", "results",
    "util", "utils", "helper", "helpers", "handle", "handler", "info", "context", "ctx",
    "main", "test", "default", "string", "str", "vec", "list", "map", "num", "idx", "index",
];

#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The `stop-words` crate's English corpus
    pub fn english() -> Self {
        let words = stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self { words }
    }

    /// Bundled programming filler terms
    pub fn programming() -> Self {
        Self::from_words(PROGRAMMING_TERMS)
    }

    pub fn from_words(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Union with another set, consuming both
    pub fn merged(mut self, other: StopwordSet) -> Self {
        self.words.extend(other.words);
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Whether `word` is a stop word in any of the given corpora
pub fn is_stop_word(word: &str, corpora: &[StopwordSet]) -> bool {
    corpora.iter().any(|set| set.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_corpus_contains_articles() {
        let set = StopwordSet::english();
        assert!(set.contains("the"));
        assert!(set.contains("The"));
        assert!(!set.contains("segmentation"));
    }

    #[test]
    fn test_programming_terms() {
        let set = StopwordSet::programming();
        assert!(set.contains("get"));
        assert!(set.contains("tmp"));
        assert!(!set.contains("typicality"));
    }

    #[test]
    fn test_merged_union() {
        let merged = StopwordSet::from_words(&["alpha"]).merged(StopwordSet::from_words(&["beta"]));
        assert!(merged.contains("alpha"));
        assert!(merged.contains("beta"));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_is_stop_word_across_corpora() {
        let corpora = [StopwordSet::from_words(&["one"]), StopwordSet::from_words(&["two"])];
        assert!(is_stop_word("one", &corpora));
        assert!(is_stop_word("two", &corpora));
        assert!(!is_stop_word("three", &corpora));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        assert!(!StopwordSet::empty().contains("the"));
    }
}
