//! Feature-string extraction: the bridge between segmentation and ranking.
//!
//! A document's feature text is the concatenation of the source regions not
//! claimed by its blacklist, restricted to a caller-supplied set of relevant
//! member names (the whole unit when none are given). Token normalization is
//! an opt-in pass that reduces the kept regions to corrected, stop-word-free
//! identifier sub-words.

use crate::core::Span;
use crate::syntax::SyntaxUnit;
use crate::text::identifier::{correct, split_identifier};
use crate::text::stopwords::StopwordSet;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct FeatureOptions {
    /// Reduce kept regions to identifier sub-words instead of raw text
    pub normalize: bool,
    pub stopwords: StopwordSet,
}

impl FeatureOptions {
    pub fn raw() -> Self {
        Self::default()
    }

    pub fn normalized(stopwords: StopwordSet) -> Self {
        Self {
            normalize: true,
            stopwords,
        }
    }
}

/// Build the feature text for one source file.
///
/// `members` names the relevant functions; unresolvable names are ignored,
/// and an empty list selects the whole unit. Lines covered by any blacklist
/// span are dropped.
pub fn feature_text(
    source: &str,
    unit: &SyntaxUnit,
    blacklist: &[Span],
    members: &[String],
    options: &FeatureOptions,
) -> String {
    let member_spans: Vec<Span> = members
        .iter()
        .filter_map(|name| unit.function_named(name))
        .map(|id| unit.locate(id))
        .collect();

    let kept: Vec<&str> = source
        .lines()
        .enumerate()
        .filter(|(index, _)| {
            let line = index + 1;
            let relevant = members.is_empty()
                || member_spans
                    .iter()
                    .any(|span| span.start_line <= line && line <= span.end_line);
            let blacklisted = blacklist
                .iter()
                .any(|span| span.start_line <= line && line <= span.end_line);
            relevant && !blacklisted
        })
        .map(|(_, text)| text)
        .collect();

    if options.normalize {
        normalize_tokens(&kept, &options.stopwords)
    } else {
        kept.join("\n")
    }
}

/// Reduce kept lines to a stream of identifier sub-words: split, filter
/// stop words, and spell-correct rare words against the words the unit
/// itself uses more than once.
fn normalize_tokens(lines: &[&str], stopwords: &StopwordSet) -> String {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut words = Vec::new();
    for line in lines {
        for token in identifier_tokens(line) {
            for word in split_identifier(&token) {
                if stopwords.contains(&word) {
                    continue;
                }
                *counts.entry(word.clone()).or_insert(0) += 1;
                words.push(word);
            }
        }
    }

    let mut vocabulary: Vec<String> = counts
        .iter()
        .filter(|(_, &count)| count > 1)
        .map(|(word, _)| word.clone())
        .collect();
    vocabulary.sort();

    words
        .into_iter()
        .map(|word| correct(&word, &vocabulary))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Identifier-shaped tokens of one line: maximal alphanumeric/underscore
/// runs that start with a letter or underscore
fn identifier_tokens(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in line.chars() {
        if c.is_alphanumeric() || c == '_' {
            if current.is_empty() && c.is_ascii_digit() {
                continue;
            }
            current.push(c);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
