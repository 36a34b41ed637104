//! Identifier splitting and best-effort spelling correction. Pure
//! functions, no shared state.

use crate::ranking::similarity::levenshtein_distance;

/// Split an identifier into lowercase sub-words on underscores, digits and
/// camel-case boundaries. Acronym runs stay together: `parseHTTPHeader`
/// yields `parse`, `http`, `header`.
pub fn split_identifier(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = name.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut current, &mut words);
            continue;
        }
        if !current.is_empty() && is_boundary(&chars, i) {
            flush(&mut current, &mut words);
        }
        current.push(c.to_ascii_lowercase());
    }
    flush(&mut current, &mut words);
    words
}

fn is_boundary(chars: &[char], i: usize) -> bool {
    let current = chars[i];
    let previous = chars[i - 1];
    if current.is_ascii_digit() != previous.is_ascii_digit() {
        return true;
    }
    if current.is_uppercase() && previous.is_lowercase() {
        return true;
    }
    // end of an acronym run: "HTTPServer" breaks before "Server"
    if current.is_uppercase()
        && previous.is_uppercase()
        && chars.get(i + 1).is_some_and(|next| next.is_lowercase())
    {
        return true;
    }
    false
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

/// Best-effort spelling correction: the first vocabulary entry within edit
/// distance 1 of `word`, or `word` unchanged. A word already in the
/// vocabulary is returned as-is.
pub fn correct(word: &str, vocabulary: &[String]) -> String {
    if vocabulary.iter().any(|v| v == word) {
        return word.to_string();
    }
    vocabulary
        .iter()
        .find(|candidate| levenshtein_distance(word, candidate) <= 1)
        .cloned()
        .unwrap_or_else(|| word.to_string())
}
