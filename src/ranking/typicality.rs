//! Typicality scoring: kernel-density centrality over pairwise similarity.
//!
//! Every ordered pair of documents contributes a Gaussian kernel weight of
//! its dissimilarity to the first document's score; the most typical
//! documents are the ones closest to the rest of the corpus. The full
//! Cartesian square is evaluated in O(n^2) similarity calls, which is fine
//! for the corpus sizes this tool targets.

use crate::ranking::{similarity, Document, ScoredDocument};
use rayon::prelude::*;

pub const DEFAULT_BANDWIDTH: f64 = 0.3;

#[derive(Debug, Clone, Copy)]
pub struct TypicalityRanker {
    bandwidth: f64,
    parallel: bool,
}

impl Default for TypicalityRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl TypicalityRanker {
    pub fn new() -> Self {
        Self {
            bandwidth: DEFAULT_BANDWIDTH,
            parallel: true,
        }
    }

    pub fn with_bandwidth(mut self, bandwidth: f64) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    /// Evaluate pairwise scores on the current thread only
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Rank `documents` by typicality, highest first. Ties keep the
    /// original enumeration order, so repeated runs over the same corpus
    /// produce identical rankings. `top_k` truncates the result;
    /// `Some(0)` and an empty corpus both yield an empty ranking.
    pub fn rank(&self, documents: &[Document], top_k: Option<usize>) -> Vec<ScoredDocument> {
        if documents.is_empty() || top_k == Some(0) {
            return Vec::new();
        }
        if documents.len() == 1 {
            return vec![ScoredDocument {
                index: 0,
                score: 0.0,
            }];
        }

        let scores = self.pairwise_scores(documents);
        let mut ranked: Vec<ScoredDocument> = scores
            .into_iter()
            .enumerate()
            .map(|(index, score)| ScoredDocument { index, score })
            .collect();
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.index.cmp(&b.index))
        });
        if let Some(k) = top_k {
            ranked.truncate(k);
        }
        ranked
    }

    /// Score every document against the whole corpus. Rows are independent,
    /// so the parallel path reduces per row and merges nothing shared.
    fn pairwise_scores(&self, documents: &[Document]) -> Vec<f64> {
        let n = documents.len();
        let t1 = 1.0 / ((n as f64 - 1.0) * (2.0 * std::f64::consts::PI).sqrt());
        let t2 = 2.0 * self.bandwidth * self.bandwidth;

        let row = |i: usize| -> f64 {
            documents
                .iter()
                .map(|other| {
                    let sim = similarity::normalized_similarity(&documents[i].text, &other.text);
                    kernel_weight(1.0 - sim, t1, t2)
                })
                .sum()
        };

        if self.parallel {
            (0..n).into_par_iter().map(row).collect()
        } else {
            (0..n).map(row).collect()
        }
    }
}

/// Gaussian kernel weight of one pairwise dissimilarity
fn kernel_weight(distance: f64, t1: f64, t2: f64) -> f64 {
    t1 * (-(distance * distance) / t2).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn documents(texts: &[&str]) -> Vec<Document> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Document::new(format!("doc{i}.rs"), *text))
            .collect()
    }

    #[test]
    fn test_empty_corpus_ranks_empty() {
        let ranker = TypicalityRanker::new();
        assert!(ranker.rank(&[], None).is_empty());
    }

    #[test]
    fn test_zero_top_k_ranks_empty() {
        let ranker = TypicalityRanker::new();
        let docs = documents(&["alpha", "beta"]);
        assert!(ranker.rank(&docs, Some(0)).is_empty());
    }

    #[test]
    fn test_singleton_corpus_ranks_itself() {
        let ranker = TypicalityRanker::new();
        let docs = documents(&["alone"]);
        let ranked = ranker.rank(&docs, None);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].index, 0);
    }

    #[test]
    fn test_central_document_ranks_first() {
        // "abcd" sits between "abcf" and "abzd"; the outlier is far from all
        let ranker = TypicalityRanker::new().sequential();
        let docs = documents(&["abcf", "abcd", "abzd", "qqqqqqqq"]);
        let ranked = ranker.rank(&docs, None);
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked.last().unwrap().index, 3);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let ranker = TypicalityRanker::new();
        let docs = documents(&["one fish", "two fish", "red fish", "blue fish"]);
        let first: Vec<usize> = ranker.rank(&docs, None).iter().map(|d| d.index).collect();
        let second: Vec<usize> = ranker.rank(&docs, None).iter().map(|d| d.index).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_identical_texts_tie_break_on_enumeration_order() {
        let ranker = TypicalityRanker::new();
        let docs = documents(&["same", "same", "same"]);
        let ranked = ranker.rank(&docs, None);
        let indices: Vec<usize> = ranked.iter().map(|d| d.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let docs = documents(&["let a = 1;", "let b = 2;", "let a = 10;", "fn main() {}"]);
        let parallel = TypicalityRanker::new().rank(&docs, None);
        let sequential = TypicalityRanker::new().sequential().rank(&docs, None);
        for (p, s) in parallel.iter().zip(sequential.iter()) {
            assert_eq!(p.index, s.index);
            assert!((p.score - s.score).abs() < 1e-12);
        }
    }

    #[test]
    fn test_top_k_truncates() {
        let ranker = TypicalityRanker::new();
        let docs = documents(&["aa", "ab", "ac", "zz"]);
        assert_eq!(ranker.rank(&docs, Some(2)).len(), 2);
    }
}
