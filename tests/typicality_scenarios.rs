//! Ranking scenarios over a corpus of near-duplicate implementations.

use exemplar::{Document, TypicalityRanker};
use pretty_assertions::assert_eq;

/// The memoized iterative variant sits at the textual center of the corpus:
/// every other variant is a different small edit of it, so any two variants
/// differ from each other by more than either differs from the center.
fn fibonacci_corpus() -> Vec<Document> {
    let center = "fn fib(n: u64) -> u64 {\n    let mut memo = vec![0, 1];\n    for i in 2..=n as usize {\n        let next = memo[i - 1] + memo[i - 2];\n        memo.push(next);\n    }\n    memo[n as usize]\n}\n";
    let renamed_table = center.replace("memo", "cache");
    let renamed_value = center.replace("next", "value");
    let renamed_fn = center.replace("fib", "fibonacci");
    let renamed_index = center.replace("i -", "idx -").replace("for i in", "for idx in");
    let renamed_arg = center.replace("n:", "count:").replace("n as usize", "count as usize");

    vec![
        Document::new("table_rename.rs", renamed_table),
        Document::new("value_rename.rs", renamed_value),
        Document::new("memoized_iterative.rs", center),
        Document::new("fn_rename.rs", renamed_fn),
        Document::new("index_rename.rs", renamed_index),
        Document::new("arg_rename.rs", renamed_arg),
    ]
}

#[test]
fn memoized_iterative_variant_ranks_first() {
    let corpus = fibonacci_corpus();
    let ranker = TypicalityRanker::new().with_bandwidth(0.3);

    let top = ranker.rank(&corpus, Some(1));
    assert_eq!(top.len(), 1);
    assert_eq!(
        corpus[top[0].index].source.display().to_string(),
        "memoized_iterative.rs"
    );
}

#[test]
fn ranking_is_reproducible_across_runs() {
    let corpus = fibonacci_corpus();
    let ranker = TypicalityRanker::new().with_bandwidth(0.3);

    let first: Vec<(usize, f64)> = ranker
        .rank(&corpus, None)
        .iter()
        .map(|d| (d.index, d.score))
        .collect();
    let second: Vec<(usize, f64)> = ranker
        .rank(&corpus, None)
        .iter()
        .map(|d| (d.index, d.score))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn bandwidth_changes_scores_but_not_degenerates() {
    let corpus = fibonacci_corpus();
    let narrow = TypicalityRanker::new().with_bandwidth(0.1).rank(&corpus, None);
    let wide = TypicalityRanker::new().with_bandwidth(1.0).rank(&corpus, None);
    assert_eq!(narrow.len(), corpus.len());
    assert_eq!(wide.len(), corpus.len());
}

#[test]
fn scores_are_finite_and_positive() {
    let corpus = fibonacci_corpus();
    for scored in TypicalityRanker::new().rank(&corpus, None) {
        assert!(scored.score.is_finite());
        assert!(scored.score > 0.0);
    }
}
