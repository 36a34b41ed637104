//! Representativeness: partition the corpus into regions anchored at the
//! typical documents, then rank the typical documents by how many others
//! they explain.

use crate::ranking::{similarity, Document, TypicalityRanker};

/// One typical document and the non-typical documents it best explains
#[derive(Debug, Clone)]
pub struct RegionGroup {
    /// Index of the anchoring typical document
    pub typical: usize,
    /// The anchor's typicality score
    pub typicality: f64,
    /// Indices of the documents covered by this anchor
    pub covered: Vec<usize>,
}

/// Partition `documents` into regions around their `typical_count` most
/// typical members and rank the regions by size, largest first.
///
/// Every non-typical document lands in exactly one region: the one anchored
/// at its most similar typical document, first anchor winning ties. With an
/// empty corpus or `typical_count == 0` the result is empty.
pub fn partition_regions(
    documents: &[Document],
    typical_count: usize,
    ranker: &TypicalityRanker,
) -> Vec<RegionGroup> {
    let typical = ranker.rank(documents, Some(typical_count));
    if typical.is_empty() {
        return Vec::new();
    }

    let mut groups: Vec<RegionGroup> = typical
        .iter()
        .map(|scored| RegionGroup {
            typical: scored.index,
            typicality: scored.score,
            covered: Vec::new(),
        })
        .collect();

    for (index, document) in documents.iter().enumerate() {
        if typical.iter().any(|t| t.index == index) {
            continue;
        }
        let anchor = nearest_anchor(document, documents, &typical);
        groups[anchor].covered.push(index);
    }

    // largest region first; equal sizes keep typicality order
    groups.sort_by(|a, b| b.covered.len().cmp(&a.covered.len()));
    groups
}

/// Index into `typical` of the anchor most similar to `document`.
/// Strictly-greater comparison keeps the first anchor on ties.
fn nearest_anchor(
    document: &Document,
    documents: &[Document],
    typical: &[crate::ranking::ScoredDocument],
) -> usize {
    let mut best = 0;
    let mut best_similarity = f64::MIN;
    for (position, anchor) in typical.iter().enumerate() {
        let sim =
            similarity::normalized_similarity(&document.text, &documents[anchor.index].text);
        if sim > best_similarity {
            best_similarity = sim;
            best = position;
        }
    }
    best
}
