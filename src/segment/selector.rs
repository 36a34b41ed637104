//! Irrelevance selector: a 0/1 knapsack with a precedence constraint over
//! the segmentation graph.
//!
//! The capacity budget is the scope's inclusive line count. Segments the
//! optimizer keeps are informative; everything else is emitted as the
//! blacklist of locations to drop from feature extraction. Items are
//! enumerated in the graph's BFS-from-root order, so the precedence check
//! runs against a guaranteed order rather than incidental set iteration.

use crate::core::Span;
use crate::segment::graph::{SegmentGraph, SegmentId};

/// Minimum scope size worth pruning at all
const MIN_CAPACITY: usize = 3;

/// Outcome of one selection pass. `kept` and `discarded` together cover
/// every non-root segment exactly once.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub kept: Vec<SegmentId>,
    pub discarded: Vec<SegmentId>,
}

/// Solve the selection problem for a graph bounded by `scope`.
///
/// The root is implicitly relevant and excluded from the optimization.
/// Scopes of three lines or fewer, and graphs with at most one non-root
/// segment, never produce a blacklist.
pub fn select(graph: &SegmentGraph, scope: Span) -> Selection {
    let order = graph.bfs_order();
    let capacity = scope.line_count();

    if capacity <= MIN_CAPACITY || order.len() <= 1 {
        return Selection {
            kept: order,
            discarded: Vec::new(),
        };
    }

    let profits: Vec<f64> = order.iter().map(|&id| graph.segment(id).benefit).collect();
    let weights: Vec<usize> = order.iter().map(|&id| graph.segment(id).weight).collect();
    let kept_mask = solve_knapsack(graph, &order, &profits, &weights, capacity);

    let mut selection = Selection::default();
    for (index, &id) in order.iter().enumerate() {
        if kept_mask[index] {
            selection.kept.push(id);
        } else {
            selection.discarded.push(id);
        }
    }
    selection
}

/// Blacklisted locations for a graph bounded by `scope`
pub fn irrelevant_spans(graph: &SegmentGraph, scope: Span) -> Vec<Span> {
    select(graph, scope)
        .discarded
        .iter()
        .map(|&id| graph.segment(id).span)
        .collect()
}

fn solve_knapsack(
    graph: &SegmentGraph,
    order: &[SegmentId],
    profits: &[f64],
    weights: &[usize],
    capacity: usize,
) -> Vec<bool> {
    let n = order.len();
    let mut opt = vec![vec![0.0_f64; capacity + 1]; n + 1];

    for i in 1..=n {
        let item_weight = weights[i - 1];
        let item_profit = profits[i - 1];
        for w in 0..=capacity {
            let skip = opt[i - 1][w];
            opt[i][w] = if item_weight <= w {
                skip.max(item_profit + opt[i - 1][w - item_weight])
            } else {
                skip
            };
        }
    }

    // Backtrack: an item is taken only when doing so actually changed the
    // optimum and its enumeration predecessor is a direct graph neighbor
    // (the root stands in as predecessor of the first item).
    let root = graph.root();
    let mut kept = vec![false; n];
    let mut w = capacity;
    for i in (1..=n).rev() {
        if opt[i][w] <= opt[i - 1][w] {
            continue;
        }
        let precedent = if i >= 2 { Some(order[i - 2]) } else { root };
        let adjacent = match precedent {
            Some(prev) => graph.edge_between(prev, order[i - 1]),
            None => false,
        };
        if adjacent {
            kept[i - 1] = true;
            w = w.saturating_sub(weights[i - 1]);
        }
    }
    kept
}
