//! Weight and benefit scoring for segments.
//!
//! Weight is the inclusive line count of a node. Benefit measures identifier
//! reuse: elements referenced more often, and at shallower depth, contribute
//! proportionally more information value to a segment.

use crate::core::Span;
use crate::syntax::{NodeId, SyntaxUnit};
use std::collections::HashSet;

/// Initial weight of a node: its inclusive line count
pub fn weight(span: &Span) -> usize {
    span.line_count()
}

/// Identifier-reuse benefit of a node at a given depth.
///
/// For every direct child sub-expression, each top-most name-like element is
/// resolved to its declaration; per distinct declaration, the number of other
/// locations in the unit referring to it (the declaration site excluded)
/// contributes `count / depth`.
pub fn benefit(unit: &SyntaxUnit, node: NodeId, depth: usize) -> f64 {
    if depth == 0 {
        return 0.0;
    }
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut total = 0.0;
    for element in unit.name_elements(node) {
        if let Some(decl) = unit.resolve_declaration(element) {
            if seen.insert(decl) {
                let uses = unit.reference_count(decl).saturating_sub(1);
                total += uses as f64 / depth as f64;
            }
        }
    }
    total
}
