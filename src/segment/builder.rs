//! Graph builder: a single bounded walk over one scope of a syntax unit.
//!
//! Blocks move through the states unvisited -> queued (vertex added) ->
//! linked (edge to their parent segment) -> expanded (their own children
//! visited); re-expanding an expanded block is a no-op, which guarantees
//! termination when outsider and child traversals overlap.

use crate::core::Result;
use crate::segment::graph::{SegmentGraph, SegmentId};
use crate::segment::score;
use crate::syntax::{NodeId, NodeKind, SyntaxUnit};
use std::collections::{HashMap, HashSet};

pub struct GraphBuilder<'a> {
    unit: &'a SyntaxUnit,
    scope: NodeId,
    graph: SegmentGraph,
    /// Builder-local score accumulators, written once into the finished
    /// graph; segments themselves stay immutable during the walk.
    weights: HashMap<SegmentId, usize>,
    benefits: HashMap<SegmentId, f64>,
    expanded: HashSet<NodeId>,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(unit: &'a SyntaxUnit, scope: NodeId) -> Self {
        Self {
            unit,
            scope,
            graph: SegmentGraph::new(),
            weights: HashMap::new(),
            benefits: HashMap::new(),
            expanded: HashSet::new(),
        }
    }

    /// Build the segmentation graph for the whole unit
    pub fn build_unit(unit: &'a SyntaxUnit) -> Result<SegmentGraph> {
        Self::new(unit, unit.root()).build()
    }

    /// Build the segmentation graph bounded by one scope node
    pub fn build_scope(unit: &'a SyntaxUnit, scope: NodeId) -> Result<SegmentGraph> {
        Self::new(unit, scope).build()
    }

    pub fn build(mut self) -> Result<SegmentGraph> {
        if let Some(first) = self.unit.first_block_within(self.scope) {
            let root = self.queue(first);
            self.graph.make_root(root);
            self.expand(first)?;
        }
        self.graph.finalize_scores(&self.weights, &self.benefits);
        Ok(self.graph)
    }

    /// Add a vertex for a node (state: queued). Idempotent per node.
    fn queue(&mut self, node: NodeId) -> SegmentId {
        let syntax = self.unit.node(node);
        let span = syntax.span;
        let id = self
            .graph
            .add_vertex(node, syntax.label.clone(), span, self.unit.depth(node));
        self.weights.entry(id).or_insert_with(|| score::weight(&span));
        self.benefits.entry(id).or_insert(0.0);
        id
    }

    /// Visit a block's own children (state: queued -> expanded)
    fn expand(&mut self, block: NodeId) -> Result<()> {
        if !self.expanded.insert(block) {
            return Ok(());
        }
        let segment = self.queue(block);

        for child in self.unit.nested_blocks(block) {
            let child_segment = self.queue(child);
            if !self.graph.is_descendant(segment, child_segment) {
                self.link(segment, child_segment)?;
            }
            self.expand(child)?;
        }

        for call in self.unit.calls_within(block) {
            if let Some(decl) = self.unit.resolve_declaration(call) {
                if self.unit.is_within(decl, self.scope) {
                    continue;
                }
                if let Some(outsider) = self.unit.first_block_within(decl) {
                    let outsider_segment = self.queue(outsider);
                    if !self.graph.is_descendant(segment, outsider_segment) {
                        self.link(segment, outsider_segment)?;
                    }
                    self.expand(outsider)?;
                }
            }
        }

        for type_ref in self.unit.type_refs_within(block) {
            if let Some(decl) = self.unit.resolve_declaration(type_ref) {
                if self.unit.node(decl).kind != NodeKind::TypeDecl {
                    continue;
                }
                match self.unit.first_block_within(decl) {
                    Some(type_block) => {
                        let type_segment = self.queue(type_block);
                        if !self.graph.is_descendant(segment, type_segment) {
                            self.link(segment, type_segment)?;
                        }
                        self.expand(type_block)?;
                    }
                    None => {
                        // block-less declaration: attach directly, no recursion
                        let type_segment = self.queue(decl);
                        if !self.graph.is_descendant(segment, type_segment) {
                            self.link(segment, type_segment)?;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Commit an edge (state: linked) and apply its side effects: the target
    /// earns its reuse benefit, and a containing source sheds the weight it
    /// was double-counting.
    fn link(&mut self, from: SegmentId, to: SegmentId) -> Result<()> {
        self.graph.add_edge(from, to)?;

        let to_segment = self.graph.segment(to);
        let earned = score::benefit(self.unit, to_segment.node, to_segment.depth);
        *self.benefits.entry(to).or_insert(0.0) += earned;

        let from_span = self.graph.segment(from).span;
        let to_span = self.graph.segment(to).span;
        if from_span.contains(&to_span) {
            let to_weight = *self.weights.get(&to).unwrap_or(&0);
            let from_weight = self.weights.entry(from).or_insert(0);
            *from_weight = from_weight.saturating_sub(to_weight);
        }
        Ok(())
    }
}
