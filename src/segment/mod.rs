//! Segmentation: carving one bounded scope into a DAG of code blocks and
//! selecting the informative ones.

pub mod builder;
pub mod graph;
pub mod score;
pub mod selector;

pub use builder::GraphBuilder;
pub use graph::{Edge, Segment, SegmentGraph, SegmentId};
pub use selector::{irrelevant_spans, select, Selection};
