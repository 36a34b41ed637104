// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod ranking;
pub mod segment;
pub mod syntax;
pub mod text;

// Re-export commonly used types
pub use crate::core::{
    Language, RankedDocument, Region, RepresentativeReport, SegmentationReport, SegmentSummary,
    Span, TypicalityReport,
};

pub use crate::segment::{
    irrelevant_spans, select, GraphBuilder, Segment, SegmentGraph, SegmentId, Selection,
};

pub use crate::ranking::{
    normalized_similarity, partition_regions, Document, ScoredDocument, TypicalityRanker,
    DEFAULT_BANDWIDTH,
};

pub use crate::syntax::{NodeId, NodeKind, SyntaxNode, SyntaxUnit};

pub use crate::text::{feature_text, split_identifier, FeatureOptions, StopwordSet};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
