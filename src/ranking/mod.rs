//! Document ranking: typicality scoring and representative-region
//! partitioning over a corpus of feature strings.

pub mod representative;
pub mod similarity;
pub mod typicality;

use std::path::PathBuf;

pub use representative::{partition_regions, RegionGroup};
pub use similarity::normalized_similarity;
pub use typicality::{TypicalityRanker, DEFAULT_BANDWIDTH};

/// One corpus member reduced to its feature string. Two documents are
/// distinct per distinct source, even when their text is identical.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub source: PathBuf,
    pub text: String,
}

impl Document {
    pub fn new(source: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }
}

/// A document index paired with its typicality score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDocument {
    pub index: usize,
    pub score: f64,
}
