pub mod errors;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use errors::{Error, Result};

/// Language enumeration for supported corpus languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Rust,
    Unknown,
}

impl Language {
    /// Get file extensions for this language
    pub fn extensions(&self) -> &[&str] {
        match self {
            Language::Rust => &["rs"],
            Language::Unknown => &[],
        }
    }

    pub fn from_extension(ext: &str) -> Language {
        match ext {
            "rs" => Language::Rust,
            _ => Language::Unknown,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Language::Rust => "Rust",
            Language::Unknown => "Unknown",
        }
    }
}

/// A line range in one source file. All consumers measure through
/// `line_count`, which is order-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start_line: usize,
    pub end_line: usize,
}

impl Span {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
        }
    }

    /// Inclusive line count covered by this span
    pub fn line_count(&self) -> usize {
        self.end_line.abs_diff(self.start_line) + 1
    }

    /// Whether this span textually contains `other`
    pub fn contains(&self, other: &Span) -> bool {
        self.start_line <= other.start_line && other.end_line <= self.end_line
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start_line <= other.end_line && other.start_line <= self.end_line
    }
}

/// Result of ranking one corpus by typicality
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypicalityReport {
    pub corpus_root: PathBuf,
    pub timestamp: DateTime<Utc>,
    pub bandwidth: f64,
    pub document_count: usize,
    pub ranking: Vec<RankedDocument>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RankedDocument {
    pub rank: usize,
    pub source: PathBuf,
    pub score: f64,
}

/// Result of partitioning a corpus around its typical documents
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RepresentativeReport {
    pub corpus_root: PathBuf,
    pub timestamp: DateTime<Utc>,
    pub typical_count: usize,
    pub regions: Vec<Region>,
}

/// One typical document together with the documents it best explains
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Region {
    pub source: PathBuf,
    pub typicality: f64,
    pub covered: Vec<PathBuf>,
}

/// Debug view of a single file's segmentation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SegmentationReport {
    pub file: PathBuf,
    pub scope: Option<String>,
    pub segments: Vec<SegmentSummary>,
    pub blacklist: Vec<Span>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SegmentSummary {
    pub label: String,
    pub span: Span,
    pub weight: usize,
    pub benefit: f64,
    pub depth: usize,
    pub is_root: bool,
}
