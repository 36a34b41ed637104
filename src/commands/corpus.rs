//! Shared corpus pipeline: discover files, parse each into a unit, segment
//! it, and reduce it to its feature document.
//!
//! Per-file failures never abort the run. Malformed units are skipped
//! silently, parse failures are logged and skipped, and a cycle in a
//! segmentation graph (a builder invariant violation) is surfaced loudly
//! before that file is dropped.

use crate::core::{Error, Result};
use crate::io::walker::find_corpus_files;
use crate::ranking::Document;
use crate::segment::{selector, GraphBuilder};
use crate::syntax::SyntaxUnit;
use crate::text::{feature_text, FeatureOptions};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressIterator, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct CorpusOptions {
    pub members: Vec<String>,
    pub features: FeatureOptions,
    pub skip_segmentation: bool,
    pub parallel: bool,
    pub ignore_patterns: Vec<String>,
}

/// Reduce every corpus file under `root` to a feature document
pub fn build_documents(root: &Path, options: &CorpusOptions) -> anyhow::Result<Vec<Document>> {
    let files = find_corpus_files(root, options.ignore_patterns.clone())?;
    log::info!("analyzing {} file(s) under {}", files.len(), root.display());

    let progress = ProgressBar::new(files.len() as u64).with_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
            .expect("static progress template"),
    );

    let documents: Vec<Document> = if options.parallel {
        files
            .par_iter()
            .progress_with(progress)
            .filter_map(|path| analyze_file(path, options))
            .collect()
    } else {
        files
            .iter()
            .progress_with(progress)
            .filter_map(|path| analyze_file(path, options))
            .collect()
    };

    Ok(documents)
}

fn analyze_file(path: &PathBuf, options: &CorpusOptions) -> Option<Document> {
    match document_for(path, options) {
        Ok(document) => Some(document),
        Err(error) => {
            report_skip(path, &error);
            None
        }
    }
}

fn document_for(path: &Path, options: &CorpusOptions) -> Result<Document> {
    let source = std::fs::read_to_string(path)?;
    let unit = SyntaxUnit::parse(path, &source)?;

    let blacklist = if options.skip_segmentation {
        Vec::new()
    } else {
        let graph = GraphBuilder::build_unit(&unit)?;
        selector::irrelevant_spans(&graph, unit.locate(unit.root()))
    };

    let text = feature_text(&source, &unit, &blacklist, &options.members, &options.features);
    Ok(Document::new(path, text))
}

fn report_skip(path: &Path, error: &Error) {
    if error.is_invariant_violation() {
        log::error!("{}: {error}, skipping file", path.display());
    } else if matches!(error, Error::MalformedUnit(_)) {
        log::debug!("{}: no program element, skipped", path.display());
    } else {
        log::warn!("{}: {error}, skipping file", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn options() -> CorpusOptions {
        CorpusOptions {
            parallel: false,
            ..CorpusOptions::default()
        }
    }

    #[test]
    fn test_build_documents_over_small_corpus() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.rs"), "fn a() { let _x = 1; }\n").unwrap();
        fs::write(dir.path().join("b.rs"), "fn b() { let _y = 2; }\n").unwrap();
        let documents = build_documents(dir.path(), &options()).unwrap();
        assert_eq!(documents.len(), 2);
        assert!(documents[0].text.contains("fn a"));
    }

    #[test]
    fn test_unparsable_file_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("good.rs"), "fn good() {}\n").unwrap();
        fs::write(dir.path().join("bad.rs"), "fn {{{\n").unwrap();
        let documents = build_documents(dir.path(), &options()).unwrap();
        assert_eq!(documents.len(), 1);
    }

    #[test]
    fn test_import_only_file_is_skipped_silently() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("uses.rs"), "use std::fmt;\n").unwrap();
        let documents = build_documents(dir.path(), &options()).unwrap();
        assert!(documents.is_empty());
    }

    #[test]
    fn test_empty_corpus_builds_no_documents() {
        let dir = tempfile::tempdir().unwrap();
        let documents = build_documents(dir.path(), &options()).unwrap();
        assert!(documents.is_empty());
    }
}
