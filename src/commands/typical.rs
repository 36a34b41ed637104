//! `exemplar typical`: the full typicality pipeline.

use crate::commands::corpus::{build_documents, CorpusOptions};
use crate::config::ExemplarConfig;
use crate::core::{RankedDocument, TypicalityReport};
use crate::io::output::{create_writer, OutputFormat};
use crate::ranking::{Document, ScoredDocument, TypicalityRanker};
use crate::text::{FeatureOptions, StopwordSet};
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

pub struct TypicalConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub bandwidth: Option<f64>,
    pub members: Option<Vec<String>>,
    pub normalize: bool,
    pub no_segmentation: bool,
    pub parallel: bool,
    pub config: Option<PathBuf>,
}

pub fn run_typical(config: TypicalConfig) -> Result<()> {
    let file_config = ExemplarConfig::load(config.config.as_deref(), &config.path)?;
    let bandwidth = config.bandwidth.unwrap_or(file_config.ranking.bandwidth);

    let corpus_options = corpus_options(
        &file_config,
        config.members,
        config.normalize,
        config.no_segmentation,
        config.parallel,
    );
    let documents = build_documents(&config.path, &corpus_options)?;
    if documents.is_empty() {
        log::warn!("no analyzable documents under {}", config.path.display());
    }

    let mut ranker = TypicalityRanker::new().with_bandwidth(bandwidth);
    if !config.parallel {
        ranker = ranker.sequential();
    }
    let ranked = ranker.rank(&documents, config.top);

    let report = TypicalityReport {
        corpus_root: config.path,
        timestamp: chrono::Utc::now(),
        bandwidth,
        document_count: documents.len(),
        ranking: ranked_documents(&documents, &ranked),
    };

    let destination = open_destination(config.output.as_ref())?;
    let mut writer = create_writer(destination, config.format);
    writer.write_typicality(&report)
}

/// Merge file-level feature settings with the CLI's, CLI flags winning
pub(crate) fn corpus_options(
    file_config: &ExemplarConfig,
    members: Option<Vec<String>>,
    normalize: bool,
    no_segmentation: bool,
    parallel: bool,
) -> CorpusOptions {
    let normalize = normalize || file_config.features.normalize_tokens;
    let features = if normalize {
        FeatureOptions::normalized(StopwordSet::english().merged(StopwordSet::programming()))
    } else {
        FeatureOptions::raw()
    };
    CorpusOptions {
        members: members.unwrap_or_else(|| file_config.features.members.clone()),
        features,
        skip_segmentation: no_segmentation || file_config.features.skip_segmentation,
        parallel,
        ignore_patterns: file_config.corpus.ignore_patterns.clone(),
    }
}

pub(crate) fn ranked_documents(
    documents: &[Document],
    ranked: &[ScoredDocument],
) -> Vec<RankedDocument> {
    ranked
        .iter()
        .enumerate()
        .map(|(position, scored)| RankedDocument {
            rank: position + 1,
            source: documents[scored.index].source.clone(),
            score: scored.score,
        })
        .collect()
}

pub(crate) fn open_destination(output: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(std::io::stdout()),
    })
}
