//! `exemplar representative`: region partitioning around the typical set.

use crate::commands::corpus::build_documents;
use crate::commands::typical::{corpus_options, open_destination};
use crate::config::ExemplarConfig;
use crate::core::{Region, RepresentativeReport};
use crate::io::output::{create_writer, OutputFormat};
use crate::ranking::{partition_regions, TypicalityRanker};
use anyhow::Result;
use std::path::PathBuf;

pub struct RepresentativeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub typical_count: Option<usize>,
    pub bandwidth: Option<f64>,
    pub members: Option<Vec<String>>,
    pub normalize: bool,
    pub no_segmentation: bool,
    pub parallel: bool,
    pub config: Option<PathBuf>,
}

pub fn run_representative(config: RepresentativeConfig) -> Result<()> {
    let file_config = ExemplarConfig::load(config.config.as_deref(), &config.path)?;
    let bandwidth = config.bandwidth.unwrap_or(file_config.ranking.bandwidth);
    let typical_count = config
        .typical_count
        .unwrap_or(file_config.ranking.typical_count);

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
    let groups = partition_regions(&documents, typical_count, &ranker);

    let report = RepresentativeReport {
        corpus_root: config.path,
        timestamp: chrono::Utc::now(),
        typical_count,
        regions: groups
            .into_iter()
            .map(|group| Region {
                source: documents[group.typical].source.clone(),
                typicality: group.typicality,
                covered: group
                    .covered
                    .iter()
                    .map(|&index| documents[index].source.clone())
                    .collect(),
            })
            .collect(),
    };

    let destination = open_destination(config.output.as_ref())?;
    let mut writer = create_writer(destination, config.format);
    writer.write_representative(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;

    #[test]
    fn test_run_representative_partitions_corpus() {
        let corpus = tempfile::tempdir().unwrap();
        for (name, body) in [
            ("a.rs", "fn add(a: u32, b: u32) -> u32 { a + b }\n"),
            ("b.rs", "fn add(x: u32, y: u32) -> u32 { x + y }\n"),
            ("c.rs", "fn add(p: u32, q: u32) -> u32 { p + q }\n"),
            ("d.rs", "struct Point { x: f64, y: f64 }\nfn p() { let _ = 0; }\n"),
        ] {
            fs::write(corpus.path().join(name), body).unwrap();
        }
        let out = corpus.path().join("report.json");

        run_representative(RepresentativeConfig {
            path: corpus.path().to_path_buf(),
            format: OutputFormat::Json,
            output: Some(out.clone()),
            typical_count: Some(2),
            bandwidth: None,
            members: None,
            normalize: false,
            no_segmentation: false,
            parallel: false,
            config: None,
        })
        .unwrap();

        let report: RepresentativeReport =
            serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(report.regions.len(), 2);

        // every non-typical document appears in exactly one region
        let typical: HashSet<_> = report.regions.iter().map(|r| r.source.clone()).collect();
        let covered: Vec<_> = report
            .regions
            .iter()
            .flat_map(|r| r.covered.clone())
            .collect();
        let unique: HashSet<_> = covered.iter().cloned().collect();
        assert_eq!(covered.len(), unique.len());
        assert_eq!(typical.len() + covered.len(), 4);
    }
}
