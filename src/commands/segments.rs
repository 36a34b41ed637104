//! `exemplar segments`: debug view of one file's segmentation.

use crate::commands::typical::open_destination;
use crate::core::{Error, SegmentationReport, SegmentSummary};
use crate::io::output::{create_writer, OutputFormat};
use crate::segment::{selector, GraphBuilder};
use crate::syntax::SyntaxUnit;
use anyhow::Result;
use std::path::PathBuf;

pub struct SegmentsConfig {
    pub file: PathBuf,
    pub scope: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

pub fn run_segments(config: SegmentsConfig) -> Result<()> {
    let source = std::fs::read_to_string(&config.file)?;
    let unit = SyntaxUnit::parse(&config.file, &source)?;

    let scope = match &config.scope {
        Some(name) => unit.function_named(name).ok_or_else(|| Error::UnresolvedScope {
            file: config.file.clone(),
            scope: name.clone(),
        })?,
        None => unit.root(),
    };

    let graph = GraphBuilder::build_scope(&unit, scope)?;
    let blacklist = selector::irrelevant_spans(&graph, unit.locate(scope));

    let root = graph.root();
    let report = SegmentationReport {
        file: config.file,
        scope: config.scope,
        segments: graph
            .segments()
            .map(|(id, segment)| SegmentSummary {
                label: segment.label.clone(),
                span: segment.span,
                weight: segment.weight,
                benefit: segment.benefit,
                depth: segment.depth,
                is_root: Some(id) == root,
            })
            .collect(),
        blacklist,
    };

    let destination = open_destination(config.output.as_ref())?;
    let mut writer = create_writer(destination, config.format);
    writer.write_segmentation(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_run_segments_reports_graph() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("subject.rs");
        fs::write(
            &file,
            "fn subject() {\n    if true {\n        let _x = 1;\n    }\n}\n",
        )
        .unwrap();
        let out = dir.path().join("segments.json");

        run_segments(SegmentsConfig {
            file,
            scope: Some("subject".to_string()),
            format: OutputFormat::Json,
            output: Some(out.clone()),
        })
        .unwrap();

        let report: SegmentationReport =
            serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(report.segments.len(), 2);
        assert_eq!(report.segments.iter().filter(|s| s.is_root).count(), 1);
    }

    #[test]
    fn test_unknown_scope_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("subject.rs");
        fs::write(&file, "fn subject() {}\n").unwrap();

        let result = run_segments(SegmentsConfig {
            file,
            scope: Some("missing".to_string()),
            format: OutputFormat::Json,
            output: None,
        });
        assert!(result.is_err());
    }
}
