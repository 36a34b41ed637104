use crate::core::{RepresentativeReport, SegmentationReport, TypicalityReport};
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::io::Write;

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_typicality(&mut self, report: &TypicalityReport) -> anyhow::Result<()>;
    fn write_representative(&mut self, report: &RepresentativeReport) -> anyhow::Result<()>;
    fn write_segmentation(&mut self, report: &SegmentationReport) -> anyhow::Result<()>;
}

pub fn create_writer(writer: Box<dyn Write>, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_typicality(&mut self, report: &TypicalityReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }

    fn write_representative(&mut self, report: &RepresentativeReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }

    fn write_segmentation(&mut self, report: &SegmentationReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, title: &str, timestamp: &chrono::DateTime<chrono::Utc>) -> anyhow::Result<()> {
        writeln!(self.writer, "# {title}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_typicality(&mut self, report: &TypicalityReport) -> anyhow::Result<()> {
        self.write_header("Typicality Report", &report.timestamp)?;
        writeln!(
            self.writer,
            "Corpus: `{}` ({} documents, bandwidth {})",
            report.corpus_root.display(),
            report.document_count,
            report.bandwidth
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Rank | Score | Source |")?;
        writeln!(self.writer, "|------|-------|--------|")?;
        for entry in &report.ranking {
            writeln!(
                self.writer,
                "| {} | {:.4} | `{}` |",
                entry.rank,
                entry.score,
                entry.source.display()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_representative(&mut self, report: &RepresentativeReport) -> anyhow::Result<()> {
        self.write_header("Representativeness Report", &report.timestamp)?;
        writeln!(
            self.writer,
            "Corpus: `{}` (typical set size {})",
            report.corpus_root.display(),
            report.typical_count
        )?;
        writeln!(self.writer)?;
        for region in &report.regions {
            writeln!(
                self.writer,
                "## `{}` explains {} document(s)",
                region.source.display(),
                region.covered.len()
            )?;
            writeln!(self.writer)?;
            for covered in &region.covered {
                writeln!(self.writer, "- `{}`", covered.display())?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_segmentation(&mut self, report: &SegmentationReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Segmentation: `{}`", report.file.display())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Lines | Depth | Weight | Benefit | Label |")?;
        writeln!(self.writer, "|-------|-------|--------|---------|-------|")?;
        for segment in &report.segments {
            writeln!(
                self.writer,
                "| {}-{} | {} | {} | {:.3} | `{}`{} |",
                segment.span.start_line,
                segment.span.end_line,
                segment.depth,
                segment.weight,
                segment.benefit,
                segment.label,
                if segment.is_root { " (root)" } else { "" }
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "Blacklisted regions: {}", report.blacklist.len())?;
        for span in &report.blacklist {
            writeln!(self.writer, "- lines {}-{}", span.start_line, span.end_line)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_typicality(&mut self, report: &TypicalityReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Typicality Ranking".bold().blue())?;
        writeln!(self.writer, "{}", "==================".blue())?;
        writeln!(
            self.writer,
            "{} documents, bandwidth {}",
            report.document_count, report.bandwidth
        )?;
        writeln!(self.writer)?;

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Rank", "Score", "Source"]);
        for entry in &report.ranking {
            table.add_row(vec![
                entry.rank.to_string(),
                format!("{:.4}", entry.score),
                entry.source.display().to_string(),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_representative(&mut self, report: &RepresentativeReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Representative Documents".bold().blue())?;
        writeln!(self.writer, "{}", "========================".blue())?;
        writeln!(self.writer)?;
        for (position, region) in report.regions.iter().enumerate() {
            writeln!(
                self.writer,
                "{} {} {}",
                format!("#{}", position + 1).bold(),
                region.source.display().to_string().green(),
                format!("(explains {})", region.covered.len()).dimmed()
            )?;
            for covered in &region.covered {
                writeln!(self.writer, "    {}", covered.display())?;
            }
        }
        Ok(())
    }

    fn write_segmentation(&mut self, report: &SegmentationReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            "Segmentation of".bold().blue(),
            report.file.display()
        )?;
        writeln!(self.writer)?;

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Lines", "Depth", "Weight", "Benefit", "Label"]);
        for segment in &report.segments {
            let label = if segment.is_root {
                format!("{} (root)", segment.label)
            } else {
                segment.label.clone()
            };
            table.add_row(vec![
                format!("{}-{}", segment.span.start_line, segment.span.end_line),
                segment.depth.to_string(),
                segment.weight.to_string(),
                format!("{:.3}", segment.benefit),
                label,
            ]);
        }
        writeln!(self.writer, "{table}")?;

        if report.blacklist.is_empty() {
            writeln!(self.writer, "{}", "No irrelevant regions.".green())?;
        } else {
            writeln!(self.writer, "{}", "Irrelevant regions:".yellow())?;
            for span in &report.blacklist {
                writeln!(self.writer, "  lines {}-{}", span.start_line, span.end_line)?;
            }
        }
        Ok(())
    }
}
