use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "exemplar")]
#[command(about = "Source corpus segmentation and typicality analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank the corpus files by typicality
    Typical {
        /// Corpus root to analyze
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the top N documents
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Gaussian kernel bandwidth
        #[arg(long)]
        bandwidth: Option<f64>,

        /// Restrict feature extraction to these member names
        #[arg(long = "members", value_delimiter = ',')]
        members: Option<Vec<String>>,

        /// Reduce feature strings to identifier sub-words
        #[arg(long)]
        normalize: bool,

        /// Use whole files as features, skipping segmentation
        #[arg(long = "no-segmentation")]
        no_segmentation: bool,

        /// Disable parallel analysis
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Partition the corpus around its most representative files
    Representative {
        /// Corpus root to analyze
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Size of the typical set anchoring the regions
        #[arg(long = "typical-count")]
        typical_count: Option<usize>,

        /// Gaussian kernel bandwidth
        #[arg(long)]
        bandwidth: Option<f64>,

        /// Restrict feature extraction to these member names
        #[arg(long = "members", value_delimiter = ',')]
        members: Option<Vec<String>>,

        /// Reduce feature strings to identifier sub-words
        #[arg(long)]
        normalize: bool,

        /// Use whole files as features, skipping segmentation
        #[arg(long = "no-segmentation")]
        no_segmentation: bool,

        /// Disable parallel analysis
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Inspect one file's segmentation graph and blacklist
    Segments {
        /// Source file to segment
        file: PathBuf,

        /// Bound the walk to one function instead of the whole file
        #[arg(long)]
        scope: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
