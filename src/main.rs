use anyhow::Result;
use clap::Parser;
use exemplar::cli::{Cli, Commands};
use exemplar::commands::{
    init_config, run_representative, run_segments, run_typical, RepresentativeConfig,
    SegmentsConfig, TypicalConfig,
};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Typical {
            path,
            format,
            output,
            top,
            bandwidth,
            members,
            normalize,
            no_segmentation,
            no_parallel,
            config,
        } => run_typical(TypicalConfig {
            path,
            format: format.into(),
            output,
            top,
            bandwidth,
            members,
            normalize,
            no_segmentation,
            parallel: !no_parallel,
            config,
        }),
        Commands::Representative {
            path,
            format,
            output,
            typical_count,
            bandwidth,
            members,
            normalize,
            no_segmentation,
            no_parallel,
            config,
        } => run_representative(RepresentativeConfig {
            path,
            format: format.into(),
            output,
            typical_count,
            bandwidth,
            members,
            normalize,
            no_segmentation,
            parallel: !no_parallel,
            config,
        }),
        Commands::Segments {
            file,
            scope,
            format,
            output,
        } => run_segments(SegmentsConfig {
            file,
            scope,
            format: format.into(),
            output,
        }),
        Commands::Init { force } => init_config(force),
    }
}
