use anyhow::Result;
use clap::Parser;
use defectmap::cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare { root } => defectmap::commands::compare::run(&root),
        Commands::Correlate { root } => defectmap::commands::correlate::run(&root),
        Commands::Visualize { root } => defectmap::commands::visualize::run(&root),
    }
}
