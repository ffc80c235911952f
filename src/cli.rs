use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "defectmap")]
#[command(about = "Defect density and code complexity correlation analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare buggy vs fixed complexity for every defect in the study
    Compare {
        /// Root directory holding the data/ tree
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Correlate average complexity with defect density across projects
    Correlate {
        /// Root directory holding the data/ tree
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },

    /// Render the complexity vs defect density scatter visualization
    Visualize {
        /// Root directory holding the data/ tree
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
