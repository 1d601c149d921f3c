use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "losscheck: lossless round-trip verification", long_about = None)]
pub struct Cli {
    /// Raise log verbosity on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the run configuration comes from.
#[derive(Args, Clone, Debug, Default)]
pub struct ConfigArgs {
    /// JSON config file (input_root, results_root, items, naming)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// directory holding the original files
    #[arg(long = "input-dir")]
    pub input_dir: Option<PathBuf>,

    /// directory holding codestreams and reconstructions
    #[arg(long = "results-dir")]
    pub results_dir: Option<PathBuf>,

    /// take item names from the originals found in the input directory
    #[arg(long, conflicts_with = "names")]
    pub discover: bool,

    /// item names; override the configured list
    pub names: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify every item and print the size/ratio/verification report
    Analyze {
        #[command(flatten)]
        cfg: ConfigArgs,
    },

    /// Byte-compare one original against its reconstruction
    Compare {
        original: PathBuf,
        reconstructed: PathBuf,
    },

    /// Print sizes and compression ratio for an original/codestream pair
    Ratio {
        original: PathBuf,
        compressed: PathBuf,
    },

    /// Print the effective configuration as JSON
    Config {
        #[command(flatten)]
        cfg: ConfigArgs,
    },
}
