pub mod handlers;

use std::process::ExitCode;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use losscheck_core::error::Result;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // stdout carries the report; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze { cfg } => handlers::handle_analyze(cfg),
        Commands::Compare {
            original,
            reconstructed,
        } => handlers::handle_compare(original, reconstructed),
        Commands::Ratio {
            original,
            compressed,
        } => handlers::handle_ratio(original, compressed),
        Commands::Config { cfg } => handlers::handle_config(cfg),
    }
}
