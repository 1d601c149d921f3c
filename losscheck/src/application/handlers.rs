use std::path::PathBuf;
use std::process::ExitCode;

use losscheck_core::error::Result;
use losscheck_core::store_factory::{Backend, open_store};
use losscheck_core::{OverallStatus, RunConfig, SizeProbe, Verifier, ratio, run_all};

use crate::presentation::cli::ConfigArgs;
use crate::presentation::report;

/// Defaults, then the JSON file, then flags, then positional names.
fn resolve_config(args: ConfigArgs) -> Result<RunConfig> {
    let mut cfg = match &args.config {
        Some(path) => RunConfig::from_json_file(path)?,
        None => RunConfig::default(),
    };
    if let Some(dir) = args.input_dir {
        cfg.input_root = dir;
    }
    if let Some(dir) = args.results_dir {
        cfg.results_root = dir;
    }
    if args.discover {
        cfg.discover_items()?;
    } else if !args.names.is_empty() {
        cfg.items = args.names;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn status_code(status: OverallStatus) -> ExitCode {
    match status {
        OverallStatus::AllVerifiedLossless => ExitCode::SUCCESS,
        OverallStatus::VerificationFailed => ExitCode::from(1),
        OverallStatus::IncompleteRun => ExitCode::from(2),
    }
}

pub fn handle_analyze(args: ConfigArgs) -> Result<ExitCode> {
    let cfg = resolve_config(args)?;
    let store = open_store(Backend::Fs);

    let agg = run_all(store.as_ref(), &cfg);
    let summary = agg.summarize();

    print!("{}", report::render_header(&cfg));
    for it in agg.items() {
        println!("{}", report::render_row(it));
    }
    print!("{}", report::render_summary(agg.items(), &summary));
    tracing::info!(status = ?summary.status, total = summary.total, "summary");
    Ok(status_code(summary.status))
}

pub fn handle_compare(original: PathBuf, reconstructed: PathBuf) -> Result<ExitCode> {
    let store = open_store(Backend::Fs);
    let outcome = Verifier::new(store.as_ref()).verify(&original, &reconstructed);
    println!("{outcome}");
    Ok(if outcome.is_identical() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

pub fn handle_ratio(original: PathBuf, compressed: PathBuf) -> Result<ExitCode> {
    let store = open_store(Backend::Fs);
    let probe = SizeProbe::new(store.as_ref());
    let orig = probe.probe(&original);
    let comp = probe.probe(&compressed);
    let r = ratio(orig, comp);

    if let Some(n) = orig {
        println!("Original size:     {n} bytes");
    }
    if let Some(n) = comp {
        println!("Compressed size:   {n} bytes");
    }
    println!("Compression ratio: {}", report::fmt_ratio(r));
    Ok(if r.is_defined() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

pub fn handle_config(args: ConfigArgs) -> Result<ExitCode> {
    let cfg = resolve_config(args)?;
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(ExitCode::SUCCESS)
}
