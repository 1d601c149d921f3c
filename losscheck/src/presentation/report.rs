use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use losscheck_core::{ItemResult, OverallStatus, Ratio, RunConfig, RunSummary, SizeResult};

const WIDE_RULE: usize = 60;

pub fn fmt_size(s: SizeResult) -> String {
    s.map(|n| n.to_string()).unwrap_or_else(|| "N/A".into())
}

pub fn fmt_ratio(r: Ratio) -> String {
    if r.is_defined() {
        format!("{:.2}:1", r.value())
    } else {
        "N/A".into()
    }
}

/// Absolute form for display; falls back to the configured value.
fn resolved(p: &Path) -> PathBuf {
    fs::canonicalize(p).unwrap_or_else(|_| p.to_path_buf())
}

pub fn render_header(cfg: &RunConfig) -> String {
    let eq = "=".repeat(WIDE_RULE);
    let dash = "-".repeat(WIDE_RULE);
    let mut out = String::new();
    let _ = writeln!(out, "{eq}");
    let _ = writeln!(out, "Analyzing Compression Results");
    let _ = writeln!(out, "{eq}");
    let _ = writeln!(out, "Input Dir:   {}", resolved(&cfg.input_root).display());
    let _ = writeln!(out, "Results Dir: {}", resolved(&cfg.results_root).display());
    let _ = writeln!(out, "{dash}");
    let _ = writeln!(
        out,
        "{:<18} {:>12} {:>12} {:>10} {}",
        "Filename", "Original", "Compressed", "Ratio", "Verification"
    );
    let _ = writeln!(out, "{dash}");
    out
}

pub fn render_row(it: &ItemResult) -> String {
    format!(
        "{:<18} {:>12} {:>12} {:>10} {}",
        it.name,
        fmt_size(it.original_size),
        fmt_size(it.compressed_size),
        fmt_ratio(it.ratio),
        it.outcome
    )
}

pub fn render_summary(items: &[ItemResult], s: &RunSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "-".repeat(WIDE_RULE));
    let _ = writeln!(out, "\nAnalysis Summary:");
    let _ = writeln!(out, "---------------");

    let _ = writeln!(out, "Compression Ratios:");
    for it in items {
        let _ = writeln!(out, "  - {:<15}: {}", it.name, fmt_ratio(it.ratio));
    }
    let _ = writeln!(out, "  (Ratios > 1.00:1 indicate successful size reduction.)");
    let _ = writeln!(out);

    let _ = writeln!(out, "Lossless Verification:");
    let _ = writeln!(
        out,
        "  - {} file(s) verified as Identical (Lossless).",
        s.identical
    );
    if s.different > 0 {
        let _ = writeln!(
            out,
            "  - *** {} file(s) FAILED verification (Original != Reconstructed)! ***",
            s.different
        );
    }
    if s.missing_or_error > 0 {
        let _ = writeln!(
            out,
            "  - {} file(s) had missing components or errors during verification.",
            s.missing_or_error
        );
    }
    if s.missing_sizes > 0 {
        let _ = writeln!(
            out,
            "  - {} file(s) missing an original or codestream size.",
            s.missing_sizes
        );
    }

    let _ = writeln!(out, "\nOverall Status:");
    let _ = writeln!(out, "---------------");
    match s.status {
        OverallStatus::AllVerifiedLossless => {
            let _ = writeln!(out, "All files processed and verified successfully (Lossless).");
        }
        OverallStatus::VerificationFailed => {
            let _ = writeln!(out, "One or more issues encountered: LOSSLESS VERIFICATION FAILED.");
            let _ = writeln!(out, "*** Check the encoder/decoder output for errors. ***");
        }
        OverallStatus::IncompleteRun => {
            let _ = writeln!(
                out,
                "One or more issues encountered (e.g., missing files). Please review details above."
            );
        }
    }
    let _ = writeln!(out, "{}", "=".repeat(WIDE_RULE));
    out
}
