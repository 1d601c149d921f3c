use std::fs;
use std::path::Path;

use losscheck_core::store_factory::{Backend, open_store};
use losscheck_core::{
    OverallStatus, Ratio, RunConfig, VerificationOutcome, process_item, ratio, run_all,
};
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    cfg: RunConfig,
}

impl Fixture {
    fn new(items: &[&str]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input");
        let results = dir.path().join("results");
        fs::create_dir_all(&input).unwrap();
        fs::create_dir_all(&results).unwrap();
        let cfg = RunConfig {
            input_root: input,
            results_root: results,
            items: items.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        Self { _dir: dir, cfg }
    }

    fn write(&self, path: &Path, bytes: &[u8]) {
        fs::write(path, bytes).unwrap();
    }

    fn original(&self, name: &str, bytes: &[u8]) {
        self.write(&self.cfg.paths_for(name).original, bytes);
    }

    fn codestream(&self, name: &str, len: usize) {
        self.write(&self.cfg.paths_for(name).codestream, &vec![0xA5; len]);
    }

    fn reconstructed(&self, name: &str, bytes: &[u8]) {
        self.write(&self.cfg.paths_for(name).reconstructed, bytes);
    }

    /// Original, codestream and an exact reconstruction.
    fn lossless(&self, name: &str, orig_len: usize, comp_len: usize) {
        let data: Vec<u8> = (0..orig_len).map(|i| (i % 256) as u8).collect();
        self.original(name, &data);
        self.codestream(name, comp_len);
        self.reconstructed(name, &data);
    }
}

#[test]
fn identical_item_with_known_ratio() {
    let fx = Fixture::new(&["lena_ascii"]);
    fx.lossless("lena_ascii", 512, 200);

    let store = open_store(Backend::Fs);
    let agg = run_all(store.as_ref(), &fx.cfg);
    let it = &agg.items()[0];
    assert_eq!(it.original_size, Some(512));
    assert_eq!(it.compressed_size, Some(200));
    assert_eq!(it.outcome, VerificationOutcome::Identical);
    assert!((it.ratio.value() - 2.56).abs() < 1e-9);
    assert_eq!(format!("{:.2}:1", it.ratio.value()), "2.56:1");
    assert_eq!(agg.summarize().status, OverallStatus::AllVerifiedLossless);
}

#[test]
fn one_byte_difference_fails_the_whole_run() {
    let fx = Fixture::new(&["good", "bad", "gone"]);
    fx.lossless("good", 300, 100);
    fx.lossless("bad", 300, 100);
    let mut rec: Vec<u8> = (0..300).map(|i| (i % 256) as u8).collect();
    rec[150] = rec[150].wrapping_add(1);
    fx.reconstructed("bad", &rec);
    fx.original("gone", b"P2 1 1 255 0");

    let store = open_store(Backend::Fs);
    let agg = run_all(store.as_ref(), &fx.cfg);
    assert_eq!(agg.items()[1].outcome, VerificationOutcome::Different);
    assert!(matches!(
        agg.items()[2].outcome,
        VerificationOutcome::MissingReconstructed { .. }
    ));
    let s = agg.summarize();
    assert_eq!((s.identical, s.different, s.missing_or_error), (1, 1, 1));
    assert_eq!(s.status, OverallStatus::VerificationFailed);
}

#[test]
fn missing_codestream_still_verifies_but_is_incomplete() {
    let fx = Fixture::new(&["baboon_ascii"]);
    let data = vec![9u8; 128];
    fx.original("baboon_ascii", &data);
    fx.reconstructed("baboon_ascii", &data);

    let store = open_store(Backend::Fs);
    let agg = run_all(store.as_ref(), &fx.cfg);
    let it = &agg.items()[0];
    assert_eq!(it.compressed_size, None);
    assert_eq!(it.ratio, Ratio::UNDEFINED);
    assert_eq!(it.outcome, VerificationOutcome::Identical);
    assert_eq!(agg.summarize().status, OverallStatus::IncompleteRun);
}

#[test]
fn missing_original_item() {
    let fx = Fixture::new(&["quadrado_ascii", "lena_ascii"]);
    fx.codestream("quadrado_ascii", 40);
    fx.reconstructed("quadrado_ascii", b"whatever");
    fx.lossless("lena_ascii", 64, 32);

    let store = open_store(Backend::Fs);
    let agg = run_all(store.as_ref(), &fx.cfg);
    let it = &agg.items()[0];
    assert_eq!(
        it.outcome,
        VerificationOutcome::MissingOriginal {
            path: fx.cfg.paths_for("quadrado_ascii").original
        }
    );
    assert_eq!(it.original_size, None);
    assert_eq!(it.ratio.value(), 0.0);
    assert_eq!(agg.summarize().status, OverallStatus::IncompleteRun);
}

#[test]
fn nothing_on_disk_reports_missing_original() {
    let fx = Fixture::new(&["x"]);
    let store = open_store(Backend::Fs);
    let it = process_item(store.as_ref(), &fx.cfg, "x");
    assert!(matches!(it.outcome, VerificationOutcome::MissingOriginal { .. }));
    assert!(!it.sizes_present());
}

#[test]
fn zero_byte_codestream_has_no_ratio() {
    let fx = Fixture::new(&["z"]);
    fx.lossless("z", 10, 0);
    let store = open_store(Backend::Fs);
    let it = process_item(store.as_ref(), &fx.cfg, "z");
    assert_eq!(it.compressed_size, Some(0));
    assert!(!it.ratio.is_defined());
    assert_eq!(it.outcome, VerificationOutcome::Identical);
}

#[test]
fn rerun_on_unchanged_tree_is_stable() {
    let fx = Fixture::new(&["a", "b"]);
    fx.lossless("a", 1000, 333);
    fx.original("b", b"abc");
    fx.reconstructed("b", b"abd");

    let store = open_store(Backend::Fs);
    let first = run_all(store.as_ref(), &fx.cfg);
    let second = run_all(store.as_ref(), &fx.cfg);
    assert_eq!(first.items(), second.items());
    assert_eq!(first.summarize(), second.summarize());
}

#[test]
fn ratio_matches_quotient_for_positive_sizes() {
    for (a, b) in [(1u64, 1u64), (7, 3), (1_000_000, 17), (5, 10)] {
        let r = ratio(Some(a), Some(b));
        assert!((r.value() - a as f64 / b as f64).abs() < 1e-12);
    }
}
