use std::time::Instant;

use crate::aggregate::ResultAggregator;
use crate::config::RunConfig;
use crate::domain::ItemResult;
use crate::probe::SizeProbe;
use crate::ratio::ratio;
use crate::store::ArtifactStore;
use crate::verify::Verifier;

/// Probe, rate and verify a single item. Never fails: every fault ends up
/// in the returned outcome or as an absent size.
pub fn process_item(store: &dyn ArtifactStore, config: &RunConfig, name: &str) -> ItemResult {
    let paths = config.paths_for(name);
    let probe = SizeProbe::new(store);

    let original_size = probe.probe(&paths.original);
    let compressed_size = probe.probe(&paths.codestream);
    let outcome = Verifier::new(store).verify(&paths.original, &paths.reconstructed);

    tracing::debug!(item = name, outcome = %outcome, "item processed");
    ItemResult {
        name: name.to_string(),
        original_size,
        compressed_size,
        ratio: ratio(original_size, compressed_size),
        outcome,
    }
}

/// Process every configured item in order.
pub fn run_all(store: &dyn ArtifactStore, config: &RunConfig) -> ResultAggregator {
    let started = Instant::now();
    tracing::info!(
        items = config.items.len(),
        input_root = %config.input_root.display(),
        results_root = %config.results_root.display(),
        "analysis started"
    );

    let mut agg = ResultAggregator::new();
    for name in &config.items {
        agg.record(process_item(store, config, name));
    }

    tracing::info!(elapsed_ms = started.elapsed().as_millis() as u64, "analysis finished");
    agg
}
