#![forbid(unsafe_code)]

pub mod error;

pub mod config;
pub mod domain;

pub mod store;
pub mod store_factory;
pub mod store_fs;

pub mod aggregate;
pub mod probe;
pub mod ratio;
pub mod run;
pub mod verify;

#[cfg(test)]
mod testing;

// Re-exports: stable API surface
pub use aggregate::{OverallStatus, ResultAggregator, RunSummary};
pub use config::{Naming, RunConfig};
pub use domain::{ItemPaths, ItemResult, Ratio, SizeResult, VerificationOutcome};
pub use probe::SizeProbe;
pub use ratio::ratio;
pub use run::{process_item, run_all};
pub use verify::Verifier;
