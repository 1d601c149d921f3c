use std::io::ErrorKind;
use std::path::Path;

use crate::domain::SizeResult;
use crate::store::ArtifactStore;

/// Resolves file sizes, folding absence and faults into `None`.
pub struct SizeProbe<'a> {
    store: &'a dyn ArtifactStore,
}

impl<'a> SizeProbe<'a> {
    pub fn new(store: &'a dyn ArtifactStore) -> Self {
        Self { store }
    }

    /// A fault other than not-found is logged and reported as absent.
    pub fn probe(&self, path: &Path) -> SizeResult {
        match self.store.size_of(path) {
            Ok(n) => {
                tracing::debug!(path = %path.display(), bytes = n, "probed size");
                Some(n)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "error getting size");
                None
            }
        }
    }
}
