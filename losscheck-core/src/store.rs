// losscheck_core/src/store.rs
use std::io::{self, Read};
use std::path::Path;

/// Read-only access to the artifacts an upstream coder left behind.
pub trait ArtifactStore {
    /// Byte size of a regular file. `ErrorKind::NotFound` means absent.
    fn size_of(&self, path: &Path) -> io::Result<u64>;

    /// `Ok(false)` only for a clean not-found; other stat faults are errors.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    fn open_reader(&self, path: &Path) -> io::Result<Box<dyn Read + '_>>;
}
