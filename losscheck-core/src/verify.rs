use std::io::{self, ErrorKind, Read};
use std::path::Path;

use crate::domain::VerificationOutcome;
use crate::store::ArtifactStore;

const CMP_CHUNK: usize = 64 * 1024;

/// Byte-exact lossless check of a reconstruction against its original.
pub struct Verifier<'a> {
    store: &'a dyn ArtifactStore,
}

impl<'a> Verifier<'a> {
    pub fn new(store: &'a dyn ArtifactStore) -> Self {
        Self { store }
    }

    /// Missing original wins over missing reconstruction. Faults while
    /// checking existence or comparing are logged and returned as
    /// `ComparisonError`; only a clean not-found counts as missing.
    pub fn verify(&self, original: &Path, reconstructed: &Path) -> VerificationOutcome {
        match self.classify(original, reconstructed) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(
                    original = %original.display(),
                    reconstructed = %reconstructed.display(),
                    error = %e,
                    "error comparing files"
                );
                VerificationOutcome::ComparisonError {
                    detail: format!(
                        "{} vs {}: {e}",
                        original.display(),
                        reconstructed.display()
                    ),
                }
            }
        }
    }

    fn classify(
        &self,
        original: &Path,
        reconstructed: &Path,
    ) -> io::Result<VerificationOutcome> {
        if !self.store.exists(original)? {
            return Ok(VerificationOutcome::MissingOriginal {
                path: original.to_path_buf(),
            });
        }
        if !self.store.exists(reconstructed)? {
            return Ok(VerificationOutcome::MissingReconstructed {
                path: reconstructed.to_path_buf(),
            });
        }
        Ok(if self.contents_equal(original, reconstructed)? {
            VerificationOutcome::Identical
        } else {
            VerificationOutcome::Different
        })
    }

    fn contents_equal(&self, a: &Path, b: &Path) -> io::Result<bool> {
        let (len_a, len_b) = (self.store.size_of(a)?, self.store.size_of(b)?);
        if len_a != len_b {
            tracing::debug!(len_a, len_b, "size mismatch");
            return Ok(false);
        }

        let mut ra = self.store.open_reader(a)?;
        let mut rb = self.store.open_reader(b)?;
        let mut buf_a = vec![0u8; CMP_CHUNK];
        let mut buf_b = vec![0u8; CMP_CHUNK];
        let mut offset = 0u64;
        loop {
            let na = read_full(&mut ra, &mut buf_a)?;
            let nb = read_full(&mut rb, &mut buf_b)?;
            if na != nb || buf_a[..na] != buf_b[..nb] {
                tracing::debug!(chunk_at = offset, "content mismatch");
                return Ok(false);
            }
            if na == 0 {
                return Ok(true);
            }
            offset += na as u64;
        }
    }
}

/// Fill `buf` unless EOF comes first; returns bytes read.
fn read_full(r: &mut dyn Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
