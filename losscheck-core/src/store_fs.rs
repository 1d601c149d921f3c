use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::store::ArtifactStore;

const READ_BUF: usize = 64 * 1024;

#[derive(Clone, Copy, Debug, Default)]
pub struct FsArtifactStore;

impl FsArtifactStore {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactStore for FsArtifactStore {
    fn size_of(&self, path: &Path) -> io::Result<u64> {
        let md = fs::metadata(path)?;
        if !md.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a regular file: {}", path.display()),
            ));
        }
        Ok(md.len())
    }

    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn open_reader(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        let f = File::open(path)?;
        Ok(Box::new(BufReader::with_capacity(READ_BUF, f)))
    }
}
