//! In-memory store with fault injection, for unit tests.
use std::cell::Cell;
use std::collections::HashMap;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::store::ArtifactStore;

#[derive(Default)]
struct Entry {
    bytes: Vec<u8>,
    fail_stat: bool,
    fail_read_at: Option<usize>,
}

#[derive(Default)]
pub struct MemStore {
    files: HashMap<PathBuf, Entry>,
    open: Rc<Cell<usize>>,
}

impl MemStore {
    pub fn put(&mut self, path: &str, bytes: &[u8]) {
        self.files.insert(
            PathBuf::from(path),
            Entry {
                bytes: bytes.to_vec(),
                ..Default::default()
            },
        );
    }

    pub fn fail_stat(&mut self, path: &str) {
        self.files.entry(PathBuf::from(path)).or_default().fail_stat = true;
    }

    /// Reads succeed up to `offset`, then fail.
    pub fn fail_read_at(&mut self, path: &str, offset: usize) {
        self.files.entry(PathBuf::from(path)).or_default().fail_read_at = Some(offset);
    }

    pub fn open_handles(&self) -> usize {
        self.open.get()
    }
}

struct MemReader {
    data: Vec<u8>,
    pos: usize,
    fail_at: Option<usize>,
    open: Rc<Cell<usize>>,
}

impl Read for MemReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let end = self.fail_at.unwrap_or(self.data.len()).min(self.data.len());
        if self.pos >= end && self.fail_at.is_some() {
            return Err(io::Error::other("injected read fault"));
        }
        let n = buf.len().min(end - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

impl Drop for MemReader {
    fn drop(&mut self) {
        self.open.set(self.open.get() - 1);
    }
}

impl ArtifactStore for MemStore {
    fn size_of(&self, path: &Path) -> io::Result<u64> {
        match self.files.get(path) {
            None => Err(io::ErrorKind::NotFound.into()),
            Some(e) if e.fail_stat => Err(io::ErrorKind::PermissionDenied.into()),
            Some(e) => Ok(e.bytes.len() as u64),
        }
    }

    fn exists(&self, path: &Path) -> io::Result<bool> {
        match self.files.get(path) {
            None => Ok(false),
            Some(e) if e.fail_stat => Err(io::ErrorKind::PermissionDenied.into()),
            Some(_) => Ok(true),
        }
    }

    fn open_reader(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        let e = self.files.get(path).ok_or(io::ErrorKind::NotFound)?;
        self.open.set(self.open.get() + 1);
        Ok(Box::new(MemReader {
            data: e.bytes.clone(),
            pos: 0,
            fail_at: e.fail_read_at,
            open: Rc::clone(&self.open),
        }))
    }
}
