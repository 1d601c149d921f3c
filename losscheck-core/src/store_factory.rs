use crate::store::ArtifactStore;
use crate::store_fs::FsArtifactStore;

pub enum Backend {
    Fs,
}

pub fn open_store(backend: Backend) -> Box<dyn ArtifactStore> {
    match backend {
        Backend::Fs => Box::new(FsArtifactStore::new()),
    }
}
