use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{ScratchLease, ScratchStore, ScratchStoreError};
use crate::domain::ScratchName;

/// Scratch store backed by a directory on the local filesystem, by default
/// the system temporary directory. Uniqueness of scratch names is the only
/// coordination between concurrent requests.
pub struct TempDirScratchStore {
    base_path: PathBuf,
}

impl TempDirScratchStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ScratchStoreError> {
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Store rooted at the OS temporary directory.
    pub fn system() -> Result<Self, ScratchStoreError> {
        Self::new(std::env::temp_dir())
    }
}

#[async_trait]
impl ScratchStore for TempDirScratchStore {
    async fn stage(
        &self,
        name: &ScratchName,
        data: &[u8],
    ) -> Result<ScratchLease, ScratchStoreError> {
        let path = self.base_path.join(name.as_str());
        tokio::fs::write(&path, data).await?;
        Ok(ScratchLease::new(path))
    }
}
