use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::ScratchName;

/// Scratch-file staging area shared by all requests. Each request stages
/// its upload under its own unique name and releases it when done.
#[async_trait]
pub trait ScratchStore: Send + Sync {
    /// Writes the upload to a scratch file. The write is complete when this
    /// returns; the remote call may then read the file by path.
    async fn stage(
        &self,
        name: &ScratchName,
        data: &[u8],
    ) -> Result<ScratchLease, ScratchStoreError>;
}

/// Exclusive ownership of one staged scratch file. Removal runs on every
/// exit path: [`release`](Self::release) is the ordinary asynchronous
/// removal, and `Drop` backstops cancellation and panics so an abandoned
/// lease never leaks its file. Removal failure is logged, never surfaced.
#[derive(Debug)]
pub struct ScratchLease {
    path: PathBuf,
    released: bool,
}

impl ScratchLease {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            released: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the scratch file, best-effort. Consumes the lease; the file
    /// must not be read afterwards.
    pub async fn release(mut self) {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove scratch file"
                );
            }
        }
        self.released = true;
    }
}

impl Drop for ScratchLease {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove scratch file on drop"
                );
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScratchStoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
