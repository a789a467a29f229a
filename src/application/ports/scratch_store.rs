use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Stages uploads on local disk for the lifetime of one request.
#[async_trait]
pub trait ScratchStore: Send + Sync {
    async fn stage(&self, filename: &str, data: &[u8]) -> Result<ScratchFile, ScratchError>;

    /// Confirms an upload could be staged right now.
    async fn check_writable(&self) -> Result<(), ScratchError>;
}

/// Guard over a staged file. The file is removed when the guard drops.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "Scratch file removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove scratch file")
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScratchError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
